//! Person identities for commits and tags.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A person identity: who wrote or committed something, and when.
///
/// Combines a name, an email address, a timestamp, and the declared time
/// zone. The timestamp is held in milliseconds, but the external text form
/// carries whole seconds only, so equality deliberately compares at
/// one-second resolution; finer differences are not semantically
/// distinguished.
#[derive(Clone, Debug)]
pub struct PersonIdent {
    name: String,
    email: String,
    when_ms: i64,
    tz_offset_min: i32,
}

impl PersonIdent {
    /// Creates an identity from its parts. `when_ms` is milliseconds since
    /// the epoch; `tz_offset_min` is minutes east of UTC, negative west.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        when_ms: i64,
        tz_offset_min: i32,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            when_ms,
            tz_offset_min,
        }
    }

    /// Name of the person.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address of the person.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Timestamp in milliseconds since the epoch.
    pub fn when_ms(&self) -> i64 {
        self.when_ms
    }

    /// Timestamp in whole seconds since the epoch, as written externally.
    pub fn when_seconds(&self) -> i64 {
        self.when_ms / 1000
    }

    /// Declared time zone as minutes east of UTC; negative west of UTC.
    pub fn timezone_offset_minutes(&self) -> i32 {
        self.tz_offset_min
    }

    /// Formats for storage: `"Name <email> <epoch-seconds> <+/-HHMM>"`.
    pub fn to_external_string(&self) -> String {
        let offset = self.tz_offset_min;
        let sign = if offset < 0 { '-' } else { '+' };
        let offset = offset.unsigned_abs();
        format!(
            "{} <{}> {} {}{:02}{:02}",
            self.name,
            self.email,
            self.when_seconds(),
            sign,
            offset / 60,
            offset % 60
        )
    }
}

impl PartialEq for PersonIdent {
    fn eq(&self, other: &Self) -> bool {
        // One-second resolution; the time zone does not participate.
        self.name == other.name
            && self.email == other.email
            && self.when_ms / 1000 == other.when_ms / 1000
    }
}

impl Eq for PersonIdent {}

impl Hash for PersonIdent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.email.hash(state);
        (self.when_ms / 1000).hash(state);
    }
}

impl fmt::Display for PersonIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_external_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_external_string() {
        let p = PersonIdent::new("A U Thor", "author@example.com", 1_142_878_501_000, -300);
        assert_eq!(
            p.to_external_string(),
            "A U Thor <author@example.com> 1142878501 -0500"
        );
    }

    #[test]
    fn test_to_external_string_positive_offset() {
        let p = PersonIdent::new("A U Thor", "author@example.com", 1_142_878_501_000, 150);
        assert_eq!(
            p.to_external_string(),
            "A U Thor <author@example.com> 1142878501 +0230"
        );
    }

    #[test]
    fn test_to_external_string_zero_offset() {
        let p = PersonIdent::new("A", "a@b", 0, 0);
        assert_eq!(p.to_external_string(), "A <a@b> 0 +0000");
    }

    #[test]
    fn test_offset_pads_minutes() {
        let p = PersonIdent::new("A", "a@b", 0, -195);
        assert_eq!(p.to_external_string(), "A <a@b> 0 -0315");
    }

    #[test]
    fn test_equality_truncates_to_seconds() {
        let a = PersonIdent::new("A", "a@b", 1_000_250, 0);
        let b = PersonIdent::new("A", "a@b", 1_000_999, 0);
        let c = PersonIdent::new("A", "a@b", 1_001_000, 0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_equality_ignores_timezone() {
        let a = PersonIdent::new("A", "a@b", 1_142_878_501_000, -300);
        let b = PersonIdent::new("A", "a@b", 1_142_878_501_000, 60);
        assert_eq!(a, b);
    }

    #[test]
    fn test_inequality_on_name_and_email() {
        let a = PersonIdent::new("A", "a@b", 0, 0);
        assert_ne!(a, PersonIdent::new("B", "a@b", 0, 0));
        assert_ne!(a, PersonIdent::new("A", "b@b", 0, 0));
    }

    #[test]
    fn test_accessors() {
        let p = PersonIdent::new("A U Thor", "author@example.com", 1_500, -195);
        assert_eq!(p.name(), "A U Thor");
        assert_eq!(p.email(), "author@example.com");
        assert_eq!(p.when_ms(), 1_500);
        assert_eq!(p.when_seconds(), 1);
        assert_eq!(p.timezone_offset_minutes(), -195);
    }
}
