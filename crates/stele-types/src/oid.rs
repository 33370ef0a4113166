//! Immutable object identifiers and object type codes.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{AbbreviatedObjectId, IdError, Result};

/// Number of raw bytes in an object identifier.
pub const OBJECT_ID_LENGTH: usize = 20;

/// Number of hex digits naming a complete object identifier.
pub const OBJECT_ID_HEX_LENGTH: usize = 2 * OBJECT_ID_LENGTH;

/// A 20-byte object identifier.
///
/// Equality and ordering are byte-wise over the full digest. Values are
/// immutable once constructed; use [`MutableObjectId`](crate::MutableObjectId)
/// as a reusable scratch buffer during scanning, and convert to `ObjectId`
/// before retaining anything in a lookup structure.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) [u8; OBJECT_ID_LENGTH]);

impl ObjectId {
    /// The all-zeros id, used as a placeholder for "no object".
    pub const fn zero() -> Self {
        Self([0u8; OBJECT_ID_LENGTH])
    }

    /// Creates an id from raw bytes.
    pub fn from_bytes(bytes: [u8; OBJECT_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Reads an id from 20 raw bytes at `offset` within `buf`.
    pub fn from_raw_at(buf: &[u8], offset: usize) -> Result<Self> {
        let raw = buf
            .get(offset..offset + OBJECT_ID_LENGTH)
            .ok_or(IdError::BufferTooShort {
                needed: OBJECT_ID_LENGTH,
                offset,
                available: buf.len(),
            })?;
        let mut bytes = [0u8; OBJECT_ID_LENGTH];
        bytes.copy_from_slice(raw);
        Ok(Self(bytes))
    }

    /// Parses an id from exactly 40 hex characters, case-insensitive.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        if hex_str.len() != OBJECT_ID_HEX_LENGTH {
            return Err(IdError::InvalidLength {
                expected: OBJECT_ID_HEX_LENGTH,
                actual: hex_str.len(),
            });
        }
        let mut bytes = [0u8; OBJECT_ID_LENGTH];
        hex::decode_to_slice(hex_str, &mut bytes)
            .map_err(|_| IdError::InvalidId(hex_str.to_string()))?;
        Ok(Self(bytes))
    }

    /// Parses an id from 40 ASCII hex characters at `offset` within `buf`.
    pub fn from_hex_at(buf: &[u8], offset: usize) -> Result<Self> {
        let src = buf
            .get(offset..offset + OBJECT_ID_HEX_LENGTH)
            .ok_or(IdError::BufferTooShort {
                needed: OBJECT_ID_HEX_LENGTH,
                offset,
                available: buf.len(),
            })?;
        let mut bytes = [0u8; OBJECT_ID_LENGTH];
        hex::decode_to_slice(src, &mut bytes)
            .map_err(|_| IdError::InvalidId(String::from_utf8_lossy(src).into_owned()))?;
        Ok(Self(bytes))
    }

    /// Non-throwing probe: true iff `s` is exactly 40 hex digits.
    pub fn is_id(s: &str) -> bool {
        s.len() == OBJECT_ID_HEX_LENGTH && s.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// The raw 20 bytes.
    pub fn as_bytes(&self) -> &[u8; OBJECT_ID_LENGTH] {
        &self.0
    }

    /// The first 8 bits of the id, a discriminator for fan-out style maps.
    pub fn first_byte(&self) -> u8 {
        self.0[0]
    }

    /// A 32-bit hash read from bytes `[4, 8)` of the digest.
    ///
    /// Word two is used instead of the leading word because the first byte
    /// commonly serves as a fan-out discriminator elsewhere; taking a
    /// different word keeps the two uncorrelated.
    pub fn hash_code(&self) -> u32 {
        u32::from_be_bytes([self.0[4], self.0[5], self.0[6], self.0[7]])
    }

    /// Compares against a digest serialized in raw form at `pos` in `buf`.
    ///
    /// At least 20 bytes starting at `pos` are required.
    pub fn cmp_raw(&self, buf: &[u8], pos: usize) -> Ordering {
        self.0.as_slice().cmp(&buf[pos..pos + OBJECT_ID_LENGTH])
    }

    /// Returns a prefix abbreviation of this id with `len` hex digits.
    ///
    /// Uniqueness is not guaranteed; callers needing unique abbreviations
    /// must consult the object database they abbreviate within.
    pub fn abbreviate(&self, len: usize) -> AbbreviatedObjectId {
        AbbreviatedObjectId::from_full_bytes(self.0, len)
    }

    /// True iff this id begins with the given abbreviation.
    pub fn starts_with(&self, abbr: &AbbreviatedObjectId) -> bool {
        abbr.prefix_compare(self) == Ordering::Equal
    }

    /// The 40 character lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Hash for ObjectId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.to_hex())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; OBJECT_ID_LENGTH]> for ObjectId {
    fn from(bytes: [u8; OBJECT_ID_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<ObjectId> for [u8; OBJECT_ID_LENGTH] {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

impl Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ObjectId::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Canonical object types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// Commit object.
    Commit,
    /// Directory listing.
    Tree,
    /// File content.
    Blob,
    /// Annotated tag.
    Tag,
}

impl ObjectType {
    /// Returns the type name used in object headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Commit => "commit",
            Self::Tree => "tree",
            Self::Blob => "blob",
            Self::Tag => "tag",
        }
    }

    /// Parses an object type from its header name.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "commit" => Ok(Self::Commit),
            "tree" => Ok(Self::Tree),
            "blob" => Ok(Self::Blob),
            "tag" => Ok(Self::Tag),
            _ => Err(IdError::UnknownType(s.to_string())),
        }
    }

    /// Returns the numeric type code.
    pub fn code(&self) -> u8 {
        match self {
            Self::Commit => 1,
            Self::Tree => 2,
            Self::Blob => 3,
            Self::Tag => 4,
        }
    }

    /// Parses an object type from its numeric code.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Self::Commit),
            2 => Ok(Self::Tree),
            3 => Ok(Self::Blob),
            4 => Ok(Self::Tag),
            _ => Err(IdError::UnknownType(code.to_string())),
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let hex = "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3";
        let id = ObjectId::from_hex(hex).unwrap();
        assert_eq!(id.to_hex(), hex);
    }

    #[test]
    fn test_from_hex_uppercase() {
        let x = "0123456789ABCDEFabcdef1234567890abcdefAB";
        let id = ObjectId::from_hex(x).unwrap();
        assert_eq!(id.to_hex(), x.to_lowercase());
    }

    #[test]
    fn test_from_hex_wrong_length() {
        assert!(ObjectId::from_hex("abc").is_err());
        assert!(ObjectId::from_hex("a94a8fe5ccb19ba61c4c0873d391e987982fbbd3ff").is_err());
    }

    #[test]
    fn test_from_hex_bad_digit() {
        let result = ObjectId::from_hex("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_hex_at() {
        let buf = b"tree a94a8fe5ccb19ba61c4c0873d391e987982fbbd3\n";
        let id = ObjectId::from_hex_at(buf, 5).unwrap();
        assert_eq!(id.to_hex(), "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3");
    }

    #[test]
    fn test_from_hex_at_short_buffer() {
        let err = ObjectId::from_hex_at(b"a94a8f", 0).unwrap_err();
        assert!(matches!(err, IdError::BufferTooShort { .. }));
    }

    #[test]
    fn test_from_raw_at() {
        let mut buf = vec![0u8; 25];
        buf[5..25].copy_from_slice(&[0xab; 20]);
        let id = ObjectId::from_raw_at(&buf, 5).unwrap();
        assert_eq!(*id.as_bytes(), [0xab; 20]);
        assert!(ObjectId::from_raw_at(&buf, 6).is_err());
    }

    #[test]
    fn test_zero() {
        assert_eq!(ObjectId::zero().to_hex(), "0".repeat(40));
    }

    #[test]
    fn test_is_id() {
        assert!(ObjectId::is_id("def4c620bc3713bb1bb26b808ec9312548e73946"));
        assert!(ObjectId::is_id("Def4c620bc3713bb1bb26b808ec9312548e73946"));
        assert!(!ObjectId::is_id("bob"));
        assert!(!ObjectId::is_id("def4c620bc3713bb1bb26b808ec9312548e7394"));
        assert!(!ObjectId::is_id("gef4c620bc3713bb1bb26b808ec9312548e73946"));
    }

    #[test]
    fn test_equality_and_hash_code() {
        let x = "def4c620bc3713bb1bb26b808ec9312548e73946";
        let a = ObjectId::from_hex(x).unwrap();
        let b = ObjectId::from_hex(x).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_hash_code_reads_word_two() {
        let mut bytes = [0u8; 20];
        bytes[4] = 0x12;
        bytes[5] = 0x34;
        bytes[6] = 0x56;
        bytes[7] = 0x78;
        let id = ObjectId::from_bytes(bytes);
        assert_eq!(id.hash_code(), 0x1234_5678);
    }

    #[test]
    fn test_ordering_is_bytewise() {
        let a = ObjectId::from_bytes([0; 20]);
        let b = ObjectId::from_bytes([1; 20]);
        assert!(a < b);

        let mut c = [0u8; 20];
        c[19] = 1;
        assert!(a < ObjectId::from_bytes(c));
    }

    #[test]
    fn test_cmp_raw() {
        let id = ObjectId::from_bytes([5; 20]);
        let mut buf = vec![0u8; 22];
        buf[1..21].copy_from_slice(&[5; 20]);
        assert_eq!(id.cmp_raw(&buf, 1), Ordering::Equal);
        buf[20] = 6;
        assert_eq!(id.cmp_raw(&buf, 1), Ordering::Less);
        buf[20] = 4;
        assert_eq!(id.cmp_raw(&buf, 1), Ordering::Greater);
    }

    #[test]
    fn test_first_byte() {
        let id = ObjectId::from_hex("ff00eedd003713bb1bb26b808ec9312548e73946").unwrap();
        assert_eq!(id.first_byte(), 0xff);
    }

    #[test]
    fn test_display_is_hex() {
        let x = "ff00eedd003713bb1bb26b808ec9312548e73946";
        let id = ObjectId::from_hex(x).unwrap();
        assert_eq!(format!("{}", id), x);
    }

    #[test]
    fn test_debug_contains_hex() {
        let id = ObjectId::zero();
        let debug = format!("{:?}", id);
        assert!(debug.contains("ObjectId"));
        assert!(debug.contains(&"0".repeat(40)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = ObjectId::from_hex("a94a8fe5ccb19ba61c4c0873d391e987982fbbd3").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"a94a8fe5ccb19ba61c4c0873d391e987982fbbd3\"");
        let parsed: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_object_type_roundtrip() {
        for ot in [
            ObjectType::Commit,
            ObjectType::Tree,
            ObjectType::Blob,
            ObjectType::Tag,
        ] {
            assert_eq!(ObjectType::parse(ot.as_str()).unwrap(), ot);
            assert_eq!(ObjectType::from_code(ot.code()).unwrap(), ot);
        }
    }

    #[test]
    fn test_object_type_invalid() {
        assert!(ObjectType::parse("invalid").is_err());
        assert!(ObjectType::from_code(0).is_err());
        assert!(ObjectType::from_code(5).is_err());
    }
}
