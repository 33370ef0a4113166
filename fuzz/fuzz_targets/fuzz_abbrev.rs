//! Fuzz target for abbreviation parsing.
//!
//! Any input accepted as an abbreviation must render back to the digits it
//! was parsed from and prefix-match ids it claims to begin.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stele_types::AbbreviatedObjectId;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(abbr) = AbbreviatedObjectId::from_hex(s) else {
        return;
    };
    assert_eq!(abbr.name(), s.to_ascii_lowercase());
    if let Some(id) = abbr.to_object_id() {
        assert!(id.starts_with(&abbr));
        assert_eq!(id.to_hex(), abbr.name());
    }
});
