//! Fuzz target for person identity parsing.
//!
//! Exercises the loose parser and the text decode tiers; parsing may
//! reject the input but must not panic, and a parsed identity must render
//! back to external form.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stele_raw::parse_person_ident;

fuzz_target!(|data: &[u8]| {
    if let Some(ident) = parse_person_ident(data, 0) {
        let _ = ident.to_external_string();
    }
});
