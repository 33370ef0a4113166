//! Fuzz target for structural object validation.
//!
//! Tests that the checker handles arbitrary input for every object type
//! without panicking; verdicts are free to be false, never a crash.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stele_check::ObjectChecker;
use stele_types::ObjectType;

fuzz_target!(|data: &[u8]| {
    let mut checker = ObjectChecker::new();
    for object_type in [
        ObjectType::Commit,
        ObjectType::Tree,
        ObjectType::Blob,
        ObjectType::Tag,
    ] {
        let _ = checker.check(object_type, data);
    }
});
