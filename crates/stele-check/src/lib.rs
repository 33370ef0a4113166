//! Structural validation of canonical object encodings.
//!
//! Verifies that an object buffer is formatted correctly before it is
//! trusted. Only the fields of the object are checked: the id of the
//! object is not recomputed, and connectivity between objects is not
//! followed. Both of those belong to the caller.

mod check;

pub use check::ObjectChecker;
