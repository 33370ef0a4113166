//! Identity value types for Stele.
//!
//! This crate provides the 160-bit object identity in its three forms
//! (immutable, mutable scratch, and prefix abbreviation), the object type
//! and tree entry file mode tables, and the person identity attached to
//! commits and tags.

mod abbrev;
mod error;
mod filemode;
mod mutable;
mod oid;
mod person;

pub use abbrev::AbbreviatedObjectId;
pub use error::IdError;
pub use filemode::FileMode;
pub use mutable::MutableObjectId;
pub use oid::{ObjectId, ObjectType, OBJECT_ID_HEX_LENGTH, OBJECT_ID_LENGTH};
pub use person::PersonIdent;

/// Result type for identity operations.
pub type Result<T> = std::result::Result<T, IdError>;
