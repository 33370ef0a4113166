//! Identity error types.

use thiserror::Error;

/// Errors produced when constructing identity values from raw input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    /// The input is not a well formed hex id.
    #[error("invalid object id: {0}")]
    InvalidId(String),

    /// The input has the wrong number of hex digits.
    #[error("invalid id length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The source buffer cannot hold an id at the requested offset.
    #[error("buffer too short: need {needed} bytes at offset {offset}, have {available}")]
    BufferTooShort {
        needed: usize,
        offset: usize,
        available: usize,
    },

    /// The object type name or code is not recognized.
    #[error("unknown object type: {0}")]
    UnknownType(String),
}
