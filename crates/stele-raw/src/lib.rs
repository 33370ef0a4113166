//! Raw buffer scanning for canonical object encodings.
//!
//! Cursor-based primitives over byte buffers: literal matching, forward and
//! backward boundary search, base-10 parsing, header location, and the
//! fallback-chain text decoder. The scanning functions never allocate;
//! decoded text is the only owned output, and buffers are never modified.

pub mod decode;
pub mod header;
mod ident;
pub mod scan;

pub use decode::{Charset, DecodeError};
pub use ident::parse_person_ident;
