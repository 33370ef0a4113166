//! Header literals for the canonical commit and tag encodings.
//!
//! Each constant includes the single space separating the keyword from its
//! value, so a successful match leaves the cursor on the first value byte.

/// Header "tree ".
pub const TREE: &[u8] = b"tree ";

/// Header "parent ".
pub const PARENT: &[u8] = b"parent ";

/// Header "author ".
pub const AUTHOR: &[u8] = b"author ";

/// Header "committer ".
pub const COMMITTER: &[u8] = b"committer ";

/// Header "encoding ".
pub const ENCODING: &[u8] = b"encoding ";

/// Header "object ".
pub const OBJECT: &[u8] = b"object ";

/// Header "type ".
pub const TYPE: &[u8] = b"type ";

/// Header "tag ".
pub const TAG: &[u8] = b"tag ";

/// Header "tagger ".
pub const TAGGER: &[u8] = b"tagger ";
