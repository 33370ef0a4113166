//! Fallback-chain text decoding.
//!
//! Object buffers carry text in whatever encoding the writing client used.
//! Decoding therefore runs through tiers: UTF-8 first, then the encoding
//! the buffer declares (or the caller requests), and finally a
//! byte-preserving conversion that cannot fail. Callers that need to know
//! whether a tier succeeded use [`decode_no_fallback`]; everyone else uses
//! [`decode`] and always gets a string back.

use thiserror::Error;

use crate::scan;

/// The byte sequence is not valid in any tested character set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("byte sequence is not valid in any tested character set")]
pub struct DecodeError;

/// Character sets understood by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// UTF-8, the canonical encoding assumed when none is declared.
    #[default]
    Utf8,
    /// ISO-8859-1: each byte is one code point, so decoding never fails.
    Latin1,
}

impl Charset {
    /// Resolves an encoding label to a supported character set.
    pub fn for_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("utf-8") || label.eq_ignore_ascii_case("utf8") {
            Some(Self::Utf8)
        } else if label.eq_ignore_ascii_case("iso-8859-1")
            || label.eq_ignore_ascii_case("iso8859-1")
            || label.eq_ignore_ascii_case("latin-1")
            || label.eq_ignore_ascii_case("latin1")
        {
            Some(Self::Latin1)
        } else {
            None
        }
    }
}

/// Determines the character set declared by a commit or tag buffer.
///
/// Locates the "encoding " header and resolves its value. An absent header
/// or an unrecognized label yields UTF-8; the decode tiers below absorb any
/// mismatch.
pub fn parse_encoding(b: &[u8]) -> Charset {
    let Some(enc) = scan::encoding(b, 0) else {
        return Charset::Utf8;
    };
    let lf = scan::next_lf(b, enc);
    let end = lf.saturating_sub(1).max(enc);
    let label = decode(Charset::Utf8, &b[enc..end]);
    Charset::for_label(&label).unwrap_or(Charset::Utf8)
}

/// Decodes `bytes` under the given character set if possible.
///
/// Never fails: when no tier accepts the bytes, the byte-preserving
/// conversion of [`extract_binary_string`] is used, so at least every byte
/// is present in the output.
pub fn decode(cs: Charset, bytes: &[u8]) -> String {
    decode_no_fallback(cs, bytes).unwrap_or_else(|_| extract_binary_string(bytes))
}

/// Decodes `bytes` under the given character set, without the byte-
/// preserving last resort.
///
/// UTF-8 is tried first on the assumption that decoding fails if the data
/// was not actually written that way, then the requested character set.
pub fn decode_no_fallback(cs: Charset, bytes: &[u8]) -> Result<String, DecodeError> {
    if let Ok(s) = std::str::from_utf8(bytes) {
        return Ok(s.to_string());
    }
    match cs {
        Charset::Utf8 => Err(DecodeError),
        Charset::Latin1 => Ok(extract_binary_string(bytes)),
    }
}

/// Decodes `bytes` as ISO-8859-1: a raw binary to char conversion mapping
/// each byte to the code point of the same value.
pub fn extract_binary_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Locates the encoding declared by the buffer and decodes `bytes` through
/// the full fallback chain under it.
pub fn decode_declared(b: &[u8], bytes: &[u8]) -> String {
    decode(parse_encoding(b), bytes)
}
