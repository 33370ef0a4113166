//! Prefix abbreviations of object identifiers.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{IdError, ObjectId, Result, OBJECT_ID_HEX_LENGTH, OBJECT_ID_LENGTH};

/// A prefix abbreviation of an [`ObjectId`].
///
/// Shortened ids use enough leading hex digits to stay unique within the
/// repository they were generated from, typically 6-10 digits. The hex
/// prefix is held in binary form so matching against a full id is a byte
/// compare, not a string compare. An odd final digit occupies the low
/// nibble of the byte at `length / 2`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AbbreviatedObjectId {
    bytes: [u8; OBJECT_ID_LENGTH],
    length: usize,
}

impl AbbreviatedObjectId {
    /// Non-throwing probe: true iff `s` has 2 to 40 hex digits and can be
    /// parsed with [`from_hex`](Self::from_hex).
    pub fn is_id(s: &str) -> bool {
        (2..=OBJECT_ID_HEX_LENGTH).contains(&s.len())
            && s.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Parses an abbreviation from up to 40 hex characters.
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }

    /// Parses an abbreviation from ASCII hex characters in `buf[offset..end]`.
    pub fn from_hex_at(buf: &[u8], offset: usize, end: usize) -> Result<Self> {
        let src = buf
            .get(offset..end)
            .ok_or(IdError::BufferTooShort {
                needed: end.saturating_sub(offset),
                offset,
                available: buf.len(),
            })?;
        Self::parse(src)
    }

    /// Converts a full [`ObjectId`] into a complete abbreviation.
    pub fn from_object_id(id: &ObjectId) -> Self {
        Self {
            bytes: *id.as_bytes(),
            length: OBJECT_ID_HEX_LENGTH,
        }
    }

    pub(crate) fn from_full_bytes(bytes: [u8; OBJECT_ID_LENGTH], length: usize) -> Self {
        assert!(
            length <= OBJECT_ID_HEX_LENGTH,
            "abbreviation length {} exceeds {}",
            length,
            OBJECT_ID_HEX_LENGTH
        );
        Self { bytes, length }
    }

    fn parse(src: &[u8]) -> Result<Self> {
        if src.len() > OBJECT_ID_HEX_LENGTH {
            return Err(IdError::InvalidLength {
                expected: OBJECT_ID_HEX_LENGTH,
                actual: src.len(),
            });
        }
        let mut bytes = [0u8; OBJECT_ID_LENGTH];
        let pairs = src.len() / 2;
        hex::decode_to_slice(&src[..pairs * 2], &mut bytes[..pairs])
            .map_err(|_| IdError::InvalidId(String::from_utf8_lossy(src).into_owned()))?;
        if src.len() % 2 == 1 {
            let nibble = (src[src.len() - 1] as char)
                .to_digit(16)
                .ok_or_else(|| IdError::InvalidId(String::from_utf8_lossy(src).into_owned()))?;
            bytes[pairs] = nibble as u8;
        }
        Ok(Self {
            bytes,
            length: src.len(),
        })
    }

    /// Number of hex digits appearing in this abbreviation.
    pub fn len(&self) -> usize {
        self.length
    }

    /// True iff no hex digits are present.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// True iff this abbreviation carries all 40 digits of a full id.
    pub fn is_complete(&self) -> bool {
        self.length == OBJECT_ID_HEX_LENGTH
    }

    /// The complete [`ObjectId`], if this abbreviation is complete.
    pub fn to_object_id(&self) -> Option<ObjectId> {
        self.is_complete().then(|| ObjectId::from_bytes(self.bytes))
    }

    /// The first 8 bits, a fan-out discriminator. Only meaningful when at
    /// least two digits are present.
    pub fn first_byte(&self) -> u8 {
        self.bytes[0]
    }

    /// Compares this abbreviation to a full object id.
    ///
    /// Returns `Equal` when the abbreviation exactly matches the first
    /// [`len`](Self::len) digits of `other`, otherwise the ordering of the
    /// object this abbreviation names relative to `other`. The comparison
    /// covers `len / 2` whole bytes, plus the high nibble of the next byte
    /// when the length is odd.
    pub fn prefix_compare(&self, other: &ObjectId) -> Ordering {
        let whole = self.length / 2;
        match self.bytes[..whole].cmp(&other.as_bytes()[..whole]) {
            Ordering::Equal if self.length % 2 == 1 => {
                self.bytes[whole].cmp(&(other.as_bytes()[whole] >> 4))
            }
            ord => ord,
        }
    }

    /// The abbreviation in lowercase hex, exactly [`len`](Self::len) digits.
    pub fn name(&self) -> String {
        let mut hex = hex::encode(&self.bytes[..self.length.div_ceil(2)]);
        if self.length % 2 == 1 {
            // The final byte holds the odd digit in its low nibble; drop the
            // padding high nibble from the rendered form.
            hex.remove(self.length - 1);
        }
        hex
    }
}

impl Hash for AbbreviatedObjectId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(u32::from_be_bytes([
            self.bytes[4],
            self.bytes[5],
            self.bytes[6],
            self.bytes[7],
        ]));
    }
}

impl fmt::Debug for AbbreviatedObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AbbreviatedObjectId({})", self.name())
    }
}

impl fmt::Display for AbbreviatedObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
