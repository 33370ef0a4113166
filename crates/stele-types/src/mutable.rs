//! Mutable scratch object identifiers.

use std::fmt;

use crate::{IdError, ObjectId, Result, OBJECT_ID_HEX_LENGTH, OBJECT_ID_LENGTH};

/// A mutable 20-byte id buffer.
///
/// Exists to avoid allocation during repeated scan and lookup cycles: the
/// buffer is refilled in place from hex or raw input, probed, and refilled
/// again. Because its value can change at any time, a `MutableObjectId` is
/// deliberately a different type from [`ObjectId`] and is never accepted as
/// a stored key; convert with [`to_object_id`](Self::to_object_id) when a
/// value must be retained.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MutableObjectId([u8; OBJECT_ID_LENGTH]);

impl MutableObjectId {
    /// Creates a buffer holding the all-zeros id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one byte of the id.
    ///
    /// Panics when `index` is outside `[0, 20)`.
    pub fn set_byte(&mut self, index: usize, value: u8) {
        self.0[index] = value;
    }

    /// Resets the buffer to the all-zeros id.
    pub fn clear(&mut self) {
        self.0 = [0u8; OBJECT_ID_LENGTH];
    }

    /// Copies an existing id into this buffer.
    pub fn from_object_id(&mut self, src: &ObjectId) {
        self.0 = *src.as_bytes();
    }

    /// Refills from 20 raw bytes at the start of `bs`.
    pub fn from_raw(&mut self, bs: &[u8]) -> Result<()> {
        self.from_raw_at(bs, 0)
    }

    /// Refills from 20 raw bytes at `pos` within `bs`.
    pub fn from_raw_at(&mut self, bs: &[u8], pos: usize) -> Result<()> {
        let raw = bs
            .get(pos..pos + OBJECT_ID_LENGTH)
            .ok_or(IdError::BufferTooShort {
                needed: OBJECT_ID_LENGTH,
                offset: pos,
                available: bs.len(),
            })?;
        self.0.copy_from_slice(raw);
        Ok(())
    }

    /// Refills from exactly 40 hex characters.
    pub fn from_hex(&mut self, s: &str) -> Result<()> {
        if s.len() != OBJECT_ID_HEX_LENGTH {
            return Err(IdError::InvalidLength {
                expected: OBJECT_ID_HEX_LENGTH,
                actual: s.len(),
            });
        }
        self.fill_hex(s.as_bytes())
    }

    /// Refills from 40 ASCII hex characters at `offset` within `buf`.
    pub fn from_hex_at(&mut self, buf: &[u8], offset: usize) -> Result<()> {
        let src = buf
            .get(offset..offset + OBJECT_ID_HEX_LENGTH)
            .ok_or(IdError::BufferTooShort {
                needed: OBJECT_ID_HEX_LENGTH,
                offset,
                available: buf.len(),
            })?;
        self.fill_hex(src)
    }

    fn fill_hex(&mut self, src: &[u8]) -> Result<()> {
        // Parse into a scratch array first so a malformed digit cannot leave
        // the buffer half overwritten.
        let mut bytes = [0u8; OBJECT_ID_LENGTH];
        hex::decode_to_slice(src, &mut bytes)
            .map_err(|_| IdError::InvalidId(String::from_utf8_lossy(src).into_owned()))?;
        self.0 = bytes;
        Ok(())
    }

    /// Snapshots the current value as an immutable [`ObjectId`].
    pub fn to_object_id(&self) -> ObjectId {
        ObjectId::from_bytes(self.0)
    }

    /// The raw 20 bytes.
    pub fn as_bytes(&self) -> &[u8; OBJECT_ID_LENGTH] {
        &self.0
    }
}

impl fmt::Debug for MutableObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MutableObjectId({})", hex::encode(self.0))
    }
}

impl From<&ObjectId> for MutableObjectId {
    fn from(id: &ObjectId) -> Self {
        Self(*id.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_zeroed() {
        let id = MutableObjectId::new();
        assert_eq!(id.to_object_id(), ObjectId::zero());
    }

    #[test]
    fn test_set_byte() {
        let mut exp = [0u8; 20];
        let mut id = MutableObjectId::new();
        for (i, b) in exp.iter_mut().enumerate() {
            *b = 0xa0 + i as u8;
            id.set_byte(i, *b);
        }
        assert_eq!(*id.as_bytes(), exp);
    }

    #[test]
    fn test_clear() {
        let mut id = MutableObjectId::new();
        id.set_byte(0, 0xff);
        id.clear();
        assert_eq!(id.to_object_id(), ObjectId::zero());
    }

    #[test]
    fn test_from_raw_at() {
        let mut buf = vec![0u8; 30];
        buf[3..23].copy_from_slice(&[7u8; 20]);
        let mut id = MutableObjectId::new();
        id.from_raw_at(&buf, 3).unwrap();
        assert_eq!(*id.as_bytes(), [7u8; 20]);
    }

    #[test]
    fn test_from_raw_short_buffer() {
        let mut id = MutableObjectId::new();
        let err = id.from_raw(&[0u8; 19]).unwrap_err();
        assert!(matches!(err, IdError::BufferTooShort { .. }));
    }

    #[test]
    fn test_from_hex_roundtrip() {
        let hex = "def4c620bc3713bb1bb26b808ec9312548e73946";
        let mut id = MutableObjectId::new();
        id.from_hex(hex).unwrap();
        assert_eq!(id.to_object_id().to_hex(), hex);
    }

    #[test]
    fn test_from_hex_at() {
        let buf = b"parent def4c620bc3713bb1bb26b808ec9312548e73946\n";
        let mut id = MutableObjectId::new();
        id.from_hex_at(buf, 7).unwrap();
        assert_eq!(id.to_object_id().to_hex(), "def4c620bc3713bb1bb26b808ec9312548e73946");
    }

    #[test]
    fn test_from_hex_bad_digit_leaves_value() {
        let mut id = MutableObjectId::new();
        id.from_hex("def4c620bc3713bb1bb26b808ec9312548e73946").unwrap();
        let before = *id.as_bytes();
        assert!(id.from_hex("zzf4c620bc3713bb1bb26b808ec9312548e73946").is_err());
        assert_eq!(*id.as_bytes(), before);
    }

    #[test]
    fn test_from_object_id() {
        let src = ObjectId::from_hex("a94a8fe5ccb19ba61c4c0873d391e987982fbbd3").unwrap();
        let mut id = MutableObjectId::new();
        id.from_object_id(&src);
        assert_eq!(id.to_object_id(), src);
    }

    #[test]
    fn test_refill_in_place() {
        let mut id = MutableObjectId::new();
        id.from_hex("a94a8fe5ccb19ba61c4c0873d391e987982fbbd3").unwrap();
        id.from_hex("def4c620bc3713bb1bb26b808ec9312548e73946").unwrap();
        assert_eq!(id.to_object_id().to_hex(), "def4c620bc3713bb1bb26b808ec9312548e73946");
    }
}
