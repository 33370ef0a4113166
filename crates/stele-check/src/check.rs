//! The object checker.

use stele_raw::{header, scan};
use stele_types::{FileMode, MutableObjectId, ObjectType, OBJECT_ID_HEX_LENGTH, OBJECT_ID_LENGTH};

/// Verifies that an object buffer is formatted correctly.
///
/// Each check returns a plain validity verdict: many distinct rejection
/// reasons (truncated id, bad mode, unsorted entries, duplicate name,
/// malformed person line, missing header) collapse into `false`, and no
/// input can make a check panic. The checker owns a [`MutableObjectId`]
/// scratch buffer that is refilled for every id probed, so validating a
/// large batch of objects performs no per-id allocation.
#[derive(Default)]
pub struct ObjectChecker {
    temp_id: MutableObjectId,
}

impl ObjectChecker {
    /// Creates a checker. Checkers may be reused across objects.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks an object buffer against the grammar of its declared type.
    ///
    /// `raw` must be in canonical form, the exact bytes the object's id was
    /// computed over. The buffer is never modified.
    pub fn check(&mut self, object_type: ObjectType, raw: &[u8]) -> bool {
        match object_type {
            ObjectType::Commit => self.check_commit(raw),
            ObjectType::Tree => self.check_tree(raw),
            ObjectType::Blob => self.check_blob(raw),
            ObjectType::Tag => self.check_tag(raw),
        }
    }

    /// Checks a commit buffer.
    pub fn check_commit(&mut self, raw: &[u8]) -> bool {
        self.commit_body(raw).is_some()
    }

    /// Checks an annotated tag buffer.
    pub fn check_tag(&mut self, raw: &[u8]) -> bool {
        self.tag_body(raw).is_some()
    }

    /// Checks a blob buffer. Blob content carries no structural constraint,
    /// so every buffer is valid.
    pub fn check_blob(&self, _raw: &[u8]) -> bool {
        true
    }

    fn commit_body(&mut self, raw: &[u8]) -> Option<usize> {
        let mut ptr = scan::match_at(raw, 0, header::TREE)?;
        ptr = self.id_at(raw, ptr)?;
        ptr = expect_lf(raw, ptr)?;
        while let Some(p) = scan::match_at(raw, ptr, header::PARENT) {
            ptr = self.id_at(raw, p)?;
            ptr = expect_lf(raw, ptr)?;
        }
        ptr = scan::match_at(raw, ptr, header::AUTHOR)?;
        ptr = person_ident(raw, ptr)?;
        ptr = expect_lf(raw, ptr)?;
        ptr = scan::match_at(raw, ptr, header::COMMITTER)?;
        ptr = person_ident(raw, ptr)?;
        expect_lf(raw, ptr)
    }

    fn tag_body(&mut self, raw: &[u8]) -> Option<usize> {
        let mut ptr = scan::match_at(raw, 0, header::OBJECT)?;
        ptr = self.id_at(raw, ptr)?;
        ptr = expect_lf(raw, ptr)?;
        ptr = scan::match_at(raw, ptr, header::TYPE)?;
        ptr = scan::next_lf(raw, ptr);
        ptr = scan::match_at(raw, ptr, header::TAG)?;
        ptr = scan::next_lf(raw, ptr);
        if let Some(p) = scan::match_at(raw, ptr, header::TAGGER) {
            ptr = person_ident(raw, p)?;
            ptr = expect_lf(raw, ptr)?;
        }
        Some(ptr)
    }

    /// Checks a canonical tree buffer.
    pub fn check_tree(&self, raw: &[u8]) -> bool {
        let sz = raw.len();
        let mut ptr = 0;
        // Position 0 cannot start an entry name, so 0 doubles as "no
        // previous entry" below.
        let mut last_name_b = 0;
        let mut last_name_e = 0;
        let mut last_mode = 0u32;
        while ptr < sz {
            let mut this_mode = 0u32;
            loop {
                if ptr == sz {
                    return false; // truncated in mode
                }
                let c = raw[ptr];
                ptr += 1;
                if c == b' ' {
                    break;
                }
                if !(b'0'..=b'7').contains(&c) {
                    return false; // invalid mode character
                }
                if this_mode == 0 && c == b'0' {
                    return false; // mode starts with '0'
                }
                this_mode = this_mode.wrapping_shl(3).wrapping_add(u32::from(c - b'0'));
            }
            if FileMode::from_bits(this_mode).is_none() {
                return false; // unrecognized mode
            }
            let this_name_b = ptr;
            loop {
                if ptr == sz {
                    return false; // truncated in name
                }
                let c = raw[ptr];
                ptr += 1;
                if c == 0 {
                    break;
                }
                if c == b'/' {
                    return false; // name contains '/'
                }
            }
            if this_name_b + 1 == ptr {
                return false; // zero length name
            }
            if raw[this_name_b] == b'.' {
                let name_len = (ptr - 1) - this_name_b;
                if name_len == 1 {
                    return false; // invalid name '.'
                }
                if name_len == 2 && raw[this_name_b + 1] == b'.' {
                    return false; // invalid name '..'
                }
            }
            if duplicate_name(raw, this_name_b, ptr - 1) {
                return false;
            }
            if last_name_b != 0 {
                let cmp = path_compare(
                    raw,
                    last_name_b,
                    last_name_e,
                    last_mode,
                    this_name_b,
                    ptr - 1,
                    this_mode,
                );
                if cmp > 0 {
                    return false; // incorrectly sorted
                }
            }
            last_name_b = this_name_b;
            last_name_e = ptr - 1;
            last_mode = this_mode;
            ptr += OBJECT_ID_LENGTH;
            if ptr > sz {
                return false; // truncated in object id
            }
        }
        true
    }

    fn id_at(&mut self, raw: &[u8], ptr: usize) -> Option<usize> {
        if self.temp_id.from_hex_at(raw, ptr).is_ok() {
            Some(ptr + OBJECT_ID_HEX_LENGTH)
        } else {
            None
        }
    }
}

fn expect_lf(raw: &[u8], ptr: usize) -> Option<usize> {
    if ptr < raw.len() && raw[ptr] == b'\n' {
        Some(ptr + 1)
    } else {
        None
    }
}

/// Validates a person line at `ptr`: `name " <" email "> " epoch " " tz`.
///
/// Returns the position just past the timezone run.
fn person_ident(raw: &[u8], ptr: usize) -> Option<usize> {
    let email_b = scan::next_lf_or(raw, ptr, b'<');
    if email_b == ptr || raw[email_b - 1] != b'<' {
        return None;
    }
    let email_e = scan::next_lf_or(raw, email_b, b'>');
    if email_e == email_b || raw[email_e - 1] != b'>' {
        return None;
    }
    if email_e == raw.len() || raw[email_e] != b' ' {
        return None;
    }
    let (_, after_when) = scan::parse_base10(raw, email_e + 1);
    if email_e + 1 == after_when {
        return None; // empty timestamp
    }
    if after_when == raw.len() || raw[after_when] != b' ' {
        return None;
    }
    let (_, after_tz) = scan::parse_base10(raw, after_when + 1);
    if after_when + 1 == after_tz {
        return None; // empty timezone
    }
    Some(after_tz)
}

/// Compares two entry paths under the tree ordering, where a name carrying
/// the tree mode sorts as if it had a trailing '/'.
fn path_compare(
    raw: &[u8],
    mut a_pos: usize,
    a_end: usize,
    a_mode: u32,
    mut b_pos: usize,
    b_end: usize,
    b_mode: u32,
) -> i32 {
    while a_pos < a_end && b_pos < b_end {
        let cmp = i32::from(raw[a_pos]) - i32::from(raw[b_pos]);
        if cmp != 0 {
            return cmp;
        }
        a_pos += 1;
        b_pos += 1;
    }
    if a_pos < a_end {
        return i32::from(raw[a_pos]) - last_path_char(b_mode);
    }
    if b_pos < b_end {
        return last_path_char(a_mode) - i32::from(raw[b_pos]);
    }
    0
}

fn last_path_char(mode: u32) -> i32 {
    if mode == FileMode::Tree.bits() {
        i32::from(b'/')
    } else {
        0
    }
}

/// Scans the entries after `this_name_e` for one whose path ties with the
/// name at `[this_name_b, this_name_e)` when that name is treated as a
/// directory. The remainder of the buffer is parsed loosely here; the main
/// loop re-validates each entry when it reaches it.
fn duplicate_name(raw: &[u8], this_name_b: usize, this_name_e: usize) -> bool {
    let sz = raw.len();
    let mut next_ptr = this_name_e + 1 + OBJECT_ID_LENGTH;
    loop {
        let mut next_mode = 0u32;
        loop {
            if next_ptr >= sz {
                return false;
            }
            let c = raw[next_ptr];
            next_ptr += 1;
            if c == b' ' {
                break;
            }
            next_mode = next_mode
                .wrapping_shl(3)
                .wrapping_add(u32::from(c).wrapping_sub(u32::from(b'0')));
        }
        let next_name_pos = next_ptr;
        loop {
            if next_ptr == sz {
                return false;
            }
            let c = raw[next_ptr];
            next_ptr += 1;
            if c == 0 {
                break;
            }
        }
        if next_name_pos + 1 == next_ptr {
            return false;
        }
        let cmp = path_compare(
            raw,
            this_name_b,
            this_name_e,
            FileMode::Tree.bits(),
            next_name_pos,
            next_ptr - 1,
            next_mode,
        );
        if cmp < 0 {
            return false;
        }
        if cmp == 0 {
            return true;
        }
        next_ptr += OBJECT_ID_LENGTH;
    }
}
