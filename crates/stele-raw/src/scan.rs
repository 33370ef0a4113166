//! Cursor primitives over raw object buffers.
//!
//! Positions are byte offsets. Forward searches return the position just
//! past the match, or the buffer length when nothing matched; backward
//! searches return the position just before the match, or `None` when no
//! such position exists. None of these functions allocate.

use crate::header;

/// Determines whether `src` occurs at `ptr` within `b`.
///
/// Returns the position just past the literal on a match.
pub fn match_at(b: &[u8], ptr: usize, src: &[u8]) -> Option<usize> {
    let end = ptr.checked_add(src.len())?;
    if b.get(ptr..end)? == src {
        Some(end)
    } else {
        None
    }
}

/// Locates the first position after the next occurrence of `ch`.
///
/// Returns `b.len()` when `ch` does not occur at or after `ptr`.
pub fn next(b: &[u8], mut ptr: usize, ch: u8) -> usize {
    let sz = b.len();
    while ptr < sz {
        let c = b[ptr];
        ptr += 1;
        if c == ch {
            return ptr;
        }
    }
    ptr
}

/// Locates the first position after the next LF.
pub fn next_lf(b: &[u8], ptr: usize) -> usize {
    next(b, ptr, b'\n')
}

/// Locates the first position after whichever of `ch` or LF occurs first.
pub fn next_lf_or(b: &[u8], mut ptr: usize, ch: u8) -> usize {
    let sz = b.len();
    while ptr < sz {
        let c = b[ptr];
        ptr += 1;
        if c == ch || c == b'\n' {
            return ptr;
        }
    }
    ptr
}

/// Locates the position just before the previous occurrence of `ch`,
/// scanning backward from `ptr` (`ptr` is first decremented when it equals
/// `b.len()`).
///
/// Returns `None` when `ch` does not occur, or occurs at position 0 where
/// no prior position exists.
pub fn prev(b: &[u8], ptr: usize, ch: u8) -> Option<usize> {
    let mut i = if ptr == b.len() { ptr } else { ptr + 1 };
    while i > 0 {
        i -= 1;
        if b[i] == ch {
            return i.checked_sub(1);
        }
    }
    None
}

/// Locates the position just before the previous LF.
pub fn prev_lf(b: &[u8], ptr: usize) -> Option<usize> {
    prev(b, ptr, b'\n')
}

/// Locates the position just before whichever of `ch` or LF occurs first,
/// scanning backward.
pub fn prev_lf_or(b: &[u8], ptr: usize, ch: u8) -> Option<usize> {
    let mut i = if ptr == b.len() { ptr } else { ptr + 1 };
    while i > 0 {
        i -= 1;
        let c = b[i];
        if c == ch || c == b'\n' {
            return i.checked_sub(1);
        }
    }
    None
}

/// Parses a base-10 numeric from a run of ASCII digits into an `i32`.
///
/// See [`parse_long_base10`]; the value is truncated to 32 bits.
pub fn parse_base10(b: &[u8], ptr: usize) -> (i32, usize) {
    let (v, p) = parse_long_base10(b, ptr);
    (v as i32, p)
}

/// Parses a base-10 numeric from a run of ASCII digits into an `i64`.
///
/// The run may begin with spaces and an optional `+` or `-`; parsing stops
/// at the first byte that is not a decimal digit. Returns the value and the
/// new cursor position. When no digits were consumed the value is 0, not an
/// error. Digit runs longer than the value type wrap, as the canonical
/// encodings never produce them.
pub fn parse_long_base10(b: &[u8], mut ptr: usize) -> (i64, usize) {
    let sz = b.len();
    while ptr < sz && b[ptr] == b' ' {
        ptr += 1;
    }
    if ptr >= sz {
        return (0, ptr);
    }
    let mut negative = false;
    match b[ptr] {
        b'-' => {
            negative = true;
            ptr += 1;
        }
        b'+' => ptr += 1,
        _ => {}
    }
    let mut r: i64 = 0;
    while ptr < sz {
        let v = b[ptr];
        if !v.is_ascii_digit() {
            break;
        }
        r = r.wrapping_mul(10).wrapping_add(i64::from(v - b'0'));
        ptr += 1;
    }
    (if negative { -r } else { r }, ptr)
}

/// Parses a timezone offset in the `+/-HHMM` style into minutes.
///
/// The digit pair `MM` counts minutes, not hundredths of an hour, so
/// `-0315` decodes to -195 minutes.
pub fn parse_timezone_offset(b: &[u8], ptr: usize) -> i32 {
    let (v, _) = parse_base10(b, ptr);
    let tz_mins = v % 100;
    let tz_hours = v / 100;
    tz_hours * 60 + tz_mins
}

/// Locates the "author " header line data.
///
/// Returns the position just after the space in "author ", the first byte
/// of the author's name.
///
/// When called with `ptr == 0` the header section is skipped
/// arithmetically: a canonical commit opens with a 46-byte "tree " line and
/// 48-byte "parent " lines, so those offsets are stepped over without
/// scanning. Callers passing `ptr == 0` must therefore hand in a buffer in
/// canonical commit form; the shortcut is not validated.
pub fn author(b: &[u8], mut ptr: usize) -> Option<usize> {
    let sz = b.len();
    if ptr == 0 {
        ptr += 46; // "tree ..." line
    }
    while ptr < sz && b[ptr] == b'p' {
        ptr += 48; // "parent ..." line
    }
    match_at(b, ptr, header::AUTHOR)
}

/// Locates the "committer " header line data.
///
/// Same canonical-form precondition as [`author`] when `ptr == 0`.
pub fn committer(b: &[u8], mut ptr: usize) -> Option<usize> {
    let sz = b.len();
    if ptr == 0 {
        ptr += 46; // "tree ..." line
    }
    while ptr < sz && b[ptr] == b'p' {
        ptr += 48; // "parent ..." line
    }
    if ptr < sz && b[ptr] == b'a' {
        ptr = next_lf(b, ptr); // "author ..." line
    }
    match_at(b, ptr, header::COMMITTER)
}

/// Locates the "tagger " header line data within a tag buffer.
///
/// When `ptr == 0` the 48-byte "object " line is skipped arithmetically;
/// the buffer must then be in canonical tag form.
pub fn tagger(b: &[u8], mut ptr: usize) -> Option<usize> {
    let sz = b.len();
    if ptr == 0 {
        ptr += 48; // "object ..." line
    }
    while ptr < sz {
        if b[ptr] == b'\n' {
            return None;
        }
        if let Some(m) = match_at(b, ptr, header::TAGGER) {
            return Some(m);
        }
        ptr = next_lf(b, ptr);
    }
    None
}

/// Locates the "encoding " header line data.
///
/// Returns the position of the first byte of the encoding name, or `None`
/// when no encoding header is present (and UTF-8 should be assumed).
pub fn encoding(b: &[u8], mut ptr: usize) -> Option<usize> {
    let sz = b.len();
    while ptr < sz {
        if b[ptr] == b'\n' {
            return None;
        }
        if b[ptr] == b'e' {
            break;
        }
        ptr = next_lf(b, ptr);
    }
    match_at(b, ptr, header::ENCODING)
}

/// Locates the position of the commit message body.
///
/// Same canonical-form precondition as [`author`] when `ptr == 0`.
pub fn commit_message(b: &[u8], mut ptr: usize) -> Option<usize> {
    let sz = b.len();
    if ptr == 0 {
        ptr += 46; // "tree ..." line
    }
    while ptr < sz && b[ptr] == b'p' {
        ptr += 48; // "parent ..." line
    }
    // The remaining headers are skipped without regard to their type, which
    // is the same scan a tag performs.
    skip_headers(b, ptr)
}

/// Locates the position of the tag message body.
///
/// When `ptr == 0` the 48-byte "object " line is skipped arithmetically;
/// the buffer must then be in canonical tag form.
pub fn tag_message(b: &[u8], mut ptr: usize) -> Option<usize> {
    if ptr == 0 {
        ptr += 48; // "object ..." line
    }
    skip_headers(b, ptr)
}

fn skip_headers(b: &[u8], mut ptr: usize) -> Option<usize> {
    let sz = b.len();
    while ptr < sz && b[ptr] != b'\n' {
        ptr = next_lf(b, ptr);
    }
    if ptr < sz && b[ptr] == b'\n' {
        Some(ptr + 1)
    } else {
        None
    }
}

/// Locates the end of a paragraph: the position of the LF that closes it.
///
/// A paragraph ends at two consecutive LF bytes. Returns `b.len()` when no
/// paragraph end exists after `start`.
pub fn end_of_paragraph(b: &[u8], start: usize) -> usize {
    let sz = b.len();
    let mut ptr = start;
    while ptr < sz && b[ptr] != b'\n' {
        ptr = next_lf(b, ptr);
    }
    while 0 < ptr && start < ptr && b[ptr - 1] == b'\n' {
        ptr -= 1;
    }
    ptr
}

/// Locates the end of a footer line key such as "Signed-off-by".
///
/// Returns the position of the `':'` iff the run at `raw[ptr..]` strictly
/// matches `[A-Za-z0-9-]+:`, otherwise `None`.
pub fn end_of_footer_line_key(raw: &[u8], ptr: usize) -> Option<usize> {
    let start = ptr;
    let mut ptr = ptr;
    while ptr < raw.len() {
        let c = raw[ptr];
        if c.is_ascii_alphanumeric() || c == b'-' {
            ptr += 1;
            continue;
        }
        if c == b':' && ptr > start {
            return Some(ptr);
        }
        return None;
    }
    None
}
