//! Person identity parsing.

use stele_types::PersonIdent;

use crate::{decode, scan};

/// Parses a name line (author, committer, tagger) into a [`PersonIdent`].
///
/// `name_start` must be the first position after the space which delimits
/// the header keyword from the identity, as returned by
/// [`scan::author`](crate::scan::author) and friends. The name ends one or
/// two bytes before `<` (a single trailing space is trimmed), and the email
/// is the text strictly between `<` and `>`. A missing time and zone suffix
/// is not an error: the identity is returned with both set to zero.
///
/// Returns `None` when the identity cannot be parsed.
pub fn parse_person_ident(raw: &[u8], name_start: usize) -> Option<PersonIdent> {
    let cs = decode::parse_encoding(raw);
    let email_b = scan::next_lf_or(raw, name_start, b'<');
    let email_e = scan::next_lf_or(raw, email_b, b'>');
    if email_b >= raw.len()
        || raw[email_b] == b'\n'
        || (email_e >= raw.len() - 1 && raw[email_e - 1] != b'>')
    {
        return None;
    }

    let name_end = if email_b >= name_start + 2 && raw[email_b - 2] == b' ' {
        email_b - 2
    } else {
        email_b - 1
    };
    let name = decode::decode(cs, &raw[name_start..name_end]);
    let email = decode::decode(cs, &raw[email_b..email_e - 1]);

    // Start searching from the end of the line, as another name-email pair
    // may occur after the first; everything trailing the first email is
    // otherwise junk. (email_e - 1) keeps the scan inside this line when
    // the byte at email_e is already the LF, and the further -2 positions
    // before the terminating LF, or on the penultimate byte when the line
    // is unterminated.
    let tz_begin = last_index_of_trim(raw, b' ', scan::next_lf(raw, email_e - 1) - 2)
        .map_or(0, |p| p + 1);
    if tz_begin <= email_e {
        // No time and zone, still a valid identity.
        return Some(PersonIdent::new(name, email, 0, 0));
    }
    let when_begin = last_index_of_trim(raw, b' ', tz_begin - 1)
        .map_or(0, |p| p + 1)
        .max(email_e);
    if when_begin >= tz_begin - 1 {
        return Some(PersonIdent::new(name, email, 0, 0));
    }
    let (when, _) = scan::parse_long_base10(raw, when_begin);
    let tz = scan::parse_timezone_offset(raw, tz_begin);
    Some(PersonIdent::new(name, email, when.wrapping_mul(1000), tz))
}

/// Index of the previous `ch` at or before `pos`, skipping any run of
/// spaces first. `None` when no such byte exists.
fn last_index_of_trim(raw: &[u8], ch: u8, pos: usize) -> Option<usize> {
    let mut pos = pos as isize;
    while pos >= 0 && raw[pos as usize] == b' ' {
        pos -= 1;
    }
    while pos >= 0 && raw[pos as usize] != ch {
        pos -= 1;
    }
    usize::try_from(pos).ok()
}
