// Letter ordinals and simple case mapping.
//
// DAWG edges carry a 5-bit letter code: 1 for 'a' through 26 for 'z'.
// Codes 0 and 27..=31 are never produced for a character.

/// Smallest valid letter ordinal (`'a'`).
pub const FIRST_ORDINAL: u8 = 1;

/// Largest valid letter ordinal (`'z'`).
pub const LAST_ORDINAL: u8 = 26;

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions only the first
/// character is kept, so folding never changes the character count.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Map a character to its letter ordinal.
///
/// Upper- and lowercase ASCII letters map to the same ordinal. Every other
/// character (digits, punctuation, non-ASCII letters) has no ordinal and can
/// never match an automaton edge.
#[inline]
pub fn letter_ordinal(c: char) -> Option<u8> {
    let lower = c.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some(lower as u8 - b'a' + FIRST_ORDINAL)
    } else {
        None
    }
}

/// Map a letter ordinal back to its lowercase character.
///
/// Returns `None` for ordinals outside `1..=26`.
#[inline]
pub fn ordinal_letter(ordinal: u8) -> Option<char> {
    if (FIRST_ORDINAL..=LAST_ORDINAL).contains(&ordinal) {
        Some((b'a' + ordinal - FIRST_ORDINAL) as char)
    } else {
        None
    }
}
