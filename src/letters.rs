//! Letter to bit assignment.
//!
//! Bits are handed out by letter frequency rather than alphabetically, so the
//! disjointness test during the search rejects on common letters first. The
//! table only affects speed; any bijection gives the same counts.

/// Number of letters in the supported alphabet (`a..=z`).
pub const ALPHABET_SIZE: usize = 26;

/// Bit index for each letter, indexed by `letter - b'a'`.
const LETTER_POSITION: [u8; ALPHABET_SIZE] = [
    16, 9, 23, 25, 22, 10, 21, 5, 24, 1, 7, 12, 15, 6, 20, 3, 2, 11, 14, 19, 13, 17, 0, 8, 18, 4,
];

/// Bit index assigned to a lower-case ASCII letter, `None` outside `a..=z`.
#[inline]
pub fn position_of(letter: u8) -> Option<u32> {
    letter
        .checked_sub(b'a')
        .and_then(|idx| LETTER_POSITION.get(idx as usize))
        .map(|&pos| pos as u32)
}

/// Single-bit mask for a letter.
#[inline]
pub fn letter_bit(letter: u8) -> Option<u32> {
    position_of(letter).map(|pos| 1 << pos)
}
