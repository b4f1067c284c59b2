// Boggle Scoring
// Point values by word length

/// Shortest word that counts on a board
pub const MIN_WORD_LEN: usize = 3;

/// Points for a word of `len` letters, ignoring dictionary membership
///
/// | length | points |
/// |--------|--------|
/// | < 3    | 0      |
/// | 3–4    | 1      |
/// | 5      | 2      |
/// | 6      | 3      |
/// | 7      | 5      |
/// | ≥ 8    | 11     |
#[inline]
pub fn score_for_length(len: usize) -> u32 {
    match len {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}
