// Character classification and case folding

// ---------------------------------------------------------------------------
// Vowel alphabet
// ---------------------------------------------------------------------------

/// The vowels the substitution stage may swap between, in row-value order.
///
/// A combination row value `n` selects `VOWELS[n - 1]`, so `1` is `a` and
/// `5` is `u`.
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Check whether a character is one of the five substitutable vowels
/// (case-insensitive). `y` is not a vowel here.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&simple_lower(c))
}

/// Map a 1-based combination row value to its vowel.
///
/// Returns `None` for 0 and for values past the end of the alphabet.
pub fn vowel_for_index(index: usize) -> Option<char> {
    index.checked_sub(1).and_then(|i| VOWELS.get(i).copied())
}

// ---------------------------------------------------------------------------
// Simple case folding
//
// The standard library's to_lowercase produces an iterator because some
// characters lower-case to several characters. Candidate expansion indexes
// words by character position, so folding must keep the character count
// unchanged: only the first character of the mapping is taken.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only the
/// first character.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Fold a character slice to lower case, one character in, one character out.
pub fn fold_chars(word: &[char]) -> Vec<char> {
    word.iter().map(|&c| simple_lower(c)).collect()
}

/// Fold a string to lower case, preserving its character count.
///
/// This is the key used for every case-insensitive comparison in the
/// corrector, so the dictionary and the engine must both go through it.
pub fn fold(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}
