// Word lookup
//
// The engine only ever asks one question of its word list: is this
// candidate a word, and if so how is it spelled? `Lexicon` is that seam, so
// the strategy can be exercised against small in-memory lists in tests.

pub mod dictionary;

pub use dictionary::{Dictionary, DictionaryError};

/// Trait for case-insensitive word lists.
pub trait Lexicon {
    /// Look up `word` ignoring case.
    ///
    /// Returns the list's own spelling of the word (its canonical form) on a
    /// match, `None` otherwise.
    fn contains_word(&self, word: &str) -> Option<&str>;
}
