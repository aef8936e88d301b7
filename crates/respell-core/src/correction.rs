// Result types returned by the corrector

use std::fmt;

/// The canonical dictionary words reachable from one input.
///
/// Words are unique and kept in the order the search discovered them. An
/// empty result is a normal outcome meaning "no suggestion".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectionResult {
    words: Vec<String>,
}

impl CorrectionResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a canonical word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.words.iter().any(|w| w == word) {
            return false;
        }
        self.words.push(word.to_string());
        true
    }

    /// The collected words in discovery order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Consume the result and return the collected words.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl<'a> IntoIterator for &'a CorrectionResult {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// The answer to a single prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Correction {
    /// The input is itself a dictionary word; holds its canonical spelling.
    Known(String),
    /// The input was corrected to this word.
    Suggested(String),
    /// No dictionary word is reachable from the input.
    NoSuggestion,
}

impl Correction {
    /// The word to show the user, if any.
    pub fn word(&self) -> Option<&str> {
        match self {
            Correction::Known(w) | Correction::Suggested(w) => Some(w),
            Correction::NoSuggestion => None,
        }
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.word() {
            Some(word) => f.write_str(word),
            None => f.write_str("NO SUGGESTION"),
        }
    }
}
