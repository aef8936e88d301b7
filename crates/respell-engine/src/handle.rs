// Respeller: top-level entry point for word correction.
//
// Owns the dictionary and the correction strategy and answers one word at a
// time. The dictionary is loaded once and only read afterwards, so a single
// handle may be shared between threads.

use std::path::Path;

use rand::Rng;
use rand::seq::IndexedRandom;
use respell_core::character::fold_chars;
use respell_core::{Correction, CorrectionResult};
use tracing::debug;

use crate::lexicon::{Dictionary, DictionaryError, Lexicon};
use crate::suggestion::status::CorrectionStatus;
use crate::suggestion::strategy::CorrectionStrategy;

/// Top-level handle owning the dictionary and the correction strategy.
#[derive(Debug)]
pub struct Respeller {
    dictionary: Dictionary,
    strategy: CorrectionStrategy,
}

impl Respeller {
    /// Create a handle around an already built dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            strategy: CorrectionStrategy::default(),
        }
    }

    /// Load the dictionary from a word-list file and create a handle.
    pub fn from_file(path: &Path) -> Result<Self, DictionaryError> {
        Ok(Self::new(Dictionary::from_file(path)?))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Set the combination-matrix size above which a warning is logged.
    pub fn set_warn_row_count(&mut self, rows: u128) {
        self.strategy.set_warn_row_count(rows);
    }

    /// Look the word up directly, ignoring case.
    ///
    /// Returns the dictionary spelling on a hit. No candidates are generated.
    pub fn check(&self, word: &str) -> Option<&str> {
        self.dictionary.contains_word(word)
    }

    /// Generate every correction reachable from `word`.
    ///
    /// The word is folded to lower case first. The result is empty when no
    /// dictionary word is reachable.
    pub fn suggest(&self, word: &str) -> CorrectionResult {
        let chars: Vec<char> = word.chars().collect();
        let folded = fold_chars(&chars);
        let mut status = CorrectionStatus::new(&folded);
        self.strategy.generate(&self.dictionary, &mut status);
        debug!(
            word,
            checked = status.checked_count(),
            matches = status.match_count(),
            "suggest finished"
        );
        status.into_result()
    }

    /// Answer one prompt line.
    ///
    /// A direct dictionary hit on the input wins without running the search.
    /// Otherwise the search runs and, when it finds several words, one is
    /// chosen uniformly at random with `rng`.
    pub fn correct<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> Correction {
        if let Some(known) = self.check(word) {
            return Correction::Known(known.to_string());
        }
        let result = self.suggest(word);
        match result.words().choose(rng) {
            Some(pick) => Correction::Suggested(pick.clone()),
            None => Correction::NoSuggestion,
        }
    }
}
