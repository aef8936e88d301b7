// Correction status tracking: checked-candidate count and de-duplicated matches

use respell_core::CorrectionResult;

/// Tracks the state of one correction search.
///
/// Every candidate looked up in the lexicon increments the checked counter
/// via `charge()`. Matches are recorded by canonical spelling, so two
/// candidates that resolve to the same dictionary word count once.
pub struct CorrectionStatus<'a> {
    /// The folded word the search started from.
    word: &'a [char],
    /// Number of candidates looked up so far.
    checked: u64,
    /// Canonical matches in discovery order.
    result: CorrectionResult,
}

impl<'a> CorrectionStatus<'a> {
    pub fn new(word: &'a [char]) -> Self {
        Self {
            word,
            checked: 0,
            result: CorrectionResult::new(),
        }
    }

    /// Count one lexicon lookup.
    pub fn charge(&mut self) {
        self.checked += 1;
    }

    /// Record a canonical match. Returns `false` if it was already known.
    pub fn add_match(&mut self, canonical: &str) -> bool {
        self.result.insert(canonical)
    }

    /// The word being corrected.
    pub fn word(&self) -> &'a [char] {
        self.word
    }

    /// Number of candidates looked up so far.
    pub fn checked_count(&self) -> u64 {
        self.checked
    }

    pub fn match_count(&self) -> usize {
        self.result.len()
    }

    /// Return a reference to the matches collected so far.
    pub fn result(&self) -> &CorrectionResult {
        &self.result
    }

    /// Consume the status and return the collected matches.
    pub fn into_result(self) -> CorrectionResult {
        self.result
    }
}
