// Expansion stages and the two-stage correction strategy

use tracing::{debug, trace, warn};

use super::detector::{Run, VowelOccurrence, find_runs, find_vowel_occurrences};
use super::expander::{reduce_runs, substitute_vowels};
use super::matrix::{CombinationMatrix, ReductionSeed};
use super::status::CorrectionStatus;
use crate::lexicon::Lexicon;

/// Matrix size above which a stage logs a warning before expanding.
pub const DEFAULT_WARN_ROW_COUNT: u128 = 100_000;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// One inspect -> enumerate -> expand stage.
///
/// A stage finds the sites in a word it may rewrite, derives a reduction seed
/// from them, and turns each row of the seed's combination matrix into one
/// candidate. A word with no sites gives an empty seed, whose single empty
/// row expands to the word itself, so every stage always yields at least
/// the identity candidate.
pub trait ExpansionStage {
    /// What the stage rewrites: runs, vowel occurrences, ...
    type Site;

    /// Stage name used in log events.
    const NAME: &'static str;

    /// Find the rewritable sites, ordered left to right.
    fn inspect(&self, word: &[char]) -> Vec<Self::Site>;

    /// Per-site bounds for the combination matrix.
    fn seed(&self, sites: &[Self::Site]) -> ReductionSeed;

    /// Apply one combination row.
    fn expand(&self, word: &[char], sites: &[Self::Site], row: &[usize]) -> Vec<char>;

    /// Run the whole stage on `word`, handing every candidate to `visit`.
    ///
    /// Candidates are produced one row at a time; the matrix is never held
    /// in memory as a whole.
    fn for_each_candidate<F>(&self, word: &[char], warn_row_count: u128, mut visit: F)
    where
        Self: Sized,
        F: FnMut(Vec<char>),
    {
        let sites = self.inspect(word);
        let matrix = CombinationMatrix::new(self.seed(&sites));
        let rows = matrix.row_count();
        if rows > warn_row_count {
            warn!(
                stage = Self::NAME,
                word = %word.iter().collect::<String>(),
                rows,
                "large combination matrix"
            );
        }
        for row in matrix.rows() {
            visit(self.expand(word, &sites, &row));
        }
    }
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

/// Stage A: shrink each run of repeated letters to any shorter length.
pub struct RunReduction;

impl ExpansionStage for RunReduction {
    type Site = Run;
    const NAME: &'static str = "runs";

    fn inspect(&self, word: &[char]) -> Vec<Run> {
        find_runs(word)
    }

    fn seed(&self, sites: &[Run]) -> ReductionSeed {
        ReductionSeed::from_runs(sites)
    }

    fn expand(&self, word: &[char], sites: &[Run], row: &[usize]) -> Vec<char> {
        reduce_runs(word, sites, row)
    }
}

/// Stage B: replace each vowel, independently, by any of the five vowels.
pub struct VowelSubstitution;

impl ExpansionStage for VowelSubstitution {
    type Site = VowelOccurrence;
    const NAME: &'static str = "vowels";

    fn inspect(&self, word: &[char]) -> Vec<VowelOccurrence> {
        find_vowel_occurrences(word)
    }

    fn seed(&self, sites: &[VowelOccurrence]) -> ReductionSeed {
        ReductionSeed::for_vowels(sites)
    }

    fn expand(&self, word: &[char], sites: &[VowelOccurrence], row: &[usize]) -> Vec<char> {
        substitute_vowels(word, sites, row)
    }
}

// ---------------------------------------------------------------------------
// CorrectionStrategy
// ---------------------------------------------------------------------------

/// Runs stage A, then stage B on every stage-A candidate, and checks every
/// stage-B candidate against the lexicon.
///
/// The search is exhaustive: there is no early exit on the first match and
/// no budget. Repeated vowels are collapsed by stage A before stage B ever
/// sees them.
#[derive(Debug, Clone)]
pub struct CorrectionStrategy {
    /// Matrix size above which a warning is logged.
    warn_row_count: u128,
}

impl CorrectionStrategy {
    pub fn new(warn_row_count: u128) -> Self {
        Self { warn_row_count }
    }

    pub fn warn_row_count(&self) -> u128 {
        self.warn_row_count
    }

    pub fn set_warn_row_count(&mut self, warn_row_count: u128) {
        self.warn_row_count = warn_row_count;
    }

    /// Search for corrections of the word tracked by `status`.
    ///
    /// The word is expected to be folded to lower case already.
    pub fn generate(&self, lexicon: &dyn Lexicon, status: &mut CorrectionStatus<'_>) {
        let word = status.word();

        let mut reduced = Vec::new();
        RunReduction.for_each_candidate(word, self.warn_row_count, |candidate| {
            reduced.push(candidate)
        });
        debug!(
            word = %word.iter().collect::<String>(),
            candidates = reduced.len(),
            "run stage expanded"
        );

        for candidate in &reduced {
            VowelSubstitution.for_each_candidate(candidate, self.warn_row_count, |candidate| {
                check_candidate(lexicon, status, &candidate)
            });
        }
        debug!(
            checked = status.checked_count(),
            matches = status.match_count(),
            "vowel stage checked"
        );
    }
}

impl Default for CorrectionStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_WARN_ROW_COUNT)
    }
}

/// Look one candidate up and record its canonical form on a hit.
fn check_candidate(lexicon: &dyn Lexicon, status: &mut CorrectionStatus<'_>, candidate: &[char]) {
    let word: String = candidate.iter().collect();
    status.charge();
    if let Some(canonical) = lexicon.contains_word(&word) {
        trace!(candidate = %word, canonical, "dictionary hit");
        status.add_match(canonical);
    }
}

// =========================================================================
// Tests
// =========================================================================
