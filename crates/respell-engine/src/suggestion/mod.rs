// Candidate generation
//
// Produces corrections by running two expansion stages over the input and
// validating every resulting candidate through the lexicon.
//
// Architecture:
//   - `detector`: finds repeated-letter runs and vowel occurrences
//   - `matrix`: reduction seeds and their Cartesian-product combination rows
//   - `expander`: rebuilds a word from one combination row
//   - `status`: tracks checked candidates and de-duplicated matches
//   - `strategy`: the `ExpansionStage` trait and the run -> vowel pipeline

pub mod detector;
pub mod expander;
pub mod matrix;
pub mod status;
pub mod strategy;

pub use detector::{Run, VowelOccurrence, find_runs, find_vowel_occurrences};
pub use matrix::{CombinationMatrix, ReductionSeed, enumerate};
pub use status::CorrectionStatus;
pub use strategy::{CorrectionStrategy, ExpansionStage, RunReduction, VowelSubstitution};
