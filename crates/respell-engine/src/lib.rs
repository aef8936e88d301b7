//! Candidate-generation engine for the respell word corrector.
//!
//! Given a possibly misspelled word, the engine enumerates every word that
//! can be reached by shortening runs of repeated letters and by substituting
//! vowels, then keeps the candidates the dictionary accepts. Letter-case
//! errors are handled by folding both sides of every lookup.
//!
//! # Architecture
//!
//! - [`lexicon`] -- the `Lexicon` lookup trait and the word-list [`Dictionary`]
//! - [`suggestion`] -- run/vowel detection, combination matrices, candidate
//!   expansion, and the two-stage strategy that composes them
//! - [`handle`] -- [`Respeller`], the owning entry point used by the CLI
//!
//! # Cost
//!
//! The number of candidates checked is the product of the run lengths times,
//! for each run-reduced candidate, five to the power of its vowel count. A
//! long word with many repeated runs or many vowels is expensive; see
//! [`suggestion::matrix::CombinationMatrix`].
//!
//! Input containing characters other than letters is not rejected. Such
//! characters pass through detection and expansion like any other letter and
//! the result is unspecified.

pub mod handle;
pub mod lexicon;
pub mod suggestion;

pub use handle::Respeller;
pub use lexicon::{Dictionary, DictionaryError, Lexicon};
pub use respell_core::{Correction, CorrectionResult};

/// Error type for malformed engine input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A reduction seed entry was zero, which would leave its position with
    /// no value to choose and make the combination matrix empty.
    #[error("reduction seed entry {position} is zero")]
    ZeroBound { position: usize },
}
