//! Shared types for the respell word corrector.
//!
//! - [`character`] -- vowel alphabet and one-to-one case folding
//! - [`correction`] -- the result types handed back to callers

pub mod character;
pub mod correction;

pub use correction::{Correction, CorrectionResult};
