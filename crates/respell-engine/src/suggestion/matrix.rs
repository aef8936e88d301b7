// Reduction seeds and combination matrices

use respell_core::character::VOWELS;

use super::detector::{Run, VowelOccurrence};
use crate::EngineError;

/// Per-position upper bounds for a combination matrix.
///
/// Position `i` may take any value in `1..=bounds[i]`. Every bound is at
/// least 1, so every seed has at least one row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReductionSeed {
    bounds: Vec<usize>,
}

impl ReductionSeed {
    /// Create a seed from arbitrary bounds, rejecting zeros.
    pub fn new(bounds: Vec<usize>) -> Result<Self, EngineError> {
        if let Some(position) = bounds.iter().position(|&b| b == 0) {
            return Err(EngineError::ZeroBound { position });
        }
        Ok(Self { bounds })
    }

    /// Seed for the run stage: each run may shrink to any length from 1 up
    /// to its current length.
    pub fn from_runs(runs: &[Run]) -> Self {
        debug_assert!(runs.iter().all(|r| r.length >= 2));
        Self {
            bounds: runs.iter().map(|r| r.length).collect(),
        }
    }

    /// Seed for the vowel stage: each occurrence may become any of the five
    /// vowels.
    pub fn for_vowels(occurrences: &[VowelOccurrence]) -> Self {
        Self {
            bounds: vec![VOWELS.len(); occurrences.len()],
        }
    }

    pub fn bounds(&self) -> &[usize] {
        &self.bounds
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

/// The Cartesian product `{1..=b0} x {1..=b1} x ... x {1..=bn}` of a seed.
///
/// Rows are generated on demand by [`CombinationMatrix::rows`] as an
/// odometer: the rightmost position advances fastest and wraps back to 1,
/// carrying into its left neighbour. Each combination therefore appears
/// exactly once, every row has the seed's arity, and nothing is pruned.
///
/// An empty seed has exactly one row, the empty row, meaning "leave the word
/// as it is".
///
/// # Cost
///
/// The row count is the product of the seed bounds. This is what dominates
/// the engine's running time: a word with ten 3-letter runs has 59 049 run
/// rows, and a candidate with eight vowels has 390 625 vowel rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationMatrix {
    seed: ReductionSeed,
}

impl CombinationMatrix {
    pub fn new(seed: ReductionSeed) -> Self {
        Self { seed }
    }

    /// The seed this matrix enumerates.
    pub fn seed(&self) -> &ReductionSeed {
        &self.seed
    }

    /// Number of entries in every row.
    pub fn arity(&self) -> usize {
        self.seed.len()
    }

    /// Total number of rows, saturating at `u128::MAX`.
    pub fn row_count(&self) -> u128 {
        self.seed
            .bounds
            .iter()
            .fold(1u128, |acc, &b| acc.saturating_mul(b as u128))
    }

    /// Iterate over every row.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            bounds: &self.seed.bounds,
            current: vec![1; self.seed.len()],
            exhausted: false,
        }
    }
}

/// Build the combination matrix for raw bounds.
///
/// Fails if any bound is zero, since that position would have no value to
/// choose from.
pub fn enumerate(seed: &[usize]) -> Result<CombinationMatrix, EngineError> {
    Ok(CombinationMatrix::new(ReductionSeed::new(seed.to_vec())?))
}

/// Iterator over the rows of a [`CombinationMatrix`].
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    bounds: &'a [usize],
    current: Vec<usize>,
    exhausted: bool,
}

impl Iterator for Rows<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let row = self.current.clone();

        // Advance the odometer. Running off the left end means every
        // position wrapped, so the row just taken was the last one.
        let mut position = self.bounds.len();
        loop {
            if position == 0 {
                self.exhausted = true;
                break;
            }
            position -= 1;
            if self.current[position] < self.bounds[position] {
                self.current[position] += 1;
                break;
            }
            self.current[position] = 1;
        }

        Some(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn rows_of(seed: &[usize]) -> Vec<Vec<usize>> {
        enumerate(seed).unwrap().rows().collect()
    }

    #[test]
    fn empty_seed_has_one_empty_row() {
        let matrix = enumerate(&[]).unwrap();
        assert_eq!(matrix.row_count(), 1);
        assert_eq!(matrix.arity(), 0);
        assert_eq!(rows_of(&[]), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn single_position() {
        assert_eq!(rows_of(&[3]), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn rightmost_position_varies_fastest() {
        assert_eq!(
            rows_of(&[2, 3]),
            vec![
                vec![1, 1],
                vec![1, 2],
                vec![1, 3],
                vec![2, 1],
                vec![2, 2],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn full_product_without_duplicates() {
        let seed = [2, 2, 3];
        let rows = rows_of(&seed);
        assert_eq!(rows.len(), 12);
        let unique: HashSet<&Vec<usize>> = rows.iter().collect();
        assert_eq!(unique.len(), rows.len());
        for row in &rows {
            assert_eq!(row.len(), seed.len());
            for (value, bound) in row.iter().zip(&seed) {
                assert!((1..=*bound).contains(value));
            }
        }
    }

    #[test]
    fn repeated_bounds_are_not_collapsed() {
        // Equal values across positions must still give distinct rows.
        let rows = rows_of(&[2, 2]);
        assert_eq!(rows, vec![vec![1, 1], vec![1, 2], vec![2, 1], vec![2, 2]]);
    }

    #[test]
    fn bound_of_one_is_fixed() {
        assert_eq!(rows_of(&[1, 2, 1]), vec![vec![1, 1, 1], vec![1, 2, 1]]);
    }

    #[test]
    fn row_count_matches_iteration() {
        let matrix = enumerate(&[5, 5, 5]).unwrap();
        assert_eq!(matrix.row_count(), 125);
        assert_eq!(matrix.rows().count(), 125);
    }

    #[test]
    fn row_count_saturates() {
        let matrix = enumerate(&[usize::MAX; 4]).unwrap();
        assert_eq!(matrix.row_count(), u128::MAX);
    }

    #[test]
    fn zero_bound_is_rejected() {
        assert_eq!(
            enumerate(&[2, 0, 3]).unwrap_err(),
            EngineError::ZeroBound { position: 1 }
        );
    }

    #[test]
    fn seed_from_runs_uses_lengths() {
        let runs = [
            Run { character: 'j', start: 0, length: 2 },
            Run { character: 'b', start: 4, length: 3 },
        ];
        assert_eq!(ReductionSeed::from_runs(&runs).bounds(), &[2, 3]);
    }

    #[test]
    fn seed_for_vowels_is_five_per_occurrence() {
        let occurrences = [
            VowelOccurrence { vowel: 'e', index: 1 },
            VowelOccurrence { vowel: 'e', index: 3 },
        ];
        let seed = ReductionSeed::for_vowels(&occurrences);
        assert_eq!(seed.bounds(), &[5, 5]);
        assert_eq!(CombinationMatrix::new(seed).row_count(), 25);
    }

    #[test]
    fn seeds_without_sites_are_empty() {
        assert!(ReductionSeed::from_runs(&[]).is_empty());
        assert!(ReductionSeed::for_vowels(&[]).is_empty());
    }
}
