// Candidate expansion: apply one combination row to a word

use respell_core::character::vowel_for_index;

use super::detector::{Run, VowelOccurrence};

/// Rebuild `word` with each run resized to the matching `row` value.
///
/// Runs are processed from the rightmost one leftwards, cutting the word
/// into segments so that the start indices of runs still to be processed
/// stay valid. The segments are then joined back in left-to-right order.
/// Characters outside the runs are copied unchanged.
///
/// Runs and row values are paired by position. With no runs the word is
/// returned as is, whatever the row.
pub fn reduce_runs(word: &[char], runs: &[Run], row: &[usize]) -> Vec<char> {
    let mut segments: Vec<&[char]> = Vec::with_capacity(runs.len() + 1);
    let mut tail_end = word.len();
    let mut reduced: Vec<(char, usize)> = Vec::with_capacity(runs.len());

    for (run, &count) in runs.iter().zip(row).rev() {
        segments.push(&word[run.end()..tail_end]);
        reduced.push((run.character, count));
        tail_end = run.start;
    }

    let mut candidate = Vec::with_capacity(word.len());
    candidate.extend_from_slice(&word[..tail_end]);
    for (segment, (character, count)) in segments.iter().rev().zip(reduced.iter().rev()) {
        candidate.extend(std::iter::repeat_n(*character, *count));
        candidate.extend_from_slice(segment);
    }
    candidate
}

/// Rebuild `word` with each vowel occurrence replaced by the vowel the
/// matching `row` value selects (`1` = `a` ... `5` = `u`).
///
/// Each position is substituted independently. Row values outside `1..=5`
/// leave their position unchanged. With no occurrences the word is returned
/// as is.
pub fn substitute_vowels(word: &[char], occurrences: &[VowelOccurrence], row: &[usize]) -> Vec<char> {
    let mut candidate = word.to_vec();
    for (occurrence, &choice) in occurrences.iter().zip(row).rev() {
        if let Some(vowel) = vowel_for_index(choice) {
            candidate[occurrence.index] = vowel;
        }
    }
    candidate
}
