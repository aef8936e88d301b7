// Run and vowel detection

use respell_core::character::{is_vowel, simple_lower};

/// A maximal stretch of one repeated character, at least two long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// The repeated character (lower case).
    pub character: char,
    /// Index of the first character of the run.
    pub start: usize,
    /// Number of repetitions, always >= 2.
    pub length: usize,
}

impl Run {
    /// Index one past the last character of the run.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// One vowel at one position. Adjacent vowels are separate occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelOccurrence {
    /// The vowel found (lower case).
    pub vowel: char,
    /// Its index in the word.
    pub index: usize,
}

/// Find every run of two or more identical adjacent characters.
///
/// Comparison ignores case. Runs come back ordered by `start` and never
/// overlap; single characters are not reported.
pub fn find_runs(word: &[char]) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut start = 0;
    while start < word.len() {
        let character = simple_lower(word[start]);
        let mut end = start + 1;
        while end < word.len() && simple_lower(word[end]) == character {
            end += 1;
        }
        if end - start >= 2 {
            runs.push(Run {
                character,
                start,
                length: end - start,
            });
        }
        start = end;
    }
    runs
}

/// Find every vowel, one occurrence per character, left to right.
///
/// Repetition is ignored here: `"ee"` yields two occurrences. Runs of vowels
/// are expected to have been shortened by the run stage already.
pub fn find_vowel_occurrences(word: &[char]) -> Vec<VowelOccurrence> {
    word.iter()
        .enumerate()
        .filter(|&(_, &c)| is_vowel(c))
        .map(|(index, &c)| VowelOccurrence {
            vowel: simple_lower(c),
            index,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn run(character: char, start: usize, length: usize) -> Run {
        Run {
            character,
            start,
            length,
        }
    }

    #[test]
    fn runs_in_word_order() {
        assert_eq!(
            find_runs(&chars("jjoobbb")),
            vec![run('j', 0, 2), run('o', 2, 2), run('b', 4, 3)]
        );
    }

    #[test]
    fn single_letters_are_not_runs() {
        assert!(find_runs(&chars("conspiracy")).is_empty());
        assert!(find_runs(&chars("a")).is_empty());
        assert!(find_runs(&[]).is_empty());
    }

    #[test]
    fn run_in_the_middle() {
        assert_eq!(find_runs(&chars("cunsperricy")), vec![run('r', 6, 2)]);
    }

    #[test]
    fn run_covering_whole_word() {
        assert_eq!(find_runs(&chars("zzzz")), vec![run('z', 0, 4)]);
    }

    #[test]
    fn same_letter_in_separate_runs() {
        assert_eq!(
            find_runs(&chars("mississippi")),
            vec![run('s', 2, 2), run('s', 5, 2), run('p', 8, 2)]
        );
    }

    #[test]
    fn runs_ignore_case() {
        assert_eq!(find_runs(&chars("HeLlo")), vec![run('l', 2, 2)]);
    }

    #[test]
    fn run_end() {
        assert_eq!(run('b', 4, 3).end(), 7);
    }

    #[test]
    fn vowels_tracked_individually() {
        let occurrences = find_vowel_occurrences(&chars("weke"));
        assert_eq!(
            occurrences,
            vec![
                VowelOccurrence { vowel: 'e', index: 1 },
                VowelOccurrence { vowel: 'e', index: 3 },
            ]
        );
    }

    #[test]
    fn adjacent_vowels_are_separate() {
        let indices: Vec<usize> = find_vowel_occurrences(&chars("sheeple"))
            .iter()
            .map(|o| o.index)
            .collect();
        assert_eq!(indices, vec![2, 3, 6]);
    }

    #[test]
    fn vowels_are_folded() {
        let occurrences = find_vowel_occurrences(&chars("CUN"));
        assert_eq!(occurrences, vec![VowelOccurrence { vowel: 'u', index: 1 }]);
    }

    #[test]
    fn no_vowels() {
        assert!(find_vowel_occurrences(&chars("rhythm")).is_empty());
        assert!(find_vowel_occurrences(&[]).is_empty());
    }
}
