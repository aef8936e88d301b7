// Newline-delimited word list with case-insensitive lookup

use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use respell_core::character::fold;
use tracing::debug;

use super::Lexicon;

/// Error type for word-list loading.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The word list could not be read.
    #[error("failed to read word list {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The word list had no non-blank lines.
    #[error("word list {path:?} contains no words")]
    Empty { path: PathBuf },
}

/// An in-memory word list keyed by folded spelling.
///
/// Built once, then read-only. Lookups fold the query and hit a hash map, so
/// each candidate costs one fold and one probe regardless of list size.
///
/// When several lines fold to the same key (`Job` and `job`), the first one
/// in list order is the canonical spelling.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Folded spelling -> canonical spelling.
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Load a dictionary from a word-list file.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so
    /// system word lists in legacy encodings still load.
    pub fn from_file(path: &Path) -> Result<Self, DictionaryError> {
        let bytes = std::fs::read(path).map_err(|source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::parse(&String::from_utf8_lossy(&bytes));
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), words = dictionary.len(), "loaded word list");
        Ok(dictionary)
    }

    /// Build a dictionary from word-list text, one word per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.lines())
    }

    /// Build a dictionary from individual words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = HashMap::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            entries.entry(fold(word)).or_insert_with(|| word.to_string());
        }
        Self { entries }
    }

    /// Number of distinct folded words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lexicon for Dictionary {
    fn contains_word(&self, word: &str) -> Option<&str> {
        self.entries.get(fold(word).as_str()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let dict = Dictionary::from_words(["conspiracy"]);
        assert_eq!(dict.contains_word("conspiracy"), Some("conspiracy"));
        assert_eq!(dict.contains_word("CONSPIRACY"), Some("conspiracy"));
        assert_eq!(dict.contains_word("ConSpiRacy"), Some("conspiracy"));
    }

    #[test]
    fn lookup_returns_canonical_casing() {
        let dict = Dictionary::from_words(["Mississippi"]);
        assert_eq!(dict.contains_word("mississippi"), Some("Mississippi"));
        assert_eq!(dict.contains_word("MISSISSIPPI"), Some("Mississippi"));
    }

    #[test]
    fn first_spelling_wins() {
        let dict = Dictionary::from_words(["job", "Job"]);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.contains_word("JOB"), Some("job"));

        let dict = Dictionary::from_words(["Job", "job"]);
        assert_eq!(dict.contains_word("job"), Some("Job"));
    }

    #[test]
    fn missing_word() {
        let dict = Dictionary::from_words(["sheep"]);
        assert_eq!(dict.contains_word("sheeple"), None);
        assert_eq!(dict.contains_word(""), None);
    }

    #[test]
    fn parse_trims_and_skips_blank_lines() {
        let dict = Dictionary::parse("wake\r\n\n  hello  \n\t\nJob\n");
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.contains_word("hello"), Some("hello"));
        assert_eq!(dict.contains_word("wake"), Some("wake"));
        assert_eq!(dict.contains_word("job"), Some("Job"));
    }

    #[test]
    fn from_file_missing_path() {
        let err = Dictionary::from_file(Path::new("/nonexistent/respell/words")).unwrap_err();
        assert!(matches!(err, DictionaryError::Read { .. }));
        assert!(err.to_string().contains("failed to read word list"));
    }

    #[test]
    fn from_file_empty_list() {
        let path = std::env::temp_dir().join(format!("respell-empty-{}.txt", std::process::id()));
        std::fs::write(&path, "\n\n   \n").unwrap();
        let err = Dictionary::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, DictionaryError::Empty { .. }));
    }

    #[test]
    fn from_file_loads_words() {
        let path = std::env::temp_dir().join(format!("respell-words-{}.txt", std::process::id()));
        std::fs::write(&path, "Job\njob\nwake\n").unwrap();
        let dict = Dictionary::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.contains_word("JOB"), Some("Job"));
    }
}
