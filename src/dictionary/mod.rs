use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// An immutable, case-insensitive set of valid words.
///
/// Loaded once at startup; a missing or unreadable word list is a fatal
/// initialization error, not something queries recover from. Membership
/// checks are pure and safe to share across threads once constructed.
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load a dictionary from a whitespace- or newline-delimited word list.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read word list at {}", path.display()))?;
        let dict = Self::from_words(content.split_whitespace());

        tracing::info!("Loaded {} words into dictionary", dict.len());

        Ok(dict)
    }

    /// Build a dictionary from an in-memory word collection.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Check if a word exists in the dictionary, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_uppercase())
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::empty();
        assert!(dict.is_empty());
        assert!(!dict.contains("TEST"));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let dict = Dictionary::from_words(["cat", "Dog", "WAG"]);
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("CAT"));
        assert!(dict.contains("cat"));
        assert!(dict.contains("CaT"));
        assert!(dict.contains("dog"));
        assert!(dict.contains("wag"));
        assert!(!dict.contains("bird"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_duplicate_and_blank_entries_collapse() {
        let dict = Dictionary::from_words(["cat", "CAT", " cat ", "", "  "]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_load_reads_whitespace_delimited_words() {
        let path = std::env::temp_dir().join("boggle-engine-dict-test.txt");
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "cat dog").unwrap();
            writeln!(file, "wag").unwrap();
        }

        let dict = Dictionary::load(&path).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("WAG"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let missing = std::env::temp_dir().join("boggle-engine-no-such-file.txt");
        assert!(Dictionary::load(&missing).is_err());
    }
}
