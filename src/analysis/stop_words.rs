//! Stop word sets.
//!
//! A [`StopWords`] set is loaded once before tokenization begins. An empty
//! set is valid and disables stop word removal.
//!
//! # Examples
//!
//! ```
//! use newsclass::analysis::stop_words::StopWords;
//!
//! let stop_words = StopWords::from_reader("The\n\n and \nof\n".as_bytes()).unwrap();
//! assert_eq!(stop_words.len(), 3);
//! assert!(stop_words.contains("the"));
//! ```

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

use crate::error::Result;

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// A set of lowercase stop words.
///
/// Kept sorted so that anything derived from it (the removal pattern in
/// particular) is the same on every run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// An empty set; stop word removal is disabled.
    pub fn none() -> Self {
        StopWords::default()
    }

    /// The built-in English list.
    pub fn english() -> Self {
        Self::from_words(DEFAULT_ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Build a set from words. Words are trimmed and lowercased, empty
    /// entries are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        StopWords { words }
    }

    /// Read one stop word per line.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut lines = Vec::new();
        for line in BufReader::new(reader).lines() {
            lines.push(line?);
        }
        Ok(Self::from_words(lines))
    }

    /// Load a stop word file with one word per line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let stop_words = Self::from_reader(File::open(path)?)?;
        debug!(
            "loaded {} stop words from {}",
            stop_words.len(),
            path.display()
        );
        Ok(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate the words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_english_defaults() {
        let stop_words = StopWords::english();
        assert_eq!(stop_words.len(), 33);
        assert!(stop_words.contains("the"));
        assert!(!stop_words.contains("wheat"));
    }

    #[test]
    fn test_from_words_normalizes() {
        let stop_words = StopWords::from_words(["  The ", "", "AND", "and"]);
        assert_eq!(stop_words.iter().collect::<Vec<_>>(), vec!["and", "the"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "about\nabove\n\nacross").unwrap();

        let stop_words = StopWords::load(file.path()).unwrap();

        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.contains("above"));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(StopWords::load("/definitely/not/here/stopwords.txt").is_err());
    }
}
