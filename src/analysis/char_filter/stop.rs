//! Stop word char filter.
//!
//! Removes every whole-word occurrence of every stop word from the (already
//! case-folded) text. Matching uses regex word boundaries, so `an` is removed
//! from `an apple` but not from `banana`. Removed words leave their
//! surrounding whitespace behind, so neighbours never merge.

use regex::Regex;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::stop_words::StopWords;
use crate::error::Result;

/// A char filter that deletes whole-word stop word occurrences.
#[derive(Clone, Debug)]
pub struct StopWordCharFilter {
    /// `None` when the stop word set is empty.
    pattern: Option<Regex>,
}

impl StopWordCharFilter {
    /// Build the removal pattern for a stop word set.
    pub fn new(stop_words: &StopWords) -> Result<Self> {
        if stop_words.is_empty() {
            return Ok(StopWordCharFilter { pattern: None });
        }

        let alternation = stop_words
            .iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"\b(?:{alternation})\b"))?;

        Ok(StopWordCharFilter {
            pattern: Some(pattern),
        })
    }

    /// Whether this filter removes anything at all.
    pub fn is_enabled(&self) -> bool {
        self.pattern.is_some()
    }
}

impl CharFilter for StopWordCharFilter {
    fn filter(&self, input: &str) -> String {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(input, "").into_owned(),
            None => input.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
