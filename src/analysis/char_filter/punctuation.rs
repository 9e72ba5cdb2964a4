//! Punctuation char filter.
//!
//! Every character of a fixed set is replaced by a single space. Replacing
//! instead of deleting keeps `co-op` apart as `co op` rather than gluing it
//! into `coop`.

use crate::analysis::char_filter::CharFilter;

/// Punctuation and markup characters that separate words in news text.
pub const NEWS_PUNCTUATION: &[char] = &[
    '.', ',', '\'', '"', '/', '-', '_', '*', '<', '>', '!', '?', ';', ':', '(', ')', '=', '$',
    '%', '#', '+', '\n',
];

/// A char filter that replaces each character of a set with a space.
#[derive(Clone, Debug)]
pub struct PunctuationCharFilter {
    chars: Vec<char>,
}

impl PunctuationCharFilter {
    /// Create a filter for [`NEWS_PUNCTUATION`].
    pub fn new() -> Self {
        Self::with_chars(NEWS_PUNCTUATION.iter().copied())
    }

    /// Create a filter for a custom character set.
    pub fn with_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut chars: Vec<char> = chars.into_iter().collect();
        chars.sort_unstable();
        chars.dedup();
        PunctuationCharFilter { chars }
    }

    /// Check whether `c` is replaced by this filter.
    pub fn replaces(&self, c: char) -> bool {
        self.chars.binary_search(&c).is_ok()
    }
}

impl Default for PunctuationCharFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CharFilter for PunctuationCharFilter {
    fn filter(&self, input: &str) -> String {
        input
            .chars()
            .map(|c| if self.replaces(c) { ' ' } else { c })
            .collect()
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_becomes_space() {
        let filter = PunctuationCharFilter::new();

        assert_eq!(filter.filter("co-op"), "co op");
        assert_eq!(filter.filter("u.s. dlrs"), "u s  dlrs");
        assert_eq!(filter.filter("(reuter)\nend"), " reuter  end");
    }

    #[test]
    fn test_every_listed_character_is_replaced() {
        let filter = PunctuationCharFilter::new();
        let input: String = NEWS_PUNCTUATION.iter().collect();

        let output = filter.filter(&input);

        assert_eq!(output.chars().count(), NEWS_PUNCTUATION.len());
        assert!(output.chars().all(|c| c == ' '));
    }

    #[test]
    fn test_unlisted_characters_survive() {
        let filter = PunctuationCharFilter::new();
        assert_eq!(filter.filter("a&b@c"), "a&b@c");
    }

    #[test]
    fn test_custom_chars() {
        let filter = PunctuationCharFilter::with_chars(['|', '|', '~']);
        assert_eq!(filter.filter("a|b~c-d"), "a b c-d");
    }
}
