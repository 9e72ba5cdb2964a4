//! Minimum length filter implementation.
//!
//! # Examples
//!
//! ```
//! use newsclass::analysis::token_filter::Filter;
//! use newsclass::analysis::token_filter::length::MinLengthFilter;
//! use newsclass::analysis::token::Token;
//!
//! let filter = MinLengthFilter::new(2);
//! let tokens = vec![Token::new("u", 0), Token::new("s", 1), Token::new("oil", 2)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "oil");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default minimum token length for news text: single letters are dropped.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 2;

/// A filter that drops empty tokens and tokens shorter than a minimum
/// number of characters.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_chars: usize,
}

impl MinLengthFilter {
    /// Create a filter keeping tokens of at least `min_chars` characters.
    /// A minimum of 0 still drops empty tokens.
    pub fn new(min_chars: usize) -> Self {
        MinLengthFilter {
            min_chars: min_chars.max(1),
        }
    }

    /// The minimum length in characters.
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }
}

impl Default for MinLengthFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TOKEN_LENGTH)
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_chars = self.min_chars;
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.char_len() >= min_chars)
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_filter() {
        let filter = MinLengthFilter::default();
        let tokens = vec![
            Token::new("co", 0),
            Token::new("", 1),
            Token::new("a", 2),
            Token::new("op", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "co");
        assert_eq!(result[1].text, "op");
        assert_eq!(result[1].position, 3);
    }

    #[test]
    fn test_length_counts_characters() {
        let filter = MinLengthFilter::new(2);
        let tokens = vec![Token::new("é", 0)];

        assert_eq!(filter.filter(Box::new(tokens.into_iter())).unwrap().count(), 0);
    }

    #[test]
    fn test_zero_minimum_still_drops_empty() {
        let filter = MinLengthFilter::new(0);
        assert_eq!(filter.min_chars(), 1);
    }
}
