//! Integer filter implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that drops tokens that parse as a 32-bit signed integer.
///
/// Longer digit runs that overflow `i32` are kept as ordinary terms.
#[derive(Clone, Debug, Default)]
pub struct IntegerFilter;

impl IntegerFilter {
    /// Create a new integer filter.
    pub fn new() -> Self {
        IntegerFilter
    }

    /// Check whether a token text counts as an integer.
    pub fn is_integer(text: &str) -> bool {
        text.parse::<i32>().is_ok()
    }
}

impl Filter for IntegerFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !Self::is_integer(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "integer"
    }
}
