//! Analyzers combine char filters, a tokenizer and token filters into one
//! text → terms pipeline.
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Terms
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`NewsAnalyzer`](news::NewsAnalyzer) - The normalization used for news stories

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod news;
pub mod pipeline;

/// Trait for analyzers that convert text into processed tokens.
///
/// Analyzers must be deterministic: the same text always yields the same
/// token sequence, otherwise term statistics are not reproducible.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;

    /// Analyze the text and keep only the token texts.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}
