//! Stemming token filter and stemmer implementations.
//!
//! The stemmer is an injectable `&str → String` function. It must be
//! deterministic and free of side effects, since the same word has to map to
//! the same term in training and test documents.

use std::sync::Arc;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

// Stemmer implementations
pub mod identity;
pub mod porter;

// Re-export stemmers
pub use identity::IdentityStemmer;
pub use porter::PorterStemmer;

/// Adapts a plain function or closure into a [`Stemmer`].
///
/// ```
/// use newsclass::analysis::token_filter::stem::{FnStemmer, Stemmer};
///
/// let stemmer = FnStemmer::new(|word: &str| word.trim_end_matches('s').to_string());
/// assert_eq!(stemmer.stem("bonds"), "bond");
/// ```
pub struct FnStemmer<F> {
    func: F,
}

impl<F> FnStemmer<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    /// Wrap a stemming function.
    pub fn new(func: F) -> Self {
        FnStemmer { func }
    }
}

impl<F> Stemmer for FnStemmer<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn stem(&self, word: &str) -> String {
        (self.func)(word)
    }

    fn name(&self) -> &'static str {
        "fn"
    }
}

/// Filter that applies stemming to tokens.
#[derive(Clone)]
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Arc<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the Porter stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Arc::new(PorterStemmer::new()),
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    /// The stemmer used by this filter.
    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let stemmed = self.stemmer.stem(&token.text);
                token.with_text(stemmed)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::new();
        let tokens = vec![Token::new("running", 0), Token::new("flies", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "run");
        assert_eq!(result[1].text, "fli");
    }

    #[test]
    fn test_injected_stemmer() {
        let stemmer = FnStemmer::new(|word: &str| word.to_uppercase());
        let filter = StemFilter::with_stemmer(Arc::new(stemmer));
        let tokens = vec![Token::new("oil", 0)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "OIL");
        assert_eq!(filter.stemmer().name(), "fn");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StemFilter::new().name(), "stem");
    }
}
