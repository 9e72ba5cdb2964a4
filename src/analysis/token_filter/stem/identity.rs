//! Identity stemmer implementation.

use crate::analysis::token_filter::stem::Stemmer;

/// Stemmer that returns words unchanged. Useful to inspect the raw term
/// space or to run the classifier without stemming.
#[derive(Debug, Clone, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}
