//! The analyzer used for news stories.
//!
//! Text is normalized in this order:
//! 1. lowercase
//! 2. punctuation and markup characters become spaces
//! 3. whole-word stop word removal
//! 4. split on whitespace
//! 5. drop tokens shorter than the minimum length
//! 6. drop tokens that parse as integers
//! 7. stem
//!
//! # Examples
//!
//! ```
//! use newsclass::analysis::{Analyzer, NewsAnalyzer, StopWords};
//!
//! let analyzer = NewsAnalyzer::builder()
//!     .stop_words(StopWords::from_words(["the"]))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(analyzer.terms("The wheat shipments, 1987").unwrap(), vec!["wheat", "shipment"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::{
    LowercaseCharFilter, PunctuationCharFilter, StopWordCharFilter,
};
use crate::analysis::stop_words::StopWords;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::length::DEFAULT_MIN_TOKEN_LENGTH;
use crate::analysis::token_filter::{
    IntegerFilter, MinLengthFilter, PorterStemmer, StemFilter, Stemmer,
};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::{NewsclassError, Result};

/// Analyzer that turns a story's title and body into terms.
#[derive(Clone, Debug)]
pub struct NewsAnalyzer {
    inner: PipelineAnalyzer,
}

impl NewsAnalyzer {
    /// Create an analyzer with no stop words, the Porter stemmer and the
    /// default minimum token length.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start configuring an analyzer.
    pub fn builder() -> NewsAnalyzerBuilder {
        NewsAnalyzerBuilder::default()
    }

    /// The underlying pipeline.
    pub fn pipeline(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for NewsAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &str {
        "news"
    }
}

/// Builder for [`NewsAnalyzer`].
pub struct NewsAnalyzerBuilder {
    stop_words: StopWords,
    stemmer: Arc<dyn Stemmer>,
    min_token_length: usize,
}

impl Default for NewsAnalyzerBuilder {
    fn default() -> Self {
        NewsAnalyzerBuilder {
            stop_words: StopWords::none(),
            stemmer: Arc::new(PorterStemmer::new()),
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
        }
    }
}

impl NewsAnalyzerBuilder {
    /// Stop words removed before tokenization. An empty set disables removal.
    pub fn stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Stemmer applied to every surviving token.
    pub fn stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Minimum token length in characters.
    pub fn min_token_length(mut self, min_token_length: usize) -> Self {
        self.min_token_length = min_token_length;
        self
    }

    /// Assemble the pipeline.
    pub fn build(self) -> Result<NewsAnalyzer> {
        if self.min_token_length == 0 {
            return Err(NewsclassError::analysis(
                "min_token_length must be at least 1",
            ));
        }

        let stop = StopWordCharFilter::new(&self.stop_words)?;

        let inner = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(PunctuationCharFilter::new()))
            .add_char_filter(Arc::new(stop))
            .add_filter(Arc::new(MinLengthFilter::new(self.min_token_length)))
            .add_filter(Arc::new(IntegerFilter::new()))
            .add_filter(Arc::new(StemFilter::with_stemmer(self.stemmer)))
            .with_name("news");

        Ok(NewsAnalyzer { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::IdentityStemmer;

    fn plain(stop_words: StopWords) -> NewsAnalyzer {
        NewsAnalyzer::builder()
            .stop_words(stop_words)
            .stemmer(Arc::new(IdentityStemmer::new()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_stop_words_and_punctuation() {
        let analyzer = plain(StopWords::from_words(["the"]));

        assert_eq!(analyzer.terms("The Quick, Fox!").unwrap(), vec!["quick", "fox"]);
    }

    #[test]
    fn test_punctuation_splits_words() {
        let analyzer = plain(StopWords::none());

        assert_eq!(analyzer.terms("co-op").unwrap(), vec!["co", "op"]);
        assert_eq!(analyzer.terms("a-b").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_integers_dropped() {
        let analyzer = plain(StopWords::none());
        let terms = analyzer.terms("There were 42 cases").unwrap();

        assert!(!terms.contains(&"42".to_string()));
        assert_eq!(terms, vec!["there", "were", "cases"]);
    }

    #[test]
    fn test_decimal_numbers_split_then_dropped() {
        let analyzer = plain(StopWords::none());

        assert_eq!(analyzer.terms("rose 1.5 pct").unwrap(), vec!["rose", "pct"]);
    }

    #[test]
    fn test_porter_by_default() {
        let analyzer = NewsAnalyzer::new().unwrap();

        assert_eq!(
            analyzer.terms("Oil prices rising").unwrap(),
            vec!["oil", "price", "rise"]
        );
    }

    #[test]
    fn test_deterministic() {
        let analyzer = NewsAnalyzer::builder()
            .stop_words(StopWords::english())
            .build()
            .unwrap();
        let text = "The U.S. Agriculture Department said wheat exports rose.";

        assert_eq!(analyzer.terms(text).unwrap(), analyzer.terms(text).unwrap());
    }

    #[test]
    fn test_zero_min_length_rejected() {
        let result = NewsAnalyzer::builder().min_token_length(0).build();
        assert!(result.is_err());
    }
}
