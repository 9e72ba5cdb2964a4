//! Text analysis for news stories.
//!
//! Raw title and body text is turned into a sequence of normalized terms by a
//! pipeline of char filters, a tokenizer and token filters. The pipeline used
//! by the classifier is assembled by [`NewsAnalyzer`]:
//!
//! ```text
//! raw text → lowercase → punctuation → stop words      (char filters)
//!          → whitespace split                          (tokenizer)
//!          → min length → integers → stem              (token filters)
//! ```

pub mod analyzer;
pub mod char_filter;
pub mod stop_words;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::news::{NewsAnalyzer, NewsAnalyzerBuilder};
pub use analyzer::pipeline::PipelineAnalyzer;
pub use analyzer::Analyzer;
pub use stop_words::StopWords;
pub use token::{Token, TokenStream};
pub use token_filter::stem::{FnStemmer, IdentityStemmer, PorterStemmer, Stemmer};
