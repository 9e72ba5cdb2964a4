//! Error types for the newsclass library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`NewsclassError`] enum.
//!
//! Only whole-run failures are errors. A single malformed document is
//! dropped during ingestion, and an undefined precision or recall is reported
//! as `None`, so neither aborts the rest of the corpus.
//!
//! # Examples
//!
//! ```
//! use newsclass::error::{NewsclassError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NewsclassError::invalid_argument("features_per_topic must be positive"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for newsclass operations.
#[derive(Error, Debug)]
pub enum NewsclassError {
    /// I/O errors (corpus files, stop word lists, configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (invalid analyzer setup)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus-level errors (an unreadable corpus, not a single bad document)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// A topic has no training documents, so no likelihood table can be built.
    #[error("Degenerate topic: '{topic}' has no training documents")]
    DegenerateTopic { topic: String },

    /// No labeled training documents at all.
    #[error("Training set is empty: no labeled TRAIN documents")]
    EmptyTrainingSet,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Regex compilation errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O failures with the path that caused them attached as context
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with NewsclassError.
pub type Result<T> = std::result::Result<T, NewsclassError>;

impl NewsclassError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        NewsclassError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        NewsclassError::Corpus(msg.into())
    }

    /// Create a new degenerate topic error.
    pub fn degenerate_topic<S: Into<String>>(topic: S) -> Self {
        NewsclassError::DegenerateTopic {
            topic: topic.into(),
        }
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        NewsclassError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        NewsclassError::InvalidArgument(msg.into())
    }

    /// Whether this error signals a configuration problem (degenerate topic
    /// set, empty training set or an invalid setting) rather than an I/O or
    /// parse failure.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            NewsclassError::DegenerateTopic { .. }
                | NewsclassError::EmptyTrainingSet
                | NewsclassError::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = NewsclassError::analysis("bad stop word");
        assert_eq!(error.to_string(), "Analysis error: bad stop word");

        let error = NewsclassError::corpus("no .sgm files");
        assert_eq!(error.to_string(), "Corpus error: no .sgm files");

        let error = NewsclassError::degenerate_topic("grain");
        assert_eq!(
            error.to_string(),
            "Degenerate topic: 'grain' has no training documents"
        );
    }

    #[test]
    fn test_configuration_errors() {
        assert!(NewsclassError::degenerate_topic("crude").is_configuration_error());
        assert!(NewsclassError::EmptyTrainingSet.is_configuration_error());
        assert!(!NewsclassError::corpus("x").is_configuration_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = NewsclassError::from(io_error);

        match error {
            NewsclassError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_context_is_rendered() {
        use anyhow::Context;

        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let error = NewsclassError::from(result.context("cannot read reut2-000.sgm").unwrap_err());

        assert_eq!(error.to_string(), "cannot read reut2-000.sgm: gone");
        assert!(!error.is_configuration_error());
    }
}
