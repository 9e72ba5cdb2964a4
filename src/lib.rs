//! # newsclass
//!
//! Topic classification of short news stories with multinomial Naive Bayes
//! and mutual-information feature selection.
//!
//! ## Pipeline
//!
//! - [`corpus`]: load Reuters-21578 stories, label them against a fixed
//!   topic set and analyze title and body into term counts
//! - [`vocabulary`]: distinct TRAIN terms
//! - [`classifier`]: Laplace-smoothed priors and likelihoods, arg-max decision
//! - [`selection`]: per-topic top-K terms by mutual information
//! - [`evaluation`]: accuracy, precision, recall and F1 on TEST documents
//! - [`pipeline`]: full-vocabulary pass, selection, reduced-vocabulary pass

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod evaluation;
pub mod pipeline;
pub mod selection;
pub mod vocabulary;

pub mod prelude {
    pub use crate::analysis::{Analyzer, NewsAnalyzer, StopWords};
    pub use crate::classifier::{Model, classify, evaluate, select_features, train};
    pub use crate::config::NewsclassConfig;
    pub use crate::corpus::{Document, DocumentStore, RawDocument, Split, Topic, TopicSet};
    pub use crate::error::{NewsclassError, Result};
    pub use crate::evaluation::Report;
    pub use crate::pipeline::{Pipeline, TwoPassOutcome};
    pub use crate::selection::FeatureSelection;
    pub use crate::vocabulary::Vocabulary;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
