//! Naive Bayes training and classification.
//!
//! The free functions are the entry points used by the pipeline and the CLI:
//!
//! ```
//! use newsclass::classifier;
//! use newsclass::corpus::{Document, DocumentStore, Split, Topic, TopicSet};
//!
//! let topics = TopicSet::new(["grain", "crude"]).unwrap();
//! let doc = |id, split, topic: &str, terms: &[&str]| {
//!     Document::from_terms(id, split, Some(Topic::new(topic)), terms.iter().copied())
//! };
//! let store = DocumentStore::new(vec![
//!     doc(1, Split::Train, "grain", &["wheat", "corn"]),
//!     doc(2, Split::Train, "crude", &["oil", "barrel"]),
//!     doc(3, Split::Test, "crude", &["oil"]),
//! ]);
//!
//! let model = classifier::train(&store, &topics).unwrap();
//! let report = classifier::evaluate(&store, &model);
//! assert_eq!(report.accuracy, Some(1.0));
//! ```

pub mod model;

pub use model::Model;

use crate::corpus::{Document, DocumentStore, Topic, TopicSet};
use crate::error::Result;
use crate::evaluation::Report;
use crate::selection::{FeatureSelection, MutualInformationSelector};
use crate::vocabulary::Vocabulary;

/// Build the TRAIN vocabulary of `store` and estimate a model over it.
pub fn train(store: &DocumentStore, topics: &TopicSet) -> Result<Model> {
    let vocabulary = Vocabulary::from_training(store);
    Model::estimate(store, &vocabulary, topics)
}

/// Keep the `k` most informative terms of each topic, scored over the
/// model's vocabulary. [`FeatureSelection::vocabulary`] is the reduced
/// vocabulary.
pub fn select_features(store: &DocumentStore, model: &Model, k: usize) -> Result<FeatureSelection> {
    MutualInformationSelector::new(k).select(store, model.vocabulary(), model.topics())
}

/// The most likely topic of one document.
pub fn classify<'m>(document: &Document, model: &'m Model) -> &'m Topic {
    model.classify(document)
}

/// Classify every labeled TEST document of `store`.
pub fn evaluate(store: &DocumentStore, model: &Model) -> Report {
    Report::evaluate(store, model)
}
