//! Two-pass train/evaluate pipeline.
//!
//! 1. Train on the full TRAIN vocabulary and evaluate.
//! 2. Select features by mutual information.
//! 3. Restrict every document to the selected terms in a new store, rebuild
//!    the vocabulary, retrain and evaluate again.

use log::info;
use serde::Serialize;

use crate::classifier::{self, Model};
use crate::corpus::{DocumentStore, TopicSet};
use crate::error::Result;
use crate::evaluation::Report;
use crate::selection::{DEFAULT_FEATURES_PER_TOPIC, FeatureSelection};

/// Model and report of one pass.
#[derive(Clone, Debug, Serialize)]
pub struct PassOutcome {
    pub vocabulary_size: usize,
    pub training_documents: usize,
    pub report: Report,
    #[serde(skip)]
    pub model: Model,
}

impl PassOutcome {
    fn run(store: &DocumentStore, topics: &TopicSet) -> Result<Self> {
        let model = classifier::train(store, topics)?;
        let report = classifier::evaluate(store, &model);

        Ok(PassOutcome {
            vocabulary_size: model.vocabulary().len(),
            training_documents: model.training_documents(),
            report,
            model,
        })
    }
}

/// Both passes and the selection that links them.
#[derive(Clone, Debug, Serialize)]
pub struct TwoPassOutcome {
    pub full: PassOutcome,
    pub selection: FeatureSelection,
    pub reduced: PassOutcome,
}

/// Runs the full-vocabulary pass, feature selection and the
/// reduced-vocabulary pass.
#[derive(Clone, Debug)]
pub struct Pipeline {
    topics: TopicSet,
    features_per_topic: usize,
}

impl Pipeline {
    pub fn new(topics: TopicSet, features_per_topic: usize) -> Self {
        Pipeline {
            topics,
            features_per_topic,
        }
    }

    pub fn topics(&self) -> &TopicSet {
        &self.topics
    }

    pub fn features_per_topic(&self) -> usize {
        self.features_per_topic
    }

    /// Run both passes over `store`. `store` itself is left untouched.
    pub fn run(&self, store: &DocumentStore) -> Result<TwoPassOutcome> {
        let full = PassOutcome::run(store, &self.topics)?;
        info!(
            "full vocabulary ({} terms): accuracy {:?}",
            full.vocabulary_size, full.report.accuracy
        );

        let selection = self.select(store, &full.model)?;

        let reduced_store = store.restrict_to(&selection.vocabulary());
        let reduced = PassOutcome::run(&reduced_store, &self.topics)?;
        info!(
            "reduced vocabulary ({} terms): accuracy {:?}",
            reduced.vocabulary_size, reduced.report.accuracy
        );

        Ok(TwoPassOutcome {
            full,
            selection,
            reduced,
        })
    }

    /// Train on `store` and select features, without the second pass.
    pub fn select_only(&self, store: &DocumentStore) -> Result<FeatureSelection> {
        let model = classifier::train(store, &self.topics)?;
        self.select(store, &model)
    }

    fn select(&self, store: &DocumentStore, model: &Model) -> Result<FeatureSelection> {
        classifier::select_features(store, model, self.features_per_topic)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline::new(TopicSet::reuters(), DEFAULT_FEATURES_PER_TOPIC)
    }
}
