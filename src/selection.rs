//! Feature selection by mutual information.
//!
//! Every vocabulary term is scored against every topic over the labeled
//! TRAIN documents, each topic keeps its `k` best terms, and the union of
//! the kept terms becomes the reduced vocabulary. A term kept for one topic
//! is part of the reduced vocabulary for all topics.

pub mod mutual_information;
pub mod top_k;

pub use mutual_information::ContingencyTable;
pub use top_k::{ScoredTerm, TopTerms};

use ahash::AHashMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::corpus::{DocumentStore, Split, Topic, TopicSet};
use crate::error::{NewsclassError, Result};
use crate::vocabulary::Vocabulary;

/// Number of terms kept per topic unless configured otherwise.
pub const DEFAULT_FEATURES_PER_TOPIC: usize = 50;

/// The kept terms of one topic, best first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopicFeatures {
    pub topic: Topic,
    pub terms: Vec<ScoredTerm>,
}

/// Result of a selection run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureSelection {
    pub features_per_topic: usize,
    pub topics: Vec<TopicFeatures>,
}

impl FeatureSelection {
    /// Kept terms of one topic, best first.
    pub fn terms_for(&self, topic: &str) -> Option<&[ScoredTerm]> {
        self.topics
            .iter()
            .find(|features| features.topic.as_str() == topic)
            .map(|features| features.terms.as_slice())
    }

    /// The union of every topic's kept terms.
    pub fn vocabulary(&self) -> Vocabulary {
        self.topics
            .iter()
            .flat_map(|features| features.terms.iter().map(|t| t.term.clone()))
            .collect()
    }
}

/// Selects the `k` terms per topic with the highest mutual information.
#[derive(Clone, Debug)]
pub struct MutualInformationSelector {
    features_per_topic: usize,
}

impl Default for MutualInformationSelector {
    fn default() -> Self {
        Self::new(DEFAULT_FEATURES_PER_TOPIC)
    }
}

impl MutualInformationSelector {
    pub fn new(features_per_topic: usize) -> Self {
        MutualInformationSelector { features_per_topic }
    }

    pub fn features_per_topic(&self) -> usize {
        self.features_per_topic
    }

    /// Score the vocabulary against each topic and keep the best terms.
    ///
    /// Each topic keeps exactly `min(k, |vocabulary|)` terms.
    pub fn select(
        &self,
        store: &DocumentStore,
        vocabulary: &Vocabulary,
        topics: &TopicSet,
    ) -> Result<FeatureSelection> {
        if self.features_per_topic == 0 {
            return Err(NewsclassError::invalid_argument(
                "features_per_topic must be positive",
            ));
        }

        // document frequency of each term, per topic
        let mut document_frequencies: AHashMap<&str, Vec<u64>> = AHashMap::new();
        let mut documents_per_topic = vec![0u64; topics.len()];

        for doc in store.labeled(Split::Train) {
            let Some(index) = doc
                .label
                .as_ref()
                .and_then(|label| topics.index_of(label.as_str()))
            else {
                continue;
            };
            documents_per_topic[index] += 1;

            for (term, &count) in &doc.terms {
                if count > 0 && vocabulary.contains(term) {
                    document_frequencies
                        .entry(term.as_str())
                        .or_insert_with(|| vec![0; topics.len()])[index] += 1;
                }
            }
        }

        let total_documents: u64 = documents_per_topic.iter().sum();
        if total_documents == 0 {
            return Err(NewsclassError::EmptyTrainingSet);
        }

        let no_documents = vec![0u64; topics.len()];
        let mut selected = Vec::with_capacity(topics.len());

        for (index, topic) in topics.iter().enumerate() {
            let topic_documents = documents_per_topic[index];
            let other_documents = total_documents - topic_documents;
            let mut top = TopTerms::new(self.features_per_topic);

            for term in vocabulary.iter() {
                let frequencies = document_frequencies.get(term).unwrap_or(&no_documents);
                let in_topic = frequencies[index];
                let elsewhere = frequencies.iter().sum::<u64>() - in_topic;

                let table =
                    ContingencyTable::new(in_topic, elsewhere, topic_documents, other_documents);
                top.offer(term, table.mutual_information());
            }

            let terms = top.into_sorted();
            debug!(
                "topic {topic}: kept {} terms, best {:?}",
                terms.len(),
                terms.first().map(|t| t.term.as_str())
            );
            selected.push(TopicFeatures {
                topic: topic.clone(),
                terms,
            });
        }

        let selection = FeatureSelection {
            features_per_topic: self.features_per_topic,
            topics: selected,
        };
        info!(
            "selected {} distinct terms out of {}",
            selection.vocabulary().len(),
            vocabulary.len()
        );

        Ok(selection)
    }
}
