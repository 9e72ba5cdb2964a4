//! Multinomial Naive Bayes parameters.
//!
//! For topic `c`, TRAIN document counts `N_c` and `N`, summed vocabulary term
//! occurrences `T_c` and vocabulary size `V`:
//!
//! ```text
//! log_prior[c]         = ln(N_c / N)
//! log_likelihood[c][t] = ln((count_c(t) + 1) / (T_c + V))
//! score(c, d)          = log_prior[c] + Σ_t count_d(t) · log_likelihood[c][t]
//! ```

use ahash::AHashMap;
use log::{debug, info};

use crate::corpus::{Document, DocumentStore, Split, Topic, TopicSet};
use crate::error::{NewsclassError, Result};
use crate::vocabulary::Vocabulary;

/// Immutable model parameters over one vocabulary.
///
/// Every vector is indexed in [`TopicSet`] order.
#[derive(Clone, Debug)]
pub struct Model {
    topics: TopicSet,
    vocabulary: Vocabulary,
    log_priors: Vec<f64>,
    log_likelihoods: Vec<AHashMap<String, f64>>,
    training_documents: usize,
}

impl Model {
    /// Estimate priors and smoothed likelihoods from the labeled TRAIN
    /// documents of `store`.
    ///
    /// Only vocabulary terms are counted. Fails with
    /// [`NewsclassError::EmptyTrainingSet`] when no TRAIN document carries a
    /// topic of `topics`, and with [`NewsclassError::DegenerateTopic`] when
    /// one topic has none. A topic whose smoothing denominator `T_c + V` is
    /// zero is a [`NewsclassError::Config`] error.
    pub fn estimate(store: &DocumentStore, vocabulary: &Vocabulary, topics: &TopicSet) -> Result<Self> {
        let mut documents_per_topic = vec![0usize; topics.len()];
        let mut occurrences_per_topic = vec![0u64; topics.len()];
        let mut counts: Vec<AHashMap<&str, u64>> = vec![AHashMap::new(); topics.len()];

        for doc in store.labeled(Split::Train) {
            let Some(index) = topic_index(topics, doc) else {
                continue;
            };
            documents_per_topic[index] += 1;

            for (term, &count) in &doc.terms {
                if count == 0 || !vocabulary.contains(term) {
                    continue;
                }
                *counts[index].entry(term.as_str()).or_insert(0) += u64::from(count);
                occurrences_per_topic[index] += u64::from(count);
            }
        }

        let training_documents: usize = documents_per_topic.iter().sum();
        if training_documents == 0 {
            return Err(NewsclassError::EmptyTrainingSet);
        }
        if let Some(empty) = documents_per_topic.iter().position(|&n| n == 0) {
            let topic = topics.get(empty).map(Topic::to_string).unwrap_or_default();
            return Err(NewsclassError::degenerate_topic(topic));
        }

        let vocabulary_size = vocabulary.len() as u64;
        if let Some(empty) = occurrences_per_topic
            .iter()
            .position(|&occurrences| occurrences + vocabulary_size == 0)
        {
            let topic = topics.get(empty).map(Topic::to_string).unwrap_or_default();
            return Err(NewsclassError::config(format!(
                "topic '{topic}' has no term occurrences over an empty vocabulary"
            )));
        }

        let mut log_priors = Vec::with_capacity(topics.len());
        let mut log_likelihoods = Vec::with_capacity(topics.len());

        for (index, topic) in topics.iter().enumerate() {
            log_priors.push((documents_per_topic[index] as f64 / training_documents as f64).ln());

            let denominator = (occurrences_per_topic[index] + vocabulary_size) as f64;
            let table: AHashMap<String, f64> = vocabulary
                .iter()
                .map(|term| {
                    let count = counts[index].get(term).copied().unwrap_or(0);
                    (term.to_string(), ((count + 1) as f64 / denominator).ln())
                })
                .collect();

            debug!(
                "topic {topic}: {} documents, {} term occurrences",
                documents_per_topic[index], occurrences_per_topic[index]
            );
            log_likelihoods.push(table);
        }

        info!(
            "estimated model over {} terms from {} training documents",
            vocabulary.len(),
            training_documents
        );

        Ok(Model {
            topics: topics.clone(),
            vocabulary: vocabulary.clone(),
            log_priors,
            log_likelihoods,
            training_documents,
        })
    }

    pub fn topics(&self) -> &TopicSet {
        &self.topics
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of labeled TRAIN documents the model was estimated from.
    pub fn training_documents(&self) -> usize {
        self.training_documents
    }

    pub fn log_prior(&self, topic: &str) -> Option<f64> {
        self.topics.index_of(topic).map(|i| self.log_priors[i])
    }

    /// `None` when the topic is unknown or the term is outside the vocabulary.
    pub fn log_likelihood(&self, topic: &str, term: &str) -> Option<f64> {
        let index = self.topics.index_of(topic)?;
        self.log_likelihoods[index].get(term).copied()
    }

    /// The score of a document for the topic at `index`. Terms outside the
    /// vocabulary contribute nothing.
    fn score_at(&self, index: usize, doc: &Document) -> f64 {
        let table = &self.log_likelihoods[index];
        doc.terms.iter().fold(self.log_priors[index], |score, (term, &count)| {
            match table.get(term) {
                Some(log_likelihood) => score + f64::from(count) * log_likelihood,
                None => score,
            }
        })
    }

    /// Scores of a document for every topic, in enumeration order.
    pub fn scores(&self, doc: &Document) -> Vec<(&Topic, f64)> {
        self.topics
            .iter()
            .enumerate()
            .map(|(index, topic)| (topic, self.score_at(index, doc)))
            .collect()
    }

    /// The highest-scoring topic. On equal scores the topic earlier in the
    /// enumeration wins.
    pub fn classify(&self, doc: &Document) -> &Topic {
        let mut best = 0;
        let mut best_score = self.score_at(0, doc);
        for index in 1..self.topics.len() {
            let score = self.score_at(index, doc);
            if score > best_score {
                best = index;
                best_score = score;
            }
        }
        &self.topics.as_slice()[best]
    }
}

fn topic_index(topics: &TopicSet, doc: &Document) -> Option<usize> {
    doc.label.as_ref().and_then(|label| topics.index_of(label.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: u64, split: Split, topic: &str, terms: &[&str]) -> Document {
        Document::from_terms(id, split, Some(Topic::new(topic)), terms.iter().copied())
    }

    fn store() -> DocumentStore {
        DocumentStore::new(vec![
            doc(1, Split::Train, "grain", &["wheat", "wheat", "export"]),
            doc(2, Split::Train, "grain", &["corn"]),
            doc(3, Split::Train, "crude", &["oil", "export"]),
            doc(4, Split::Test, "crude", &["oil", "opec"]),
        ])
    }

    #[test]
    fn test_priors_and_likelihoods() {
        let store = store();
        let topics = TopicSet::new(["grain", "crude"]).unwrap();
        let vocabulary = Vocabulary::from_training(&store);
        let model = Model::estimate(&store, &vocabulary, &topics).unwrap();

        assert_eq!(vocabulary.len(), 4);
        assert_eq!(model.training_documents(), 3);
        assert!((model.log_prior("grain").unwrap() - (2.0f64 / 3.0).ln()).abs() < 1e-12);

        // grain: T = 4, V = 4
        let wheat = model.log_likelihood("grain", "wheat").unwrap();
        assert!((wheat - (3.0f64 / 8.0).ln()).abs() < 1e-12);
        let oil = model.log_likelihood("grain", "oil").unwrap();
        assert!((oil - (1.0f64 / 8.0).ln()).abs() < 1e-12);

        assert_eq!(model.log_likelihood("grain", "opec"), None);
        assert_eq!(model.log_prior("earn"), None);
    }

    #[test]
    fn test_smoothed_likelihoods_are_probabilities() {
        let store = store();
        let topics = TopicSet::new(["grain", "crude"]).unwrap();
        let vocabulary = Vocabulary::from_training(&store);
        let model = Model::estimate(&store, &vocabulary, &topics).unwrap();

        for topic in topics.iter() {
            for term in vocabulary.iter() {
                let p = model.log_likelihood(topic.as_str(), term).unwrap().exp();
                assert!(p > 0.0 && p <= 1.0);
            }
        }
    }

    #[test]
    fn test_out_of_vocabulary_terms_ignored() {
        let store = store();
        let topics = TopicSet::new(["grain", "crude"]).unwrap();
        let model = Model::estimate(&store, &Vocabulary::from_training(&store), &topics).unwrap();

        let with_unknown = doc(9, Split::Test, "crude", &["oil", "opec"]);
        let without = doc(10, Split::Test, "crude", &["oil"]);

        assert_eq!(model.scores(&with_unknown), model.scores(&without));
        assert_eq!(model.classify(&with_unknown).as_str(), "crude");
    }

    #[test]
    fn test_degenerate_topic() {
        let store = store();
        let topics = TopicSet::new(["grain", "crude", "earn"]).unwrap();
        let err = Model::estimate(&store, &Vocabulary::from_training(&store), &topics).unwrap_err();

        assert!(matches!(err, NewsclassError::DegenerateTopic { ref topic } if topic == "earn"));
    }

    #[test]
    fn test_empty_training_set() {
        let store = DocumentStore::new(vec![doc(1, Split::Test, "grain", &["wheat"])]);
        let topics = TopicSet::new(["grain"]).unwrap();
        let err = Model::estimate(&store, &Vocabulary::from_training(&store), &topics).unwrap_err();

        assert!(matches!(err, NewsclassError::EmptyTrainingSet));
    }

    #[test]
    fn test_termless_training_documents() {
        let store = DocumentStore::new(vec![
            doc(1, Split::Train, "grain", &[]),
            doc(2, Split::Train, "crude", &[]),
        ]);
        let topics = TopicSet::new(["grain", "crude"]).unwrap();
        let vocabulary = Vocabulary::from_training(&store);
        assert!(vocabulary.is_empty());

        let err = Model::estimate(&store, &vocabulary, &topics).unwrap_err();

        assert!(matches!(err, NewsclassError::Config(ref msg) if msg.contains("'grain'")));
        assert!(err.is_configuration_error());
    }
}
