//! The in-memory document store.
//!
//! A store is never edited after it is built. Feature selection produces a
//! new store with [`DocumentStore::restrict_to`], so the full-vocabulary and
//! reduced-vocabulary passes never see each other's documents.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::corpus::document::{Document, RawDocument};
use crate::corpus::split::Split;
use crate::corpus::topic::TopicSet;
use crate::error::Result;
use crate::vocabulary::Vocabulary;

/// What happened to the raw stories during ingestion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    /// Raw stories seen.
    pub read: usize,
    /// Stories kept as TRAIN documents.
    pub train: usize,
    /// Stories kept as TEST documents.
    pub test: usize,
    /// Dropped because the split is neither TRAIN nor TEST.
    pub other_split: usize,
    /// Dropped because zero or several candidates are in the topic set.
    pub unlabeled: usize,
}

impl IngestStats {
    /// Documents that made it into the store.
    pub fn kept(&self) -> usize {
        self.train + self.test
    }
}

/// An immutable collection of analyzed documents.
#[derive(Clone, Debug, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    pub fn new(documents: Vec<Document>) -> Self {
        DocumentStore { documents }
    }

    /// Label and analyze raw stories.
    ///
    /// OTHER-split stories and stories without exactly one topic from
    /// `topics` are dropped and counted in the returned [`IngestStats`].
    pub fn ingest<'a, I, A>(raw: I, topics: &TopicSet, analyzer: &A) -> Result<(Self, IngestStats)>
    where
        I: IntoIterator<Item = &'a RawDocument>,
        A: Analyzer + ?Sized,
    {
        let mut stats = IngestStats::default();
        let mut documents = Vec::new();

        for story in raw {
            stats.read += 1;

            if story.split == Split::Other {
                stats.other_split += 1;
                continue;
            }

            let Some(label) = topics.label_for(&story.topics) else {
                debug!("story {} dropped: topics {:?}", story.id, story.topics);
                stats.unlabeled += 1;
                continue;
            };

            let terms = analyzer.terms(&story.text())?;
            match story.split {
                Split::Train => stats.train += 1,
                _ => stats.test += 1,
            }
            documents.push(Document::from_terms(story.id, story.split, Some(label), terms));
        }

        info!(
            "ingested {} of {} stories ({} TRAIN, {} TEST, {} unlabeled, {} other split)",
            stats.kept(),
            stats.read,
            stats.train,
            stats.test,
            stats.unlabeled,
            stats.other_split
        );

        Ok((DocumentStore::new(documents), stats))
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Labeled documents of one split, in store order.
    pub fn labeled(&self, split: Split) -> impl Iterator<Item = &Document> {
        self.documents
            .iter()
            .filter(move |doc| doc.is_labeled_in(split))
    }

    /// A new store whose documents keep only vocabulary terms.
    pub fn restrict_to(&self, vocabulary: &Vocabulary) -> DocumentStore {
        let documents = self
            .documents
            .iter()
            .map(|doc| doc.retain_terms(|term| vocabulary.contains(term)))
            .collect();
        DocumentStore { documents }
    }
}

impl FromIterator<Document> for DocumentStore {
    fn from_iter<T: IntoIterator<Item = Document>>(iter: T) -> Self {
        DocumentStore::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::{IdentityStemmer, NewsAnalyzer};
    use crate::corpus::topic::Topic;

    fn analyzer() -> NewsAnalyzer {
        NewsAnalyzer::builder()
            .stemmer(Arc::new(IdentityStemmer::new()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_ingest_filters_and_labels() {
        let topics = TopicSet::new(["grain", "crude"]).unwrap();
        let raw = vec![
            RawDocument::new(1, Split::Train, "Wheat", "wheat exports").with_topic("grain"),
            RawDocument::new(2, Split::Test, "Oil", "oil price").with_topic("crude").with_topic("usa"),
            RawDocument::new(3, Split::Train, "Both", "mixed").with_topic("grain").with_topic("crude"),
            RawDocument::new(4, Split::Train, "None", "nothing").with_topic("earn"),
            RawDocument::new(5, Split::Other, "Old", "ignored").with_topic("grain"),
        ];

        let (store, stats) = DocumentStore::ingest(&raw, &topics, &analyzer()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(
            stats,
            IngestStats {
                read: 5,
                train: 1,
                test: 1,
                other_split: 1,
                unlabeled: 2,
            }
        );

        let train: Vec<_> = store.labeled(Split::Train).collect();
        assert_eq!(train.len(), 1);
        assert_eq!(train[0].label, Some(Topic::new("grain")));
        assert_eq!(train[0].count("wheat"), 2);
    }

    #[test]
    fn test_restrict_to_builds_new_store() {
        let store: DocumentStore = vec![
            Document::from_terms(1, Split::Train, Some(Topic::new("a")), ["x", "y"]),
            Document::from_terms(2, Split::Test, Some(Topic::new("b")), ["y", "z"]),
        ]
        .into_iter()
        .collect();

        let vocabulary = Vocabulary::from_terms(["y"]);
        let reduced = store.restrict_to(&vocabulary);

        assert!(reduced.documents().iter().all(|d| d.terms.len() == 1));
        assert_eq!(store.documents()[0].count("x"), 1);
    }
}
