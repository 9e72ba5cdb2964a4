//! Raw and analyzed documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::corpus::split::Split;
use crate::corpus::topic::Topic;

/// A story as produced by a corpus loader, before labeling and analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: u64,
    pub split: Split,
    /// Every topic listed for the story, in file order.
    pub topics: Vec<String>,
    pub title: String,
    pub body: String,
}

impl RawDocument {
    pub fn new<S: Into<String>, T: Into<String>>(id: u64, split: Split, title: S, body: T) -> Self {
        RawDocument {
            id,
            split,
            topics: Vec::new(),
            title: title.into(),
            body: body.into(),
        }
    }

    /// Add a topic candidate.
    pub fn with_topic<S: Into<String>>(mut self, topic: S) -> Self {
        self.topics.push(topic.into());
        self
    }

    /// Title and body joined by a space, the text that gets analyzed.
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.body)
    }
}

/// An analyzed document: a label and term counts.
///
/// Term counts are kept in a sorted map so that every sum over a document is
/// taken in the same order on every run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub split: Split,
    pub label: Option<Topic>,
    pub terms: BTreeMap<String, u32>,
}

impl Document {
    pub fn new(id: u64, split: Split, label: Option<Topic>) -> Self {
        Document {
            id,
            split,
            label,
            terms: BTreeMap::new(),
        }
    }

    /// Build a document by counting the given terms.
    pub fn from_terms<I, S>(id: u64, split: Split, label: Option<Topic>, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut document = Document::new(id, split, label);
        for term in terms {
            document.add_term(term);
        }
        document
    }

    /// Count one more occurrence of a term.
    pub fn add_term<S: Into<String>>(&mut self, term: S) {
        *self.terms.entry(term.into()).or_insert(0) += 1;
    }

    /// Occurrences of a term, 0 when absent.
    pub fn count(&self, term: &str) -> u32 {
        self.terms.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.count(term) > 0
    }

    /// Total number of term occurrences.
    pub fn len(&self) -> u64 {
        self.terms.values().map(|&c| u64::from(c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether the document is labeled and belongs to `split`.
    pub fn is_labeled_in(&self, split: Split) -> bool {
        self.split == split && self.label.is_some()
    }

    /// A copy keeping only the terms accepted by `keep`.
    pub fn retain_terms<F>(&self, mut keep: F) -> Document
    where
        F: FnMut(&str) -> bool,
    {
        Document {
            id: self.id,
            split: self.split,
            label: self.label.clone(),
            terms: self
                .terms
                .iter()
                .filter(|(term, _)| keep(term))
                .map(|(term, &count)| (term.clone(), count))
                .collect(),
        }
    }
}
