//! Vocabulary construction.
//!
//! The vocabulary is the set of distinct terms present in the labeled
//! documents of one split. It is built from scratch for every document
//! collection and never edited afterwards.

use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::corpus::{DocumentStore, Split};

/// A sorted set of distinct terms.
///
/// # Examples
///
/// ```
/// use newsclass::vocabulary::Vocabulary;
///
/// let vocabulary = Vocabulary::from_terms(["oil", "wheat", "oil"]);
/// assert_eq!(vocabulary.len(), 2);
/// assert!(vocabulary.contains("oil"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    terms: BTreeSet<String>,
}

impl Vocabulary {
    /// Every term with a positive count in a labeled `split` document.
    pub fn build(store: &DocumentStore, split: Split) -> Self {
        let terms: BTreeSet<String> = store
            .labeled(split)
            .flat_map(|doc| {
                doc.terms
                    .iter()
                    .filter(|(_, count)| **count > 0)
                    .map(|(term, _)| term.clone())
            })
            .collect();

        debug!("built {split} vocabulary of {} terms", terms.len());
        Vocabulary { terms }
    }

    /// The TRAIN vocabulary.
    pub fn from_training(store: &DocumentStore) -> Self {
        Self::build(store, Split::Train)
    }

    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Vocabulary {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Terms in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl FromIterator<String> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Vocabulary {
            terms: iter.into_iter().collect(),
        }
    }
}
