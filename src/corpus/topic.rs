//! Topics and the fixed topic enumeration.
//!
//! The [`TopicSet`] is closed and ordered. Its order is the tie-break order
//! of the classifier and the order of every per-topic vector in a model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NewsclassError, Result};

/// The five Reuters-21578 topics used by default.
pub const REUTERS_TOPICS: &[&str] = &["earn", "acq", "money-fx", "grain", "crude"];

/// A single classification target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Topic(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Topic {
    fn from(name: &str) -> Self {
        Topic::new(name)
    }
}

/// An ordered, duplicate-free list of topics.
///
/// # Examples
///
/// ```
/// use newsclass::corpus::TopicSet;
///
/// let topics = TopicSet::new(["grain", "crude"]).unwrap();
/// assert_eq!(topics.index_of("crude"), Some(1));
///
/// // Exactly one candidate must be in the set.
/// assert_eq!(topics.label_for(["usa", "grain"]).unwrap().as_str(), "grain");
/// assert!(topics.label_for(["grain", "crude"]).is_none());
/// assert!(topics.label_for(["usa"]).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TopicSet {
    topics: Vec<Topic>,
}

impl TopicSet {
    /// Build a topic set. Names are trimmed; the set must be non-empty and
    /// free of duplicates.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut topics: Vec<Topic> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(NewsclassError::config("topic names must not be empty"));
            }
            if topics.iter().any(|t| t.as_str() == name) {
                return Err(NewsclassError::config(format!(
                    "duplicate topic '{name}'"
                )));
            }
            topics.push(Topic::new(name));
        }

        if topics.is_empty() {
            return Err(NewsclassError::config("the topic set is empty"));
        }

        Ok(TopicSet { topics })
    }

    /// The default Reuters topics.
    pub fn reuters() -> Self {
        TopicSet {
            topics: REUTERS_TOPICS.iter().map(|&t| Topic::new(t)).collect(),
        }
    }

    /// Position of a topic in enumeration order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.topics.iter().position(|t| t.as_str() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&Topic> {
        self.topics.get(index)
    }

    pub fn as_slice(&self) -> &[Topic] {
        &self.topics
    }

    /// Iterate the topics in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Topic> {
        self.topics.iter()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// The label of a story with the given topic candidates: the matching
    /// topic if exactly one candidate is in the set, `None` otherwise.
    ///
    /// A candidate listed twice counts once.
    pub fn label_for<I, S>(&self, candidates: I) -> Option<Topic>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut found: Option<usize> = None;
        for candidate in candidates {
            if let Some(index) = self.index_of(candidate.as_ref()) {
                match found {
                    Some(previous) if previous != index => return None,
                    _ => found = Some(index),
                }
            }
        }
        found.map(|index| self.topics[index].clone())
    }
}

impl Default for TopicSet {
    fn default() -> Self {
        Self::reuters()
    }
}

impl TryFrom<Vec<String>> for TopicSet {
    type Error = NewsclassError;

    fn try_from(names: Vec<String>) -> Result<Self> {
        TopicSet::new(names)
    }
}

impl From<TopicSet> for Vec<String> {
    fn from(set: TopicSet) -> Self {
        set.topics.into_iter().map(|t| t.0).collect()
    }
}

impl<'a> IntoIterator for &'a TopicSet {
    type Item = &'a Topic;
    type IntoIter = std::slice::Iter<'a, Topic>;

    fn into_iter(self) -> Self::IntoIter {
        self.topics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reuters_topics() {
        let topics = TopicSet::reuters();
        assert_eq!(topics.len(), 5);
        assert_eq!(topics.get(0).unwrap().as_str(), "earn");
        assert_eq!(topics.index_of("crude"), Some(4));
        assert!(!topics.contains("corn"));
    }

    #[test]
    fn test_invalid_sets() {
        assert!(TopicSet::new(Vec::<String>::new()).is_err());
        assert!(TopicSet::new(["earn", "earn"]).is_err());
        assert!(TopicSet::new(["earn", " "]).is_err());
    }

    #[test]
    fn test_label_for() {
        let topics = TopicSet::reuters();

        assert_eq!(topics.label_for(["earn"]), Some(Topic::new("earn")));
        assert_eq!(topics.label_for(["earn", "earn"]), Some(Topic::new("earn")));
        assert_eq!(topics.label_for(["corn", "grain", "wheat"]), Some(Topic::new("grain")));
        assert_eq!(topics.label_for(["grain", "crude"]), None);
        assert_eq!(topics.label_for(Vec::<String>::new()), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let topics = TopicSet::new(["grain", "crude"]).unwrap();
        let json = serde_json::to_string(&topics).unwrap();
        assert_eq!(json, r#"["grain","crude"]"#);

        assert!(serde_json::from_str::<TopicSet>(r#"["a","a"]"#).is_err());
    }
}
