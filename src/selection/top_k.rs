//! Bounded top-K collection of scored terms.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

/// A term and its selection score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredTerm {
    pub term: String,
    pub score: f64,
}

impl ScoredTerm {
    pub fn new<S: Into<String>>(term: S, score: f64) -> Self {
        ScoredTerm {
            term: term.into(),
            score,
        }
    }
}

/// Heap entry ordered so that the worst term sits on top: the lowest score,
/// and among equal scores the lexicographically greatest term.
#[derive(Debug)]
struct HeapEntry(ScoredTerm);

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on score
        other
            .0
            .score
            .total_cmp(&self.0.score)
            .then_with(|| self.0.term.cmp(&other.0.term))
    }
}

/// Keeps the `k` best terms seen so far.
///
/// # Examples
///
/// ```
/// use newsclass::selection::TopTerms;
///
/// let mut top = TopTerms::new(2);
/// top.offer("bushel", 0.1);
/// top.offer("wheat", 0.4);
/// top.offer("tonne", 0.2);
///
/// let terms: Vec<_> = top.into_sorted().into_iter().map(|t| t.term).collect();
/// assert_eq!(terms, vec!["wheat", "tonne"]);
/// ```
#[derive(Debug)]
pub struct TopTerms {
    k: usize,
    heap: BinaryHeap<HeapEntry>,
}

impl TopTerms {
    pub fn new(k: usize) -> Self {
        TopTerms {
            k,
            heap: BinaryHeap::with_capacity(k.saturating_add(1).min(1024)),
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offer a candidate. Once full, a candidate only gets in when it beats
    /// the current worst entry.
    pub fn offer<S: Into<String>>(&mut self, term: S, score: f64) {
        if self.k == 0 {
            return;
        }

        let candidate = HeapEntry(ScoredTerm::new(term, score));
        if self.heap.len() < self.k {
            self.heap.push(candidate);
        } else if let Some(worst) = self.heap.peek() {
            if candidate < *worst {
                self.heap.pop();
                self.heap.push(candidate);
            }
        }
    }

    /// Lowest retained score, once the collection is full.
    pub fn threshold(&self) -> Option<f64> {
        if self.heap.len() < self.k {
            None
        } else {
            self.heap.peek().map(|entry| entry.0.score)
        }
    }

    /// Retained terms, best first.
    pub fn into_sorted(self) -> Vec<ScoredTerm> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|entry| entry.0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(top: TopTerms) -> Vec<String> {
        top.into_sorted().into_iter().map(|t| t.term).collect()
    }

    #[test]
    fn test_keeps_best_k() {
        let mut top = TopTerms::new(3);
        for (term, score) in [("a", 0.5), ("b", 0.1), ("c", 0.9), ("d", 0.3), ("e", 0.7)] {
            top.offer(term, score);
        }

        assert_eq!(top.len(), 3);
        assert_eq!(top.threshold(), Some(0.5));
        assert_eq!(terms(top), vec!["c", "e", "a"]);
    }

    #[test]
    fn test_fewer_candidates_than_k() {
        let mut top = TopTerms::new(10);
        top.offer("x", 1.0);
        top.offer("y", 2.0);

        assert_eq!(top.threshold(), None);
        assert_eq!(terms(top), vec!["y", "x"]);
    }

    #[test]
    fn test_ties_keep_first_inserted_in_sorted_order() {
        let mut top = TopTerms::new(2);
        for term in ["apple", "banana", "cherry"] {
            top.offer(term, 1.0);
        }
        assert_eq!(terms(top), vec!["apple", "banana"]);

        let mut top = TopTerms::new(2);
        for term in ["cherry", "banana", "apple"] {
            top.offer(term, 1.0);
        }
        assert_eq!(terms(top), vec!["apple", "banana"]);
    }

    #[test]
    fn test_zero_k() {
        let mut top = TopTerms::new(0);
        top.offer("x", 1.0);
        assert!(top.is_empty());
    }
}
