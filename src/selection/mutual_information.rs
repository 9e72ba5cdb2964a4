//! Mutual information of a term and a topic over a 2×2 document table.
//!
//! ```text
//!                 in topic   other topics
//! has term            a           b
//! lacks term          c           d
//! ```
//!
//! `a` and `b` are raised to at least 1. `c` and `d` are derived from the
//! raised values and never go below 0. A cell of 0 contributes 0.

use serde::{Deserialize, Serialize};

/// Document counts of one (term, topic) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContingencyTable {
    pub a: u64,
    pub b: u64,
    pub c: u64,
    pub d: u64,
}

impl ContingencyTable {
    /// Build a smoothed table.
    ///
    /// * `with_term_in_topic` - topic documents containing the term
    /// * `with_term_elsewhere` - documents of other topics containing the term
    /// * `topic_documents` - all documents of the topic
    /// * `other_documents` - all documents of other topics
    pub fn new(
        with_term_in_topic: u64,
        with_term_elsewhere: u64,
        topic_documents: u64,
        other_documents: u64,
    ) -> Self {
        let a = with_term_in_topic.max(1);
        let b = with_term_elsewhere.max(1);
        ContingencyTable {
            a,
            b,
            c: topic_documents.saturating_sub(a),
            d: other_documents.saturating_sub(b),
        }
    }

    pub fn total(&self) -> u64 {
        self.a + self.b + self.c + self.d
    }

    /// The mutual information in nats, always >= 0 up to rounding.
    pub fn mutual_information(&self) -> f64 {
        let n = self.total() as f64;
        let (a, b, c, d) = (self.a as f64, self.b as f64, self.c as f64, self.d as f64);

        cell(a, n, a + b, a + c)
            + cell(b, n, a + b, b + d)
            + cell(c, n, c + d, a + c)
            + cell(d, n, c + d, b + d)
    }
}

fn cell(count: f64, n: f64, row: f64, column: f64) -> f64 {
    if count == 0.0 {
        return 0.0;
    }
    (count / n) * ((count * n) / (row * column)).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothing() {
        let table = ContingencyTable::new(0, 0, 5, 7);
        assert_eq!(table, ContingencyTable { a: 1, b: 1, c: 4, d: 6 });
        assert_eq!(table.total(), 12);

        let table = ContingencyTable::new(3, 0, 3, 0);
        assert_eq!(table, ContingencyTable { a: 3, b: 1, c: 0, d: 0 });
    }

    #[test]
    fn test_term_everywhere_is_uninformative() {
        let table = ContingencyTable::new(10, 30, 10, 30);
        assert!(table.mutual_information().abs() < 1e-12);
    }

    #[test]
    fn test_exclusive_term_scores_highest() {
        let exclusive = ContingencyTable::new(10, 0, 10, 30).mutual_information();
        let common = ContingencyTable::new(5, 15, 10, 30).mutual_information();
        let rare = ContingencyTable::new(1, 1, 10, 30).mutual_information();

        assert!(exclusive > common);
        assert!(exclusive > rare);
        assert!(common.abs() < 1e-12);
    }

    #[test]
    fn test_known_value() {
        // a = b = c = d = 1: independent, MI = 0
        let table = ContingencyTable::new(1, 1, 2, 2);
        assert!(table.mutual_information().abs() < 1e-12);

        // a=2, b=1, c=0, d=1
        let table = ContingencyTable::new(2, 1, 2, 2);
        let expected = (2.0 / 4.0) * ((2.0 * 4.0) / (3.0 * 2.0f64)).ln()
            + (1.0 / 4.0) * ((1.0 * 4.0) / (3.0 * 2.0f64)).ln()
            + (1.0 / 4.0) * ((1.0 * 4.0) / (1.0 * 2.0f64)).ln();
        assert!((table.mutual_information() - expected).abs() < 1e-12);
    }
}
