//! Evaluation of a model on labeled TEST documents.
//!
//! Precision, recall, F1 and accuracy are `None` when their denominator is
//! zero. They are never coerced to 0 or 1.

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::classifier::Model;
use crate::corpus::{DocumentStore, Split, Topic, TopicSet};

/// Counts and metrics of one topic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopicMetrics {
    pub topic: Topic,
    /// Documents of this topic predicted as this topic.
    pub true_positives: usize,
    /// Documents predicted as this topic.
    pub predicted: usize,
    /// Documents whose label is this topic.
    pub actual: usize,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
}

impl TopicMetrics {
    fn new(topic: Topic, true_positives: usize, predicted: usize, actual: usize) -> Self {
        let precision = ratio(true_positives, predicted);
        let recall = ratio(true_positives, actual);
        let f1 = match (precision, recall) {
            (Some(p), Some(r)) if p + r > 0.0 => Some(2.0 * p * r / (p + r)),
            _ => None,
        };

        TopicMetrics {
            topic,
            true_positives,
            predicted,
            actual,
            precision,
            recall,
            f1,
        }
    }
}

/// Outcome of classifying every labeled TEST document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub total: usize,
    pub correct: usize,
    pub accuracy: Option<f64>,
    /// One entry per topic, in enumeration order.
    pub topics: Vec<TopicMetrics>,
    /// Mean over the topics whose value is defined.
    pub macro_precision: Option<f64>,
    pub macro_recall: Option<f64>,
    pub macro_f1: Option<f64>,
}

impl Report {
    /// Classify the labeled TEST documents of `store` with `model`.
    ///
    /// Documents labeled with a topic the model does not know are skipped.
    pub fn evaluate(store: &DocumentStore, model: &Model) -> Report {
        let predictions = store.labeled(Split::Test).filter_map(|doc| {
            let actual = doc.label.as_ref()?;
            if !model.topics().contains(actual.as_str()) {
                return None;
            }
            Some((actual, model.classify(doc)))
        });

        Report::from_predictions(model.topics(), predictions)
    }

    /// Build a report from `(actual, predicted)` pairs.
    ///
    /// Pairs naming a topic outside `topics` are ignored.
    pub fn from_predictions<'a, I>(topics: &TopicSet, predictions: I) -> Report
    where
        I: IntoIterator<Item = (&'a Topic, &'a Topic)>,
    {
        let mut true_positives = vec![0usize; topics.len()];
        let mut predicted = vec![0usize; topics.len()];
        let mut actual = vec![0usize; topics.len()];
        let mut total = 0;
        let mut correct = 0;

        for (truth, guess) in predictions {
            let (Some(t), Some(g)) = (
                topics.index_of(truth.as_str()),
                topics.index_of(guess.as_str()),
            ) else {
                continue;
            };

            total += 1;
            actual[t] += 1;
            predicted[g] += 1;
            if t == g {
                correct += 1;
                true_positives[t] += 1;
            }
        }

        let metrics: Vec<TopicMetrics> = topics
            .iter()
            .enumerate()
            .map(|(i, topic)| {
                TopicMetrics::new(topic.clone(), true_positives[i], predicted[i], actual[i])
            })
            .collect();

        for m in &metrics {
            if m.precision.is_none() {
                warn!("precision of topic {} is undefined: never predicted", m.topic);
            }
            if m.recall.is_none() {
                warn!("recall of topic {} is undefined: no test documents", m.topic);
            }
        }

        Report {
            total,
            correct,
            accuracy: ratio(correct, total),
            macro_precision: mean(metrics.iter().filter_map(|m| m.precision)),
            macro_recall: mean(metrics.iter().filter_map(|m| m.recall)),
            macro_f1: mean(metrics.iter().filter_map(|m| m.f1)),
            topics: metrics,
        }
    }

    pub fn metrics_for(&self, topic: &str) -> Option<&TopicMetrics> {
        self.topics.iter().find(|m| m.topic.as_str() == topic)
    }
}

fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

fn mean<I: Iterator<Item = f64>>(values: I) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

struct Metric(Option<f64>);

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value:.4}"),
            None => f.write_str("undefined"),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Accuracy: {} ({}/{})",
            Metric(self.accuracy),
            self.correct,
            self.total
        )?;
        writeln!(
            f,
            "{:<12} {:>10} {:>10} {:>10} {:>6} {:>9} {:>6}",
            "topic", "precision", "recall", "f1", "tp", "predicted", "actual"
        )?;
        for m in &self.topics {
            writeln!(
                f,
                "{:<12} {:>10} {:>10} {:>10} {:>6} {:>9} {:>6}",
                m.topic.as_str(),
                Metric(m.precision).to_string(),
                Metric(m.recall).to_string(),
                Metric(m.f1).to_string(),
                m.true_positives,
                m.predicted,
                m.actual
            )?;
        }
        write!(
            f,
            "{:<12} {:>10} {:>10} {:>10}",
            "macro",
            Metric(self.macro_precision).to_string(),
            Metric(self.macro_recall).to_string(),
            Metric(self.macro_f1).to_string()
        )
    }
}
