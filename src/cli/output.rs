//! Output formatting for CLI commands.

use std::fmt;

use serde::Serialize;

use crate::cli::args::{NewsclassArgs, OutputFormat};
use crate::corpus::IngestStats;
use crate::error::Result;
use crate::evaluation::Report;
use crate::pipeline::{PassOutcome, TwoPassOutcome};
use crate::selection::TopicFeatures;

/// A command result that can also be printed for people.
pub trait HumanReadable: Serialize {
    fn to_human(&self) -> String;
}

/// Result structure for the two-pass evaluation.
#[derive(Debug, Serialize)]
pub struct EvaluationResult {
    pub ingest: IngestStats,
    pub full: PassOutcome,
    pub reduced: PassOutcome,
    pub features_per_topic: usize,
    pub duration_ms: u64,
}

impl EvaluationResult {
    pub fn new(ingest: IngestStats, outcome: TwoPassOutcome, duration_ms: u64) -> Self {
        EvaluationResult {
            ingest,
            features_per_topic: outcome.selection.features_per_topic,
            full: outcome.full,
            reduced: outcome.reduced,
            duration_ms,
        }
    }
}

/// Result structure for feature listing.
#[derive(Debug, Serialize)]
pub struct FeaturesResult {
    pub ingest: IngestStats,
    pub features_per_topic: usize,
    pub reduced_vocabulary_size: usize,
    pub topics: Vec<TopicFeatures>,
}

/// Result structure for tokenization.
#[derive(Debug, Serialize)]
pub struct TokenizeResult {
    pub text: String,
    pub analyzer: String,
    pub terms: Vec<String>,
}

/// The ingestion summary line shared by the corpus commands.
fn ingest_line(ingest: &IngestStats) -> String {
    format!(
        "Documents: {} read, {} TRAIN, {} TEST, {} unlabeled, {} other split",
        ingest.read, ingest.train, ingest.test, ingest.unlabeled, ingest.other_split
    )
}

fn fmt_pass(f: &mut fmt::Formatter<'_>, title: &str, pass: &PassOutcome) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "─".repeat(title.chars().count()))?;
    writeln!(
        f,
        "Vocabulary: {} terms, {} training documents",
        pass.vocabulary_size, pass.training_documents
    )?;
    writeln!(f, "{}", pass.report)
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", ingest_line(&self.ingest))?;
        fmt_pass(f, "Pass 1: full vocabulary", &self.full)?;
        fmt_pass(
            f,
            &format!(
                "Pass 2: {} features per topic (mutual information)",
                self.features_per_topic
            ),
            &self.reduced,
        )?;
        writeln!(f)?;
        write!(f, "Total time: {}ms", self.duration_ms)
    }
}

impl fmt::Display for FeaturesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", ingest_line(&self.ingest))?;
        write!(
            f,
            "Reduced vocabulary: {} terms ({} per topic)",
            self.reduced_vocabulary_size, self.features_per_topic
        )?;

        for features in &self.topics {
            write!(f, "\n\n{}:", features.topic)?;
            for (rank, scored) in features.terms.iter().enumerate() {
                write!(f, "\n  {:>3}. {:<20} {:.6}", rank + 1, scored.term, scored.score)?;
            }
        }
        Ok(())
    }
}

impl HumanReadable for EvaluationResult {
    fn to_human(&self) -> String {
        self.to_string()
    }
}

impl HumanReadable for FeaturesResult {
    fn to_human(&self) -> String {
        self.to_string()
    }
}

impl HumanReadable for TokenizeResult {
    fn to_human(&self) -> String {
        self.terms.join(" ")
    }
}

impl HumanReadable for Report {
    fn to_human(&self) -> String {
        self.to_string()
    }
}

/// Output a result in the specified format.
pub fn output_result<T: HumanReadable>(message: &str, result: &T, args: &NewsclassArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanReadable>(message: &str, result: &T, args: &NewsclassArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    println!("{}", result.to_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &NewsclassArgs) -> Result<()> {
    println!("{}", to_json(result, args.pretty)?);
    Ok(())
}

fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Topic, TopicSet};
    use crate::selection::ScoredTerm;

    #[test]
    fn test_tokenize_human() {
        let result = TokenizeResult {
            text: "Oil prices".to_string(),
            analyzer: "news".to_string(),
            terms: vec!["oil".to_string(), "price".to_string()],
        };
        assert_eq!(result.to_human(), "oil price");

        let json = to_json(&result, false).unwrap();
        assert!(json.contains(r#""terms":["oil","price"]"#));
    }

    #[test]
    fn test_features_human() {
        let result = FeaturesResult {
            ingest: IngestStats::default(),
            features_per_topic: 1,
            reduced_vocabulary_size: 1,
            topics: vec![TopicFeatures {
                topic: Topic::new("crude"),
                terms: vec![ScoredTerm::new("oil", 0.25)],
            }],
        };

        let text = result.to_human();
        assert!(text.contains("crude:"));
        assert!(text.contains("oil"));
        assert!(text.contains("0.250000"));
    }

    #[test]
    fn test_features_human_layout() {
        let result = FeaturesResult {
            ingest: IngestStats::default(),
            features_per_topic: 2,
            reduced_vocabulary_size: 2,
            topics: vec![TopicFeatures {
                topic: Topic::new("grain"),
                terms: vec![ScoredTerm::new("wheat", 0.5), ScoredTerm::new("corn", 0.125)],
            }],
        };

        let text = result.to_human();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "Reduced vocabulary: 2 terms (2 per topic)");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "grain:");
        assert!(lines[4].starts_with("    1. wheat"));
        assert!(lines[5].starts_with("    2. corn"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_report_human() {
        let topics = TopicSet::new(["grain"]).unwrap();
        let grain = Topic::new("grain");
        let report = Report::from_predictions(&topics, vec![(&grain, &grain)]);

        assert!(report.to_human().starts_with("Accuracy: 1.0000 (1/1)"));
    }
}
