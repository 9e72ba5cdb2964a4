//! Command line argument parsing for the newsclass CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{NewsclassConfig, StemmerKind, StopWordSource};
use crate::corpus::TopicSet;
use crate::error::Result;

/// newsclass - Naive Bayes topic classification of news stories
#[derive(Parser, Debug, Clone)]
#[command(name = "newsclass")]
#[command(about = "Naive Bayes topic classifier with mutual-information feature selection")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct NewsclassArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl NewsclassArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train on the full vocabulary, select features, retrain and report both passes
    Evaluate(EvaluateArgs),

    /// Show the terms kept per topic by mutual-information selection
    Features(FeaturesArgs),

    /// Print the terms a piece of text is analyzed into
    Tokenize(TokenizeArgs),
}

/// Options shared by every command that analyzes text.
#[derive(Args, Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Stop word file, one word per line
    #[arg(long, value_name = "STOP_WORDS_FILE", conflicts_with = "english_stop_words")]
    pub stop_words: Option<PathBuf>,

    /// Use the built-in English stop word list
    #[arg(long)]
    pub english_stop_words: bool,

    /// Stemmer applied to every token
    #[arg(long)]
    pub stemmer: Option<StemmerKind>,

    /// Shortest token kept, in characters
    #[arg(long)]
    pub min_token_length: Option<usize>,
}

impl AnalysisOptions {
    /// The configuration file (or the defaults) with command line overrides
    /// applied.
    pub fn config(&self) -> Result<NewsclassConfig> {
        let mut config = match &self.config {
            Some(path) => NewsclassConfig::from_file(path)?,
            None => NewsclassConfig::default(),
        };

        if let Some(path) = &self.stop_words {
            config.stop_words = StopWordSource::File(path.clone());
        } else if self.english_stop_words {
            config.stop_words = StopWordSource::English;
        }
        if let Some(stemmer) = self.stemmer {
            config.stemmer = stemmer;
        }
        if let Some(min_token_length) = self.min_token_length {
            config.min_token_length = min_token_length;
        }

        Ok(config)
    }
}

/// Corpus and model options.
#[derive(Args, Debug, Clone)]
pub struct CorpusOptions {
    /// Reuters-21578 directory (or a single .sgm file)
    #[arg(long, value_name = "CORPUS_PATH")]
    pub corpus: PathBuf,

    /// Comma-separated topic list; its order breaks ties
    #[arg(long, value_delimiter = ',')]
    pub topics: Option<Vec<String>>,

    /// Terms kept per topic by feature selection
    #[arg(short = 'k', long)]
    pub features_per_topic: Option<usize>,

    #[command(flatten)]
    pub analysis: AnalysisOptions,
}

impl CorpusOptions {
    /// The effective, validated configuration.
    pub fn config(&self) -> Result<NewsclassConfig> {
        let mut config = self.analysis.config()?;

        if let Some(topics) = &self.topics {
            config.topics = TopicSet::new(topics)?;
        }
        if let Some(k) = self.features_per_topic {
            config.features_per_topic = k;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for the two-pass evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub corpus: CorpusOptions,
}

/// Arguments for listing selected features
#[derive(Parser, Debug, Clone)]
pub struct FeaturesArgs {
    #[command(flatten)]
    pub corpus: CorpusOptions,

    /// Show at most this many terms per topic
    #[arg(long)]
    pub top: Option<usize>,
}

/// Arguments for tokenizing text
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub analysis: AnalysisOptions,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
