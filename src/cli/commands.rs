//! Command implementations for the newsclass CLI.

use std::time::Instant;

use log::info;

use crate::analysis::Analyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::NewsclassConfig;
use crate::corpus::{CorpusLoader, DocumentStore, IngestStats, ReutersLoader};
use crate::error::{NewsclassError, Result};

/// Exit status for a failed run whose input was unusable.
pub const EXIT_FAILURE: i32 = 1;

/// Exit status for a topic set, training set or setting the model cannot be built from.
pub const EXIT_CONFIGURATION: i32 = 2;

/// Execute a CLI command.
pub fn execute_command(args: NewsclassArgs) -> Result<()> {
    match &args.command {
        Command::Evaluate(evaluate_args) => evaluate(evaluate_args, &args),
        Command::Features(features_args) => list_features(features_args, &args),
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args, &args),
    }
}

/// The process exit status for a failed command.
pub fn exit_code(error: &NewsclassError) -> i32 {
    if error.is_configuration_error() {
        EXIT_CONFIGURATION
    } else {
        EXIT_FAILURE
    }
}

/// Load, label and analyze the corpus.
fn load_corpus(options: &CorpusOptions, config: &NewsclassConfig) -> Result<(DocumentStore, IngestStats)> {
    let analyzer = config.analyzer()?;
    let loader = ReutersLoader::new()?;

    info!("reading corpus from {}", options.corpus.display());
    let stories = loader.load(&options.corpus)?;

    DocumentStore::ingest(&stories, &config.topics, &analyzer)
}

/// Run both passes and report them.
fn evaluate(args: &EvaluateArgs, cli_args: &NewsclassArgs) -> Result<()> {
    let start_time = Instant::now();
    let config = args.corpus.config()?;

    let (store, ingest) = load_corpus(&args.corpus, &config)?;
    let outcome = config.pipeline().run(&store)?;

    let result = EvaluationResult::new(ingest, outcome, start_time.elapsed().as_millis() as u64);
    output_result("Evaluation finished", &result, cli_args)
}

/// Show the terms kept per topic.
fn list_features(args: &FeaturesArgs, cli_args: &NewsclassArgs) -> Result<()> {
    let config = args.corpus.config()?;

    let (store, ingest) = load_corpus(&args.corpus, &config)?;
    let selection = config.pipeline().select_only(&store)?;
    let reduced_vocabulary_size = selection.vocabulary().len();

    let mut topics = selection.topics;
    if let Some(top) = args.top {
        for features in &mut topics {
            features.terms.truncate(top);
        }
    }

    let result = FeaturesResult {
        ingest,
        features_per_topic: selection.features_per_topic,
        reduced_vocabulary_size,
        topics,
    };
    output_result("Selected features", &result, cli_args)
}

/// Print the analyzed terms of a text.
fn tokenize(args: &TokenizeArgs, cli_args: &NewsclassArgs) -> Result<()> {
    let config = args.analysis.config()?;
    config.validate()?;
    let analyzer = config.analyzer()?;

    let result = TokenizeResult {
        text: args.text.clone(),
        analyzer: analyzer.name().to_string(),
        terms: analyzer.terms(&args.text)?,
    };
    output_result("Terms", &result, cli_args)
}
