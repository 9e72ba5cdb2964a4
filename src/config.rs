//! Run configuration.
//!
//! A [`NewsclassConfig`] can be loaded from a JSON file; every field is
//! optional and falls back to its default:
//!
//! ```json
//! {
//!   "topics": ["earn", "acq", "money-fx", "grain", "crude"],
//!   "features_per_topic": 50,
//!   "min_token_length": 2,
//!   "stemmer": "porter",
//!   "stop_words": { "file": "stopwords.txt" }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::length::DEFAULT_MIN_TOKEN_LENGTH;
use crate::analysis::{IdentityStemmer, NewsAnalyzer, PorterStemmer, StopWords, Stemmer};
use crate::corpus::TopicSet;
use crate::error::{NewsclassError, Result};
use crate::pipeline::Pipeline;
use crate::selection::DEFAULT_FEATURES_PER_TOPIC;

/// Which stemmer the analyzer uses.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    /// Porter (1980) suffix stripping
    #[default]
    Porter,
    /// Keep tokens as they are
    Identity,
}

impl StemmerKind {
    pub fn build(&self) -> Arc<dyn Stemmer> {
        match self {
            StemmerKind::Porter => Arc::new(PorterStemmer::new()),
            StemmerKind::Identity => Arc::new(IdentityStemmer::new()),
        }
    }
}

/// Where stop words come from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWordSource {
    /// No stop word removal.
    #[default]
    None,
    /// The built-in English list.
    English,
    /// One word per line.
    File(PathBuf),
}

impl StopWordSource {
    pub fn load(&self) -> Result<StopWords> {
        match self {
            StopWordSource::None => Ok(StopWords::none()),
            StopWordSource::English => Ok(StopWords::english()),
            StopWordSource::File(path) => StopWords::load(path),
        }
    }
}

/// Configuration of a classification run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsclassConfig {
    /// Topic enumeration; its order breaks score ties.
    pub topics: TopicSet,
    /// Terms kept per topic by feature selection.
    pub features_per_topic: usize,
    /// Shortest token kept, in characters.
    pub min_token_length: usize,
    pub stemmer: StemmerKind,
    pub stop_words: StopWordSource,
}

impl Default for NewsclassConfig {
    fn default() -> Self {
        NewsclassConfig {
            topics: TopicSet::reuters(),
            features_per_topic: DEFAULT_FEATURES_PER_TOPIC,
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            stemmer: StemmerKind::default(),
            stop_words: StopWordSource::default(),
        }
    }
}

impl NewsclassConfig {
    /// Read a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: NewsclassConfig = serde_json::from_str(&content)?;
        config.validate()?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.topics.is_empty() {
            return Err(NewsclassError::config("at least one topic is required"));
        }
        if self.features_per_topic == 0 {
            return Err(NewsclassError::config(
                "features_per_topic must be positive",
            ));
        }
        if self.min_token_length == 0 {
            return Err(NewsclassError::config("min_token_length must be at least 1"));
        }
        Ok(())
    }

    /// The analyzer described by this configuration. Loads stop words.
    pub fn analyzer(&self) -> Result<NewsAnalyzer> {
        NewsAnalyzer::builder()
            .stop_words(self.stop_words.load()?)
            .stemmer(self.stemmer.build())
            .min_token_length(self.min_token_length)
            .build()
    }

    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.topics.clone(), self.features_per_topic)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::analysis::Analyzer;

    #[test]
    fn test_defaults() {
        let config = NewsclassConfig::default();

        assert_eq!(config.topics.len(), 5);
        assert_eq!(config.features_per_topic, 50);
        assert_eq!(config.min_token_length, 2);
        assert_eq!(config.stemmer, StemmerKind::Porter);
        assert_eq!(config.stop_words, StopWordSource::None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config: NewsclassConfig =
            serde_json::from_str(r#"{"topics": ["grain", "crude"], "stemmer": "identity", "stop_words": "english"}"#)
                .unwrap();

        assert_eq!(config.topics.len(), 2);
        assert_eq!(config.features_per_topic, 50);
        assert_eq!(config.stemmer, StemmerKind::Identity);

        let analyzer = config.analyzer().unwrap();
        assert_eq!(analyzer.terms("The shipments").unwrap(), vec!["shipments"]);
    }

    #[test]
    fn test_from_file() {
        let mut stop_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(stop_file, "wheat").unwrap();

        let mut config_file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::json!({
            "features_per_topic": 10,
            "stop_words": { "file": stop_file.path() },
        });
        write!(config_file, "{json}").unwrap();

        let config = NewsclassConfig::from_file(config_file.path()).unwrap();
        assert_eq!(config.features_per_topic, 10);

        let analyzer = config.analyzer().unwrap();
        assert_eq!(analyzer.terms("wheat exports").unwrap(), vec!["export"]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"features_per_topic": 0}}"#).unwrap();

        let err = NewsclassConfig::from_file(file.path()).unwrap_err();
        assert!(err.is_configuration_error());

        assert!(serde_json::from_str::<NewsclassConfig>(r#"{"topics": []}"#).is_err());
    }
}
