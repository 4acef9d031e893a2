//! Configuration for the text metrics engine.

use crate::error::{Result, TextMetricsError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration for the text metrics engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reading and speaking time configuration.
    pub estimate: EstimateConfig,

    /// Keyword frequency configuration.
    pub keywords: KeywordConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TextMetricsError::FileNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Checks that every rate and limit is usable.
    pub fn validate(&self) -> Result<()> {
        if self.estimate.reading_words_per_minute == 0 {
            return Err(TextMetricsError::Config(
                "reading_words_per_minute must be greater than zero".to_string(),
            ));
        }
        if self.estimate.speaking_words_per_minute == 0 {
            return Err(TextMetricsError::Config(
                "speaking_words_per_minute must be greater than zero".to_string(),
            ));
        }
        if self.keywords.limit == 0 {
            return Err(TextMetricsError::Config(
                "keyword limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Reading and speaking time configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    /// Silent reading speed.
    /// Default: 200 words per minute.
    pub reading_words_per_minute: usize,

    /// Speaking speed.
    /// Default: 130 words per minute.
    pub speaking_words_per_minute: usize,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            reading_words_per_minute: crate::READING_WORDS_PER_MINUTE,
            speaking_words_per_minute: crate::SPEAKING_WORDS_PER_MINUTE,
        }
    }
}

/// Keyword frequency configuration.
///
/// The stop-word list and the minimum token length are fixed and not part of
/// the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Maximum number of keywords reported.
    /// Default: 5.
    pub limit: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            limit: crate::DEFAULT_KEYWORD_LIMIT,
        }
    }
}
