//! Error types for the text metrics engine.
//!
//! The counting, estimating and transforming functions are total and never
//! fail. Errors only arise at the edges: loading configuration, parsing a
//! case mode name, and reading input in the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for text metrics operations.
#[derive(Error, Debug)]
pub enum TextMetricsError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A case mode name that is not one of upper, lower, title, sentence.
    #[error("Unknown case mode: {0}")]
    UnknownCaseMode(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
}

/// Result type alias for text metrics operations.
pub type Result<T> = std::result::Result<T, TextMetricsError>;

impl From<serde_json::Error> for TextMetricsError {
    fn from(err: serde_json::Error) -> Self {
        TextMetricsError::Serialization(err.to_string())
    }
}
