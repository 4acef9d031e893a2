//! # Textmetrics - Text Metrics Engine
//!
//! Textmetrics computes counts, time estimates and keyword frequencies for a
//! single string, and applies whole-text case transforms.
//!
//! ## Overview
//!
//! Every function is pure and synchronous: the same input always produces the
//! same output, nothing is retained between calls, and independent calls may
//! run on any thread without coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use textmetrics::{calculate_reading_time, count_words, top_keywords, TextMetrics};
//!
//! let text = "The cat sat on the mat. The cat ran!";
//!
//! let words = count_words(text);
//! assert_eq!(words, 9);
//! assert_eq!(calculate_reading_time(words), "1 min read");
//!
//! let keywords = top_keywords(text);
//! assert_eq!(keywords[0].word, "cat");
//! assert_eq!(keywords[0].count, 2);
//!
//! let metrics = TextMetrics::compute(text);
//! assert_eq!(metrics.sentences, 2);
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Counters, keyword tokenization and analysis, case transforms
//! - [`estimate`] - Reading and speaking time
//! - [`metrics`] - Aggregate snapshot of every metric
//! - [`config`] - Rates and limits, loadable from JSON
//!
//! ## Counting Units
//!
//! Characters are counted as Unicode scalar values, not grapheme clusters.
//! Words are whitespace-delimited runs; scripts written without spaces count
//! one word per unbroken run.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod estimate;
pub mod metrics;
pub mod text;

// Re-export commonly used types
pub use config::{Config, EstimateConfig, KeywordConfig};
pub use error::{Result, TextMetricsError};
pub use estimate::{calculate_reading_time, calculate_speaking_time, EstimateKind, TimeEstimate};
pub use metrics::TextMetrics;
pub use text::{
    count_characters_with_spaces, count_characters_without_spaces, count_lines, count_sentences,
    count_words, top_keywords, transform_case, CaseMode, Keyword, KeywordAnalyzer, Normalizer,
    Token, Tokenizer,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default silent reading speed in words per minute.
pub const READING_WORDS_PER_MINUTE: usize = 200;

/// Default speaking speed in words per minute.
pub const SPEAKING_WORDS_PER_MINUTE: usize = 130;

/// Default number of keywords reported.
pub const DEFAULT_KEYWORD_LIMIT: usize = 5;
