//! Reading and speaking time estimates.
//!
//! Estimates take a precomputed word count rather than text, so callers count
//! words once and feed both estimators. Minutes are rounded up: a single word
//! is a one-minute read, and zero words is zero minutes.

use crate::config::EstimateConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of time an estimate measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimateKind {
    /// Silent reading.
    Reading,
    /// Reading aloud.
    Speaking,
}

impl EstimateKind {
    fn suffix(&self) -> &'static str {
        match self {
            EstimateKind::Reading => "read",
            EstimateKind::Speaking => "speech",
        }
    }
}

/// A whole-minute time estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEstimate {
    /// Estimated minutes, rounded up.
    pub minutes: usize,
    /// Reading or speaking.
    pub kind: EstimateKind,
}

impl TimeEstimate {
    /// Estimates time for `word_count` words at `words_per_minute`.
    pub fn new(word_count: usize, words_per_minute: usize, kind: EstimateKind) -> Self {
        Self {
            minutes: minutes_for(word_count, words_per_minute),
            kind,
        }
    }

    /// Reading time using the rate in `config`.
    pub fn reading(word_count: usize, config: &EstimateConfig) -> Self {
        Self::new(word_count, config.reading_words_per_minute, EstimateKind::Reading)
    }

    /// Speaking time using the rate in `config`.
    pub fn speaking(word_count: usize, config: &EstimateConfig) -> Self {
        Self::new(word_count, config.speaking_words_per_minute, EstimateKind::Speaking)
    }
}

impl fmt::Display for TimeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min {}", self.minutes, self.kind.suffix())
    }
}

/// Whole minutes needed for `word_count` words, rounded up.
///
/// A zero rate yields zero minutes.
#[inline]
pub fn minutes_for(word_count: usize, words_per_minute: usize) -> usize {
    if words_per_minute == 0 {
        return 0;
    }
    word_count.div_ceil(words_per_minute)
}

/// Reading time at 200 words per minute, formatted as `"<N> min read"`.
pub fn calculate_reading_time(word_count: usize) -> String {
    TimeEstimate::reading(word_count, &EstimateConfig::default()).to_string()
}

/// Speaking time at 130 words per minute, formatted as `"<N> min speech"`.
pub fn calculate_speaking_time(word_count: usize) -> String {
    TimeEstimate::speaking(word_count, &EstimateConfig::default()).to_string()
}
