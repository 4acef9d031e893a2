//! Aggregate metrics snapshot.

use crate::config::Config;
use crate::estimate::TimeEstimate;
use crate::text::{
    count_characters_with_spaces, count_characters_without_spaces, count_lines,
    count_sentences, count_words, Keyword, KeywordAnalyzer,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every metric for one text, computed from scratch.
///
/// Nothing is cached between snapshots; callers that recompute on every edit
/// may memoize on the input themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Characters including whitespace.
    pub characters_with_spaces: usize,
    /// Characters excluding whitespace.
    pub characters_without_spaces: usize,
    /// Whitespace-delimited words.
    pub words: usize,
    /// Terminated sentences.
    pub sentences: usize,
    /// Lines.
    pub lines: usize,
    /// Reading time, e.g. `"2 min read"`.
    pub reading_time: String,
    /// Speaking time, e.g. `"3 min speech"`.
    pub speaking_time: String,
    /// Most frequent keywords.
    pub top_keywords: Vec<Keyword>,
}

impl TextMetrics {
    /// Computes metrics with the default configuration.
    pub fn compute(text: &str) -> Self {
        Self::with_config(text, &Config::default())
    }

    /// Computes metrics with the given configuration.
    pub fn with_config(text: &str, config: &Config) -> Self {
        let words = count_words(text);
        let analyzer = KeywordAnalyzer::new(config.keywords.clone());

        Self {
            characters_with_spaces: count_characters_with_spaces(text),
            characters_without_spaces: count_characters_without_spaces(text),
            words,
            sentences: count_sentences(text),
            lines: count_lines(text),
            reading_time: TimeEstimate::reading(words, &config.estimate).to_string(),
            speaking_time: TimeEstimate::speaking(words, &config.estimate).to_string(),
            top_keywords: analyzer.analyze(text),
        }
    }
}

impl fmt::Display for TextMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Characters:            {}", self.characters_with_spaces)?;
        writeln!(f, "Characters (no space): {}", self.characters_without_spaces)?;
        writeln!(f, "Words:                 {}", self.words)?;
        writeln!(f, "Sentences:             {}", self.sentences)?;
        writeln!(f, "Lines:                 {}", self.lines)?;
        writeln!(f, "Reading time:          {}", self.reading_time)?;
        write!(f, "Speaking time:         {}", self.speaking_time)?;

        if !self.top_keywords.is_empty() {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "Top keywords:")?;
            for (i, keyword) in self.top_keywords.iter().enumerate() {
                write!(f, "\n  {}. {}", i + 1, keyword)?;
            }
        }
        Ok(())
    }
}
