//! Keyword frequency analysis.
//!
//! Tokens are tallied in order of first occurrence and then stably sorted by
//! descending count, so keywords with equal counts keep the order in which
//! they first appeared. Replacing the stable sort with an unstable one would
//! change the output for ties.

use crate::config::KeywordConfig;
use crate::text::{is_whitespace, Tokenizer};
use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A keyword and the number of times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// The lowercase keyword.
    pub word: String,
    /// Occurrence count.
    pub count: usize,
}

impl Keyword {
    /// Creates a new keyword entry.
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.count)
    }
}

/// Extracts the most frequent keywords from text.
#[derive(Debug, Clone)]
pub struct KeywordAnalyzer {
    tokenizer: Tokenizer,
    limit: usize,
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new(KeywordConfig::default())
    }
}

impl KeywordAnalyzer {
    /// Creates an analyzer with the given configuration.
    pub fn new(config: KeywordConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            limit: config.limit,
        }
    }

    /// Maximum number of keywords returned by [`analyze`](Self::analyze).
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns every keyword candidate with its count, in order of first
    /// occurrence.
    pub fn tally(&self, text: &str) -> Vec<Keyword> {
        let mut positions: FxHashMap<String, usize> = FxHashMap::default();
        let mut entries: Vec<Keyword> = Vec::new();

        for token in self.tokenizer.tokenize(text) {
            match positions.get(&token.text) {
                Some(&pos) => entries[pos].count += 1,
                None => {
                    positions.insert(token.text.clone(), entries.len());
                    entries.push(Keyword::new(token.text, 1));
                }
            }
        }

        entries
    }

    /// Returns the top keywords by descending count.
    pub fn analyze(&self, text: &str) -> Vec<Keyword> {
        if text.trim_matches(is_whitespace).is_empty() {
            return Vec::new();
        }

        let mut entries = self.tally(text);
        debug!("Tallied {} distinct keyword candidates", entries.len());

        // `sort_by` is stable
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(self.limit);
        entries
    }
}

/// Returns up to five keywords by descending count.
///
/// Stop words and tokens shorter than three characters are excluded.
pub fn top_keywords(text: &str) -> Vec<Keyword> {
    KeywordAnalyzer::default().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(top_keywords("").is_empty());
        assert!(top_keywords("  \n\t ").is_empty());
        assert!(top_keywords("\u{FEFF} ").is_empty());
    }

    #[test]
    fn test_only_filtered_tokens() {
        assert!(top_keywords("the and of a to in").is_empty());
        assert!(top_keywords("?! ... ,,,").is_empty());
    }

    #[test]
    fn test_cat_sat_on_the_mat() {
        let keywords = top_keywords("the cat sat on the mat the cat ran");
        assert_eq!(
            keywords,
            vec![
                Keyword::new("cat", 2),
                Keyword::new("sat", 1),
                Keyword::new("mat", 1),
                Keyword::new("ran", 1),
            ]
        );
    }

    #[test]
    fn test_truncates_to_five() {
        let keywords = top_keywords("alpha bravo charlie delta echo foxtrot golf");
        assert_eq!(keywords.len(), 5);
        assert_eq!(keywords[0].word, "alpha");
        assert_eq!(keywords[4].word, "echo");
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let keywords = top_keywords("zebra apple mango apple zebra kiwi mango");
        let words: Vec<&str> = keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, ["zebra", "apple", "mango", "kiwi"]);
        assert_eq!(keywords[0].count, 2);
        assert_eq!(keywords[3].count, 1);
    }

    #[test]
    fn test_case_insensitive_tally() {
        let keywords = top_keywords("Rust rust RUST! Go go");
        assert_eq!(keywords, vec![Keyword::new("rust", 3)]);
    }

    #[test]
    fn test_context_sensitive_lowercasing() {
        assert_eq!(top_keywords("ΟΔΟΣ'Α"), vec![Keyword::new("οδοσ", 1)]);
        assert_eq!(top_keywords("ΟΔΟΣ ΟΔΟΣ."), vec![Keyword::new("οδος", 2)]);
    }

    #[test]
    fn test_descending_order() {
        let keywords = top_keywords("one two two three three three four four four four");
        let counts: Vec<usize> = keywords.iter().map(|k| k.count).collect();
        assert_eq!(counts, [4, 3, 2, 1]);
        assert_eq!(keywords[0].word, "four");
    }

    #[test]
    fn test_tally_keeps_all_candidates() {
        let analyzer = KeywordAnalyzer::default();
        let tally = analyzer.tally("alpha bravo charlie delta echo foxtrot alpha");
        assert_eq!(tally.len(), 6);
        assert_eq!(tally[0], Keyword::new("alpha", 2));
    }

    #[test]
    fn test_custom_limit() {
        let analyzer = KeywordAnalyzer::new(KeywordConfig { limit: 2 });
        let keywords = analyzer.analyze("alpha bravo charlie bravo");
        assert_eq!(analyzer.limit(), 2);
        assert_eq!(keywords, vec![Keyword::new("bravo", 2), Keyword::new("alpha", 1)]);
    }

    #[test]
    fn test_keyword_display() {
        assert_eq!(Keyword::new("cat", 2).to_string(), "cat (2)");
    }
}
