//! Token normalization for keyword analysis.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Common English function words excluded from keyword results.
pub const STOP_WORDS: [&str; 26] = [
    "the", "and", "to", "of", "a", "in", "is", "that", "for", "it", "as", "was", "with", "on",
    "at", "by", "an", "be", "this", "which", "or", "but", "not", "are", "from", "they",
];

/// Tokens shorter than this many characters are never keywords.
pub const MIN_TOKEN_LENGTH: usize = 3;

static STOP_WORD_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Returns `true` if `word` (already lowercase) is a stop word.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Filters out stop words and short tokens.
///
/// Tokens are expected to be lowercase already; the tokenizer lower-cases the
/// whole text before splitting it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Creates a new normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` if a lowercase token is a keyword candidate.
    pub fn accepts(&self, token: &str) -> bool {
        !is_stop_word(token) && token.chars().count() >= MIN_TOKEN_LENGTH
    }
}
