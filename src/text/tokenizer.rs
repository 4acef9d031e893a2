//! Word-run tokenization for keyword analysis.

use crate::text::Normalizer;
use once_cell::sync::Lazy;
use regex::Regex;

/// A maximal run of word characters (Unicode letters, marks, digits, `_`).
static WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// A token with its position in the lower-cased text.
///
/// Offsets index the output of `str::to_lowercase` on the tokenized text,
/// which can differ in length from the input when lowercasing changes a
/// character's UTF-8 width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lowercase token text.
    pub text: String,
    /// Start position in the lower-cased text (byte offset).
    pub start: usize,
    /// End position in the lower-cased text (byte offset).
    pub end: usize,
    /// Token index in the sequence.
    pub index: usize,
}

impl Token {
    /// Creates a new token.
    pub fn new(text: String, start: usize, end: usize, index: usize) -> Self {
        Self {
            text,
            start,
            end,
            index,
        }
    }
}

/// Tokenizer that extracts keyword candidates with position information.
///
/// Punctuation and whitespace only separate tokens; they never appear in one.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    normalizer: Normalizer,
}

impl Tokenizer {
    /// Creates a new tokenizer.
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
        }
    }

    /// Tokenizes text into keyword candidates.
    ///
    /// The whole text is lower-cased before word runs are extracted, so
    /// context-dependent mappings such as the Greek final sigma see the
    /// surrounding text. Stop words and short runs are dropped; `index`
    /// counts only the kept tokens.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let lower = text.to_lowercase();
        let mut tokens = Vec::new();
        let mut token_index = 0;

        for run in WORD_RUN.find_iter(&lower) {
            if self.normalizer.accepts(run.as_str()) {
                tokens.push(Token::new(
                    run.as_str().to_string(),
                    run.start(),
                    run.end(),
                    token_index,
                ));
                token_index += 1;
            }
        }

        tokens
    }

    /// Tokenizes text and returns only the token strings.
    pub fn tokenize_to_strings(&self, text: &str) -> Vec<String> {
        self.tokenize(text).into_iter().map(|t| t.text).collect()
    }
}
