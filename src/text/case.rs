//! Whole-text case transforms.

use crate::error::TextMetricsError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whitespace class matching `text::is_whitespace`: `\s` plus U+FEFF, minus U+0085.
const WHITESPACE: &str = r"[[\s\x{FEFF}]&&[^\x{85}]]";

/// The first word character of the text, or the first one after a terminator,
/// with any whitespace in between.
static SENTENCE_START: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"^{ws}*\w|[.!?]{ws}*\w", ws = WHITESPACE);
    Regex::new(&pattern).unwrap()
});

/// A case transform applied to the whole text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// EVERY CHARACTER UPPERCASE.
    #[value(alias = "uppercase")]
    Upper,
    /// every character lowercase.
    #[value(alias = "lowercase")]
    Lower,
    /// First Character Of Every Space-Separated Segment Uppercase.
    Title,
    /// First character of every sentence uppercase.
    Sentence,
}

impl CaseMode {
    /// All modes, in display order.
    pub const ALL: [CaseMode; 4] = [
        CaseMode::Upper,
        CaseMode::Lower,
        CaseMode::Title,
        CaseMode::Sentence,
    ];

    /// The lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseMode::Upper => "upper",
            CaseMode::Lower => "lower",
            CaseMode::Title => "title",
            CaseMode::Sentence => "sentence",
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseMode {
    type Err = TextMetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upper" | "uppercase" => Ok(CaseMode::Upper),
            "lower" | "lowercase" => Ok(CaseMode::Lower),
            "title" => Ok(CaseMode::Title),
            "sentence" => Ok(CaseMode::Sentence),
            _ => Err(TextMetricsError::UnknownCaseMode(s.to_string())),
        }
    }
}

/// Applies `mode` to the whole of `text`.
pub fn transform_case(text: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Upper => text.to_uppercase(),
        CaseMode::Lower => text.to_lowercase(),
        CaseMode::Title => title_case(text),
        CaseMode::Sentence => sentence_case(text),
    }
}

/// Lower-cases the text and capitalizes each segment between single spaces.
///
/// Only `' '` separates segments. Tabs and newlines do not, and a run of
/// spaces yields empty segments that are joined back unchanged.
// TODO: treat any whitespace run as a boundary if consecutive-space handling
// is ever revisited.
fn title_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the text, then uppercases one word character at the start
/// and one after each run of terminators and whitespace.
fn sentence_case(text: &str) -> String {
    let lower = text.to_lowercase();
    SENTENCE_START
        .replace_all(&lower, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}
