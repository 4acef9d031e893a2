//! Character, word, sentence and line counters.
//!
//! Character counts are in Unicode scalar values (`char`), not grapheme
//! clusters. Whitespace follows [`is_whitespace`].

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of non-terminators closed by one or more terminators.
static SENTENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());

/// Any newline sequence. `\r\n` must come first so it counts once.
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Returns `true` for characters treated as whitespace.
///
/// This is Unicode `White_Space` plus the byte order mark U+FEFF, minus the
/// next-line control U+0085: the class browsers use for `\s` and `trim`.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

/// Returns the number of characters in `text`, whitespace included.
#[inline]
pub fn count_characters_with_spaces(text: &str) -> usize {
    text.chars().count()
}

/// Returns the number of characters in `text` once all whitespace is removed.
pub fn count_characters_without_spaces(text: &str) -> usize {
    text.chars().filter(|&c| !is_whitespace(c)).count()
}

/// Counts whitespace-delimited words.
///
/// Runs of whitespace collapse, so `"a b  c"` has three words. Punctuation-only
/// runs count as words, and text without inter-word spacing counts as one word
/// per unbroken run.
pub fn count_words(text: &str) -> usize {
    text.split(is_whitespace).filter(|word| !word.is_empty()).count()
}

/// Counts sentences closed by `.`, `!` or `?`.
///
/// Consecutive terminators close a single sentence (`"Wow!!"` is one), and a
/// trailing fragment without a terminator is not counted.
pub fn count_sentences(text: &str) -> usize {
    if text.trim_matches(is_whitespace).is_empty() {
        return 0;
    }
    SENTENCE.find_iter(text).count()
}

/// Counts lines separated by `\r\n`, `\r` or `\n`.
///
/// Empty text has no lines; any other text has one more line than it has
/// newline sequences, so a trailing newline opens an (empty) final line.
pub fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    LINE_BREAK.split(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_characters_with_spaces() {
        assert_eq!(count_characters_with_spaces(""), 0);
        assert_eq!(count_characters_with_spaces("a b\tc\n"), 6);
        // One char per scalar value, regardless of UTF-8 width
        assert_eq!(count_characters_with_spaces("héllo wörld"), 11);
    }

    #[test]
    fn test_characters_without_spaces() {
        assert_eq!(count_characters_without_spaces(""), 0);
        assert_eq!(count_characters_without_spaces("   \t\r\n"), 0);
        assert_eq!(count_characters_without_spaces("a b\tc\r\nd"), 4);
        // No-break space and ideographic space are whitespace too
        assert_eq!(count_characters_without_spaces("a\u{00A0}b\u{3000}c"), 3);
    }

    #[test]
    fn test_without_spaces_never_exceeds_with_spaces() {
        for text in ["", "abc", "a b c", "  lead", "trail  ", "tab\tbed", "Привет мир"] {
            let with = count_characters_with_spaces(text);
            let without = count_characters_without_spaces(text);
            assert!(without <= with);
            assert_eq!(without == with, !text.chars().any(is_whitespace));
        }
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert_eq!(count_characters_without_spaces("a\u{FEFF}b"), 2);
        assert_eq!(count_words("a\u{FEFF}b"), 2);
        assert_eq!(count_words("\u{FEFF}"), 0);
        assert_eq!(count_sentences("\u{FEFF} "), 0);
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert!(!is_whitespace('\u{0085}'));
        assert_eq!(count_characters_without_spaces("a\u{0085}b"), 3);
        assert_eq!(count_words("a\u{0085}b"), 1);
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("a b  c"), 3);
        assert_eq!(count_words("  leading and trailing  "), 3);
        assert_eq!(count_words("line one\nline two\r\nthree"), 5);
        assert_eq!(count_words("- -- ---"), 3);
    }

    #[test]
    fn test_count_words_unsegmented_script() {
        // No inter-word spaces: one word per run
        assert_eq!(count_words("今日は良い天気です"), 1);
        assert_eq!(count_words("今日は 良い天気です"), 2);
    }

    #[test]
    fn test_count_sentences() {
        assert_eq!(count_sentences(""), 0);
        assert_eq!(count_sentences("   \n"), 0);
        assert_eq!(count_sentences("Hello world"), 0);
        assert_eq!(count_sentences("Hi. Bye!"), 2);
        assert_eq!(count_sentences("Wow!!"), 1);
        assert_eq!(count_sentences("Really?! Yes."), 2);
    }

    #[test]
    fn test_count_sentences_trailing_fragment() {
        assert_eq!(count_sentences("One. Two. And then"), 2);
    }

    #[test]
    fn test_count_sentences_leading_terminators() {
        // Terminators need a preceding run to close
        assert_eq!(count_sentences("...and so on."), 1);
        assert_eq!(count_sentences("?!"), 0);
    }

    #[test]
    fn test_count_sentences_across_lines() {
        assert_eq!(count_sentences("First line.\nSecond line!\nthird"), 2);
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("a"), 1);
        assert_eq!(count_lines("a\nb\r\nc"), 3);
        assert_eq!(count_lines("a\rb"), 2);
        assert_eq!(count_lines("a\n"), 2);
        assert_eq!(count_lines("\n\n"), 3);
        assert_eq!(count_lines("   "), 1);
    }
}
