//! Text processing: counting, keyword tokenization and case transforms.

mod case;
mod counter;
mod keywords;
mod normalizer;
mod tokenizer;

pub use case::{transform_case, CaseMode};
pub use counter::{
    count_characters_with_spaces, count_characters_without_spaces, count_lines, count_sentences,
    count_words, is_whitespace,
};
pub use keywords::{top_keywords, Keyword, KeywordAnalyzer};
pub use normalizer::{is_stop_word, Normalizer, MIN_TOKEN_LENGTH, STOP_WORDS};
pub use tokenizer::{Token, Tokenizer};
