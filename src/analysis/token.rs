//! Token types produced by the segmenter.
//!
//! A [`Token`] is one emitted word: its text, its code-point offset in the
//! original input, a rank weight used by downstream indexing, and the
//! dictionary attributes (part of speech, frequency) it was matched with.
//!
//! # Examples
//!
//! ```
//! use hanseg::analysis::token::{Token, WordType};
//!
//! let token = Token::new("中国", 3)
//!     .with_rank(5)
//!     .with_word_type(WordType::SimplifiedChinese);
//!
//! assert_eq!(token.text, "中国");
//! assert_eq!(token.position, 3);
//! assert_eq!(token.end(), 5);
//! assert_eq!(token.rank, 5);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dictionary::PartOfSpeech;

/// A single segmented word.
///
/// # Fields
///
/// - `text` - The word text
/// - `position` - Code-point offset of the first character in the input
/// - `rank` - Rank weight assigned by the segmenter
/// - `word_type` - Classification of the emitted word
/// - `original_word_type` - Classification of the run the word came from
/// - `pos` - Part-of-speech bitmask from the dictionary
/// - `frequency` - Dictionary frequency
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// Code-point offset of the token in the original text
    pub position: usize,

    /// Rank weight of this token
    pub rank: u32,

    /// Word type of this token
    pub word_type: WordType,

    /// Word type of the scanner run this token was produced from
    pub original_word_type: WordType,

    /// Part-of-speech bitmask
    pub pos: PartOfSpeech,

    /// Dictionary frequency
    pub frequency: f64,
}

/// Classification of a token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordType {
    /// Out-of-vocabulary text
    #[default]
    #[serde(rename = "none")]
    Unknown,
    /// Latin identifiers (letters, digits, underscore)
    English,
    /// Chinese ideographs
    SimplifiedChinese,
    /// Numbers with at most one decimal point
    Numeric,
    /// Any other single character
    Symbol,
    /// Space, tab, CR and LF runs
    Space,
    /// Synonym generated by the synonym filter
    Synonym,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            rank: 0,
            word_type: WordType::Unknown,
            original_word_type: WordType::Unknown,
            pos: PartOfSpeech::UNKNOWN,
            frequency: 0.0,
        }
    }

    /// Number of code points in the token text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Code-point offset one past the last character of the token.
    pub fn end(&self) -> usize {
        self.position + self.char_len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the rank weight.
    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = rank;
        self
    }

    /// Set the word type.
    pub fn with_word_type(mut self, word_type: WordType) -> Self {
        self.word_type = word_type;
        self
    }

    /// Set the original word type.
    pub fn with_original_word_type(mut self, word_type: WordType) -> Self {
        self.original_word_type = word_type;
        self
    }

    /// Set the part of speech.
    pub fn with_pos(mut self, pos: PartOfSpeech) -> Self {
        self.pos = pos;
        self
    }

    /// Set the dictionary frequency.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
