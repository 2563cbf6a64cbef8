//! Post-processing of English and numeric runs.
//!
//! An English run may expand into several tokens: its lower-case form, its
//! stem, and its letter/digit pieces are all placed before the run's own
//! token, at the run's position.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::token::{Token, WordType};
use crate::analysis::token_filter::stem::Stemmer;
use crate::dictionary::PartOfSpeech;
use crate::matcher::{MatchOptions, MatchParameter};
use crate::util::to_ascii_width;

static PIECE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)|([a-zA-Z_]+)").unwrap());

/// Expands English runs and normalizes numeric runs.
#[derive(Clone, Copy)]
pub struct EnglishProcessor<'a> {
    stemmer: &'a dyn Stemmer,
    options: &'a MatchOptions,
    params: &'a MatchParameter,
}

impl<'a> EnglishProcessor<'a> {
    pub fn new(stemmer: &'a dyn Stemmer, options: &'a MatchOptions, params: &'a MatchParameter) -> Self {
        EnglishProcessor {
            stemmer,
            options,
            params,
        }
    }

    /// Tokens for one English run. The run's own token comes last.
    pub fn english(&self, run: &Token) -> Vec<Token> {
        let mut word = to_ascii_width(&run.text);
        if self.options.ignore_capital {
            word = word.to_lowercase();
        }

        let mut tokens = Vec::new();

        if self.options.english_segment {
            let lower = word.to_lowercase();
            if lower != word {
                tokens.push(self.variant(&lower, run.position, self.params.english_lower_rank));
            }
            let stem = self.stemmer.stem(&lower);
            if !stem.is_empty() && stem != lower {
                tokens.push(self.variant(&stem, run.position, self.params.english_stem_rank));
            }
        }

        if self.options.english_multi_dimensionality && word.contains(|c: char| c.is_ascii_digit() || c == '_') {
            tokens.extend(self.pieces(&word, run.position));
        }

        tokens.push(
            Token::new(word, run.position)
                .with_rank(self.params.english_rank)
                .with_word_type(WordType::English)
                .with_original_word_type(WordType::English),
        );
        tokens
    }

    /// Token for one numeric run.
    pub fn numeric(&self, run: &Token) -> Token {
        Token::new(to_ascii_width(&run.text), run.position)
            .with_rank(self.params.numeric_rank)
            .with_word_type(WordType::Numeric)
            .with_original_word_type(WordType::Numeric)
    }

    fn variant(&self, text: &str, position: usize, rank: u32) -> Token {
        Token::new(text, position)
            .with_rank(rank)
            .with_word_type(WordType::English)
            .with_original_word_type(WordType::English)
            .with_pos(PartOfSpeech::FOREIGN)
            .with_frequency(1.0)
    }

    /// Split at letter/digit boundaries. Nothing is returned when the word is
    /// a single piece.
    fn pieces(&self, word: &str, start: usize) -> Vec<Token> {
        let found: Vec<&str> = PIECE_PATTERN.find_iter(word).map(|m| m.as_str()).collect();
        if found.len() < 2 {
            return Vec::new();
        }

        let mut position = start;
        let mut pieces = Vec::with_capacity(found.len());
        for piece in found {
            let numeric = piece.starts_with(|c: char| c.is_ascii_digit());
            let (kind, rank, pos) = if numeric {
                (WordType::Numeric, self.params.numeric_rank, PartOfSpeech::NUMERAL)
            } else {
                (WordType::English, self.params.english_rank, PartOfSpeech::FOREIGN)
            };
            pieces.push(
                Token::new(piece, position)
                    .with_rank(rank)
                    .with_word_type(kind)
                    .with_original_word_type(WordType::English)
                    .with_pos(pos)
                    .with_frequency(1.0),
            );
            position += piece.chars().count();
        }
        pieces
    }
}
