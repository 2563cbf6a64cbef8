//! Stop filter implementation.
//!
//! This module provides the stop-word table and a filter that removes stop
//! words from the token stream. Besides exact table lookups, the filter can
//! drop every English word or number longer than a configured length.
//!
//! # Examples
//!
//! ```
//! use hanseg::analysis::token_filter::Filter;
//! use hanseg::analysis::token_filter::stop::StopFilter;
//! use hanseg::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["的", "the"]);
//! let tokens = vec![
//!     Token::new("我", 0),
//!     Token::new("的", 1),
//!     Token::new("The", 3),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "我");
//! ```

use std::io::BufRead;
use std::sync::Arc;

use ahash::AHashSet;
use log::debug;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::util::for_each_line;

/// The stop-word table.
///
/// Words starting with an ASCII character are stored lower-cased and matched
/// case-insensitively; all other words are matched exactly.
#[derive(Clone, Debug, Default)]
pub struct StopWords {
    words: AHashSet<String>,
}

impl StopWords {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for word in words {
            table.insert(word.as_ref());
        }
        table
    }

    /// Read one stop word per line. Empty lines are ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = Self::new();
        for_each_line(reader, |_, line| {
            table.insert(line);
            Ok(())
        })?;
        debug!("Loaded {} stop words", table.len());
        Ok(table)
    }

    fn insert(&mut self, word: &str) {
        match word.chars().next() {
            None => {}
            Some(c) if c.is_ascii() => {
                self.words.insert(word.to_lowercase());
            }
            Some(_) => {
                self.words.insert(word.to_string());
            }
        }
    }

    /// Check whether `word` should be dropped.
    ///
    /// For ASCII-initial words, `filter_english` drops any non-numeric word
    /// longer than `english_len` and `filter_numeric` drops any digit-initial
    /// word longer than `numeric_len`. Lengths are counted in code points.
    pub fn is_stop_word(
        &self,
        word: &str,
        filter_english: bool,
        english_len: usize,
        filter_numeric: bool,
        numeric_len: usize,
    ) -> bool {
        let Some(first) = word.chars().next() else {
            return false;
        };

        if first.is_ascii() {
            let len = word.chars().count();
            let numeric = first.is_ascii_digit();
            if filter_english && !numeric && len > english_len {
                return true;
            }
            if filter_numeric && numeric && len > numeric_len {
                return true;
            }
            return self.words.contains(&word.to_lowercase());
        }

        self.words.contains(word)
    }

    /// Check whether `word` is in the table.
    pub fn contains(&self, word: &str) -> bool {
        self.is_stop_word(word, false, 0, false, 0)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A filter that removes stop words from the token stream.
///
/// ## Length Thresholds
///
/// ```
/// use hanseg::analysis::token_filter::stop::{StopFilter, StopWords};
/// use std::sync::Arc;
///
/// // Drop every English word longer than 3 characters
/// let filter = StopFilter::new(Arc::new(StopWords::new())).filter_english(3);
/// assert!(filter.is_stop_word("search"));
/// assert!(!filter.is_stop_word("the"));
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The shared stop word table
    stop_words: Arc<StopWords>,
    /// Drop English words longer than this many code points
    english_len: Option<usize>,
    /// Drop numbers longer than this many code points
    numeric_len: Option<usize>,
}

impl StopFilter {
    /// Create a stop filter over a shared table.
    pub fn new(stop_words: Arc<StopWords>) -> Self {
        StopFilter {
            stop_words,
            english_len: None,
            numeric_len: None,
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Arc::new(StopWords::from_words(words)))
    }

    /// Also drop English words longer than `len` code points.
    pub fn filter_english(mut self, len: usize) -> Self {
        self.english_len = Some(len);
        self
    }

    /// Also drop numbers longer than `len` code points.
    pub fn filter_numeric(mut self, len: usize) -> Self {
        self.numeric_len = Some(len);
        self
    }

    /// Check if a word is removed by this filter.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.is_stop_word(
            word,
            self.english_len.is_some(),
            self.english_len.unwrap_or(0),
            self.numeric_len.is_some(),
            self.numeric_len.unwrap_or(0),
        )
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(filtered_tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
