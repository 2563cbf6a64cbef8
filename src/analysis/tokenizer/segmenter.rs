//! The segmenter: scanning, per-run dispatch and the filter chain.
//!
//! Text is split into runs by the [`Scanner`]. Chinese runs go through the
//! lexicon and [`ChineseFullTextMatch`]; English and numeric runs are
//! expanded by the [`EnglishProcessor`] and may be merged with the runs that
//! follow them into a dictionary word such as `C++`. Stop-word removal and
//! synonym expansion run last.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use hanseg::analysis::tokenizer::segmenter::Segmenter;
//! use hanseg::dictionary::{Dictionaries, Lexicon, PartOfSpeech, WordAttr};
//!
//! let lexicon = Lexicon::from_entries(vec![
//!     WordAttr::new("北京", PartOfSpeech::PLACE_NAME, 10.0),
//!     WordAttr::new("大学", PartOfSpeech::NOUN, 8.0),
//! ]);
//! let segmenter = Segmenter::new(Arc::new(Dictionaries::new(lexicon)));
//!
//! let words: Vec<String> = segmenter
//!     .segment("北京大学")
//!     .unwrap()
//!     .into_iter()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(words, vec!["北京", "大学"]);
//! ```

use std::path::Path;
use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use super::Tokenizer;
use super::english::EnglishProcessor;
use super::lexical::{Dfa, Scanner};

use crate::analysis::token::{IntoTokenStream, Token, TokenStream, WordType};
use crate::analysis::token_filter::{Filter, StopFilter, SynonymFilter};
use crate::config::SegmentConfig;
use crate::dictionary::{Dictionaries, NameMatcher};
use crate::error::{Result, SegmentError};
use crate::matcher::{ChineseFullTextMatch, MatchOptions, MatchParameter};

/// Mixed Chinese/English segmenter over a shared set of dictionaries.
#[derive(Clone, Debug)]
pub struct Segmenter {
    dictionaries: Arc<Dictionaries>,
    options: MatchOptions,
    params: MatchParameter,
}

impl Segmenter {
    /// Create a segmenter with default options and parameters.
    pub fn new(dictionaries: Arc<Dictionaries>) -> Self {
        Segmenter {
            dictionaries,
            options: MatchOptions::default(),
            params: MatchParameter::default(),
        }
    }

    /// Load the dictionaries from a directory.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Ok(Self::new(Arc::new(Dictionaries::load(dir)?)))
    }

    /// Build a segmenter from a configuration. `dict_dir` must be set.
    pub fn from_config(config: &SegmentConfig) -> Result<Self> {
        let dir = config
            .dict_dir
            .as_ref()
            .ok_or_else(|| SegmentError::config("dict_dir is not set"))?;
        Ok(Self::from_dir(dir)?
            .with_options(config.options.clone())
            .with_params(config.params.clone()))
    }

    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_params(mut self, params: MatchParameter) -> Self {
        self.params = params;
        self
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn params(&self) -> &MatchParameter {
        &self.params
    }

    pub fn dictionaries(&self) -> &Dictionaries {
        &self.dictionaries
    }

    /// Segment `text` with the segmenter's own options and parameters.
    pub fn segment(&self, text: &str) -> Result<Vec<Token>> {
        self.segment_with(text, &self.options, &self.params)
    }

    /// Segment several texts in parallel.
    pub fn segment_batch(&self, texts: &[&str]) -> Result<Vec<Vec<Token>>> {
        debug!("Segmenting a batch of {} texts", texts.len());
        texts.par_iter().map(|text| self.segment(text)).collect()
    }

    /// Segment `text` with explicit options and parameters.
    pub fn segment_with(&self, text: &str, options: &MatchOptions, params: &MatchParameter) -> Result<Vec<Token>> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Ok(Vec::new());
        }

        let runs = Scanner::new(Dfa::standard()).scan(&chars);
        let english = EnglishProcessor::new(&self.dictionaries.stemmer, options, params);
        let mut tokens = Vec::with_capacity(runs.len());

        let mut index = 0;
        while index < runs.len() {
            let run = &runs[index];
            index += 1;

            match run.word_type {
                WordType::Space => {
                    if !options.ignore_space {
                        tokens.push(run.clone());
                    }
                }
                WordType::SimplifiedChinese => {
                    tokens.extend(self.chinese(run, options, params));
                }
                WordType::English | WordType::Numeric => {
                    let mut expanded = if run.word_type == WordType::English {
                        english.english(run)
                    } else {
                        vec![english.numeric(run)]
                    };
                    if let Some((merged, consumed)) = self.special_word(&chars, &runs[index - 1..], params) {
                        expanded.pop();
                        expanded.push(merged);
                        index += consumed;
                    }
                    tokens.extend(expanded);
                }
                WordType::Symbol => {
                    tokens.push(run.clone().with_rank(params.symbol_rank));
                }
                WordType::Unknown | WordType::Synonym => {
                    tokens.push(run.clone());
                }
            }
        }

        let mut stream = tokens.into_token_stream();

        if options.filter_stop_words {
            let mut filter = StopFilter::new(self.dictionaries.stop_words.clone());
            if options.filter_english {
                filter = filter.filter_english(params.filter_english_length);
            }
            if options.filter_numeric {
                filter = filter.filter_numeric(params.filter_numeric_length);
            }
            stream = filter.filter(stream)?;
        }

        if options.synonym_output {
            let filter = SynonymFilter::new(self.dictionaries.synonyms.clone()).with_rank(params.synonym_rank);
            stream = filter.filter(stream)?;
        }

        Ok(stream.collect())
    }

    fn chinese(&self, run: &Token, options: &MatchOptions, params: &MatchParameter) -> Vec<Token> {
        let lexicon = &self.dictionaries.lexicon;
        let text: Vec<char> = run.text.chars().collect();

        let names = options
            .chinese_name_identify
            .then_some(&self.dictionaries.names as &dyn NameMatcher);
        let candidates = lexicon.matches(&text, names);

        ChineseFullTextMatch::new(lexicon, options, params)
            .run(&candidates, &text)
            .into_iter()
            .map(|mut token| {
                token.position += run.position;
                token.original_word_type = WordType::SimplifiedChinese;
                token
            })
            .collect()
    }

    /// Try to merge `runs[0]` with the English and symbol runs that follow it
    /// into the longest dictionary word. Returns the merged token and the
    /// number of following runs it absorbed.
    fn special_word(&self, chars: &[char], runs: &[Token], params: &MatchParameter) -> Option<(Token, usize)> {
        let lexicon = &self.dictionaries.lexicon;
        let first = runs.first()?;
        let start = first.position;

        let ends: Vec<usize> = runs[1..]
            .iter()
            .take_while(|run| matches!(run.word_type, WordType::English | WordType::Symbol))
            .map(Token::end)
            .take_while(|&end| end - start <= lexicon.max_word_len())
            .collect();

        ends.iter().enumerate().rev().find_map(|(i, &end)| {
            let span = &chars[start..end];
            lexicon.lookup(span).map(|attr| {
                let token = Token::new(span.iter().collect::<String>(), start)
                    .with_rank(params.english_rank)
                    .with_word_type(WordType::English)
                    .with_original_word_type(first.word_type)
                    .with_pos(attr.pos)
                    .with_frequency(attr.frequency);
                (token, i + 1)
            })
        })
    }
}

impl Tokenizer for Segmenter {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(self.segment(text)?.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "segmenter"
    }
}
