//! # Hanseg
//!
//! A dictionary-driven word segmenter for mixed Chinese/English text.
//!
//! ## Features
//!
//! - Finite-state scanning into English, numeric, Chinese, space and symbol runs
//! - Multi-length lexicon lookup with optional Chinese personal-name recognition
//! - Ranked tiling enumeration with multi-tier output and unknown-word detection
//! - Stop words, synonyms, Porter and irregular-verb stemming for English words
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use hanseg::prelude::*;
//!
//! let lexicon = Lexicon::from_entries(vec![
//!     WordAttr::new("中华人民共和国", PartOfSpeech::PLACE_NAME, 10.0),
//!     WordAttr::new("成立", PartOfSpeech::VERB, 8.0),
//! ]);
//! let segmenter = Segmenter::new(Arc::new(Dictionaries::new(lexicon)));
//!
//! let tokens = segmenter.segment("中华人民共和国成立").unwrap();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].text, "成立");
//! assert_eq!(tokens[1].position, 7);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod matcher;
pub mod util;

pub mod prelude {
    pub use crate::analysis::token::{Token, WordType};
    pub use crate::analysis::tokenizer::{Segmenter, Tokenizer};
    pub use crate::config::SegmentConfig;
    pub use crate::dictionary::{Dictionaries, Lexicon, PartOfSpeech, WordAttr};
    pub use crate::error::{Result, SegmentError};
    pub use crate::matcher::{MatchOptions, MatchParameter};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
