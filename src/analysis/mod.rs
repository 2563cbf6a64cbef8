//! Text analysis: tokens, tokenizers and token filters.
//!
//! The [`tokenizer::Segmenter`] drives the whole pipeline; the filters in
//! [`token_filter`] post-process its output.

pub mod synonym;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
