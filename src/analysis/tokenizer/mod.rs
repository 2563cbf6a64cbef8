//! Tokenizer implementations for text analysis.
//!
//! - [`lexical::Scanner`] - Splits text into character-class runs
//! - [`segmenter::Segmenter`] - Full mixed Chinese/English segmentation
//!
//! # Examples
//!
//! ```
//! use hanseg::analysis::tokenizer::Tokenizer;
//! use hanseg::analysis::tokenizer::lexical::{Dfa, Scanner};
//!
//! let tokenizer = Scanner::new(Dfa::standard());
//! let tokens: Vec<_> = tokenizer.tokenize("Hello 世界").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod english;
pub mod lexical;
pub mod segmenter;

// Re-export all tokenizers for convenient access
pub use english::EnglishProcessor;
pub use lexical::{Dfa, Scanner};
pub use segmenter::Segmenter;
