//! Stemmer implementations for English words.

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod porter;
pub mod verb_table;

pub use porter::PorterStemmer;
pub use verb_table::VerbTableStemmer;
