//! Word dictionaries: part-of-speech tags, the lexicon, the name matcher and
//! the loader for a dictionary directory.

pub mod lexicon;
pub mod loader;
pub mod name;
pub mod word_attr;

pub use lexicon::{Candidate, Lexicon};
pub use loader::Dictionaries;
pub use name::{ChineseNameMatcher, NameMatcher, NameSpan};
pub use word_attr::{PartOfSpeech, WordAttr};
