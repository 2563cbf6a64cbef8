//! Synonym groups loaded from the dictionary directory.

pub mod dictionary;

pub use dictionary::SynonymDictionary;
