//! Irregular verb table in front of the Porter stemmer.
//!
//! # Examples
//!
//! ```
//! use hanseg::analysis::token_filter::stem::{Stemmer, VerbTableStemmer};
//!
//! let stemmer = VerbTableStemmer::from_reader("go\twent\tgone\n".as_bytes()).unwrap();
//!
//! assert_eq!(stemmer.stem("went"), "go");
//! assert_eq!(stemmer.stem("walking"), "walk");
//! ```

use std::io::BufRead;

use ahash::AHashMap;
use log::debug;

use crate::analysis::token_filter::stem::{PorterStemmer, Stemmer};
use crate::error::Result;
use crate::util::for_each_line;

/// Stemmer that maps irregular inflections to their base form before falling
/// back to the Porter algorithm.
#[derive(Debug, Clone, Default)]
pub struct VerbTableStemmer {
    /// Inflected form -> base form
    table: AHashMap<String, String>,
    porter: PorterStemmer,
}

impl VerbTableStemmer {
    /// Create a stemmer with an empty verb table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `base<TAB>past<TAB>participle` lines. Lines with another field
    /// count are ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut stemmer = Self::new();
        for_each_line(reader, |_, line| {
            let fields: Vec<&str> = line.split('\t').collect();
            if let [base, past, participle] = fields.as_slice() {
                stemmer.insert(base, &[past, participle]);
            }
            Ok(())
        })?;
        debug!("Loaded {} verb table entries", stemmer.len());
        Ok(stemmer)
    }

    /// Map each inflected form to `base`.
    pub fn insert(&mut self, base: &str, forms: &[&str]) {
        let base = base.trim().to_lowercase();
        for form in forms {
            self.table.insert(form.trim().to_lowercase(), base.clone());
        }
    }

    /// Number of inflected forms in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Stemmer for VerbTableStemmer {
    fn stem(&self, word: &str) -> String {
        if let Some(base) = self.table.get(word) {
            return base.clone();
        }
        let letters: String = word.chars().filter(|c| c.is_alphabetic()).collect();
        self.porter.stem(&letters)
    }

    fn name(&self) -> &'static str {
        "verb_table"
    }
}
