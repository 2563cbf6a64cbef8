//! Immutable multi-length word lexicon.
//!
//! Words are split by length into three tables: single code points, packed
//! code-point pairs, and full strings for everything longer. Words of three or
//! more code points are also indexed by their packed first three code points,
//! so probing a run only touches the lengths that actually occur for a prefix.
//!
//! # Examples
//!
//! ```
//! use hanseg::dictionary::{Lexicon, PartOfSpeech, WordAttr};
//!
//! let lexicon = Lexicon::from_entries(vec![
//!     WordAttr::new("中国", PartOfSpeech::PLACE_NAME, 10.0),
//!     WordAttr::new("中国人", PartOfSpeech::NOUN, 5.0),
//!     WordAttr::new("人", PartOfSpeech::NOUN, 3.0),
//! ]);
//!
//! let run: Vec<char> = "中国人".chars().collect();
//! let candidates = lexicon.matches(&run, None);
//!
//! let spans: Vec<_> = candidates.iter().map(|c| (c.position, c.length)).collect();
//! assert_eq!(spans, vec![(0, 2), (0, 3), (2, 1)]);
//! ```

use std::sync::Arc;

use ahash::AHashMap;
use log::debug;
use smallvec::SmallVec;

use crate::dictionary::name::NameMatcher;
use crate::dictionary::word_attr::WordAttr;
use crate::util::fold_char;

const CODE_POINT_BITS: u32 = 21;

/// A known word at a position inside a run.
#[derive(Clone, Debug)]
pub struct Candidate {
    /// Offset of the first code point inside the run
    pub position: usize,
    /// Length in code points
    pub length: usize,
    /// Rank tier assigned when tilings are merged (0 = best .. 3 = forced single)
    pub level: usize,
    pub attr: Arc<WordAttr>,
}

impl Candidate {
    pub fn new(position: usize, length: usize, attr: Arc<WordAttr>) -> Self {
        Candidate {
            position,
            length,
            level: 0,
            attr,
        }
    }

    /// Offset one past the last code point.
    pub fn end(&self) -> usize {
        self.position + self.length
    }
}

#[inline]
fn pack2(a: char, b: char) -> u64 {
    ((a as u64) << CODE_POINT_BITS) | b as u64
}

#[inline]
fn pack3(a: char, b: char, c: char) -> u64 {
    ((a as u64) << (2 * CODE_POINT_BITS)) | ((b as u64) << CODE_POINT_BITS) | c as u64
}

/// The word lexicon. Built once, read-only afterwards.
#[derive(Debug, Default)]
pub struct Lexicon {
    singles: AHashMap<char, Arc<WordAttr>>,
    doubles: AHashMap<u64, Arc<WordAttr>>,
    words: AHashMap<String, Arc<WordAttr>>,
    prefix_lengths: AHashMap<u64, SmallVec<[usize; 4]>>,
    max_word_len: usize,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from dictionary records.
    ///
    /// Keys are case-folded. When the same key occurs twice the later record wins.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = WordAttr>,
    {
        let mut lexicon = Self::new();
        lexicon.load(entries);
        lexicon
    }

    /// Add dictionary records to the lexicon. Keys are case-folded and a
    /// later record replaces an earlier one with the same key.
    pub fn load<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = WordAttr>,
    {
        for entry in entries {
            let key: Vec<char> = entry.word.chars().map(fold_char).collect();
            let attr = Arc::new(entry);
            self.max_word_len = self.max_word_len.max(key.len());
            match key.as_slice() {
                [] => {}
                [a] => {
                    self.singles.insert(*a, attr);
                }
                [a, b] => {
                    self.doubles.insert(pack2(*a, *b), attr);
                }
                [a, b, c, ..] => {
                    let lengths = self.prefix_lengths.entry(pack3(*a, *b, *c)).or_default();
                    if let Err(index) = lengths.binary_search(&key.len()) {
                        lengths.insert(index, key.len());
                    }
                    self.words.insert(key.iter().collect(), attr);
                }
            }
        }

        debug!(
            "Lexicon loaded: {} single, {} double, {} longer words",
            self.singles.len(),
            self.doubles.len(),
            self.words.len()
        );
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.singles.len() + self.doubles.len() + self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length in code points of the longest word.
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Look up a word of known length.
    pub fn lookup(&self, word: &[char]) -> Option<&Arc<WordAttr>> {
        match word {
            [] => None,
            [a] => self.singles.get(&fold_char(*a)),
            [a, b] => self.doubles.get(&pack2(fold_char(*a), fold_char(*b))),
            _ => {
                let key: String = word.iter().copied().map(fold_char).collect();
                self.words.get(&key)
            }
        }
    }

    /// Look up a word given as a string.
    pub fn get(&self, word: &str) -> Option<&Arc<WordAttr>> {
        let chars: Vec<char> = word.chars().collect();
        self.lookup(&chars)
    }

    /// Find every known word starting at every offset of `run`.
    ///
    /// The result is position-ascending. At one offset name spans come first,
    /// then dictionary words by ascending length. A dictionary word whose span
    /// equals a name span at the same offset is left out.
    pub fn matches(&self, run: &[char], names: Option<&dyn NameMatcher>) -> Vec<Candidate> {
        let mut result = Vec::new();
        if run.is_empty() {
            return result;
        }

        let key: Vec<char> = run.iter().copied().map(fold_char).collect();

        for i in 0..key.len() {
            let name_spans = names.map(|matcher| matcher.match_names(run, i)).unwrap_or_default();
            for span in &name_spans {
                result.push(Candidate::new(i, span.length, span.attr.clone()));
            }
            let shadowed = |length: usize| name_spans.iter().any(|span| span.length == length);

            if let Some(attr) = self.singles.get(&key[i]) {
                if !shadowed(1) {
                    result.push(Candidate::new(i, 1, attr.clone()));
                }
            }

            if i + 1 < key.len() {
                if let Some(attr) = self.doubles.get(&pack2(key[i], key[i + 1])) {
                    if !shadowed(2) {
                        result.push(Candidate::new(i, 2, attr.clone()));
                    }
                }
            }

            if i + 2 >= key.len() {
                continue;
            }

            if let Some(lengths) = self.prefix_lengths.get(&pack3(key[i], key[i + 1], key[i + 2])) {
                for &length in lengths {
                    if i + length > key.len() {
                        break;
                    }
                    if shadowed(length) {
                        continue;
                    }
                    let word: String = key[i..i + length].iter().collect();
                    if let Some(attr) = self.words.get(&word) {
                        result.push(Candidate::new(i, length, attr.clone()));
                    }
                }
            }
        }

        result
    }
}
