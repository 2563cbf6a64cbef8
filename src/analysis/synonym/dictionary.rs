//! Synonym dictionary for mapping words to their synonyms.

use std::io::BufRead;

use ahash::AHashMap;
use log::debug;
use smallvec::SmallVec;

use crate::error::Result;
use crate::util::for_each_line;

/// Synonym dictionary for token expansion.
///
/// Each group is a set of interchangeable words. A word may belong to several
/// groups; its synonyms are the other members of all of them.
#[derive(Debug, Clone, Default)]
pub struct SynonymDictionary {
    /// Synonym groups in load order
    groups: Vec<Vec<String>>,
    /// Lower-cased word -> indices of the groups containing it
    index: AHashMap<String, SmallVec<[usize; 2]>>,
}

impl SynonymDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one comma-separated group per line.
    ///
    /// Example format:
    /// ```text
    /// 电脑,计算机
    /// big, large, huge
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dictionary = Self::new();
        for_each_line(reader, |_, line| {
            if !line.is_empty() {
                dictionary.add_synonym_group(line.split(','));
            }
            Ok(())
        })?;
        debug!("Loaded {} synonym groups", dictionary.groups.len());
        Ok(dictionary)
    }

    /// Build a synonym dictionary from synonym groups.
    pub fn from_synonym_groups<I, G, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for group in groups {
            dictionary.add_synonym_group(group);
        }
        dictionary
    }

    /// Add a synonym group where all terms are synonyms of each other.
    ///
    /// Terms are trimmed; empty terms are dropped.
    pub fn add_synonym_group<G, S>(&mut self, terms: G)
    where
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let group: Vec<String> = terms
            .into_iter()
            .map(|term| term.as_ref().trim().to_string())
            .filter(|term| !term.is_empty())
            .collect();
        if group.is_empty() {
            return;
        }

        let group_id = self.groups.len();
        for term in &group {
            let ids = self.index.entry(term.to_lowercase()).or_default();
            if ids.last() != Some(&group_id) {
                ids.push(group_id);
            }
        }
        self.groups.push(group);
    }

    /// Get the synonyms of `word`, excluding the word itself.
    ///
    /// The lookup is trimmed and case-insensitive. The result keeps the order in
    /// which words first appear across groups and holds no duplicates.
    pub fn synonyms(&self, word: &str) -> Vec<&str> {
        let key = word.trim().to_lowercase();
        let Some(ids) = self.index.get(&key) else {
            return Vec::new();
        };

        let mut result: Vec<&str> = Vec::new();
        for &id in ids {
            for term in &self.groups[id] {
                if term.to_lowercase() == key || result.contains(&term.as_str()) {
                    continue;
                }
                result.push(term);
            }
        }
        result
    }

    /// Number of synonym groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
