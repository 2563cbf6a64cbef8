//! Loading of a dictionary directory.
//!
//! A directory holds the word list, the given-name tables, the stop words, the
//! synonym groups and the irregular-verb table:
//!
//! ```text
//! Dict.txt           word|pos|frequency
//! ChsSingleName.txt  one given-name character per line
//! ChsDoubleName1.txt
//! ChsDoubleName2.txt
//! Stopword.txt       one stop word per line
//! Synonym.txt        comma-separated synonym groups
//! Verbtable.txt      base<TAB>past<TAB>participle
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};

use crate::analysis::synonym::SynonymDictionary;
use crate::analysis::token_filter::stem::VerbTableStemmer;
use crate::analysis::token_filter::stop::StopWords;
use crate::dictionary::lexicon::Lexicon;
use crate::dictionary::name::ChineseNameMatcher;
use crate::dictionary::word_attr::{PartOfSpeech, WordAttr};
use crate::error::{Result, SegmentError};
use crate::util::for_each_line;

pub const DICT_FILE: &str = "Dict.txt";
pub const SINGLE_NAME_FILE: &str = "ChsSingleName.txt";
pub const DOUBLE_NAME1_FILE: &str = "ChsDoubleName1.txt";
pub const DOUBLE_NAME2_FILE: &str = "ChsDoubleName2.txt";
pub const STOP_WORD_FILE: &str = "Stopword.txt";
pub const SYNONYM_FILE: &str = "Synonym.txt";
pub const VERB_TABLE_FILE: &str = "Verbtable.txt";

/// Every table the segmenter reads, loaded once and shared read-only.
#[derive(Debug, Default)]
pub struct Dictionaries {
    pub lexicon: Lexicon,
    pub names: ChineseNameMatcher,
    pub stop_words: Arc<StopWords>,
    pub synonyms: Arc<SynonymDictionary>,
    pub stemmer: VerbTableStemmer,
}

impl Dictionaries {
    /// Bundle a lexicon with the built-in family names and empty auxiliary tables.
    pub fn new(lexicon: Lexicon) -> Self {
        Dictionaries {
            lexicon,
            names: ChineseNameMatcher::new(),
            ..Default::default()
        }
    }

    pub fn with_names(mut self, names: ChineseNameMatcher) -> Self {
        self.names = names;
        self
    }

    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = Arc::new(stop_words);
        self
    }

    pub fn with_synonyms(mut self, synonyms: SynonymDictionary) -> Self {
        self.synonyms = Arc::new(synonyms);
        self
    }

    pub fn with_stemmer(mut self, stemmer: VerbTableStemmer) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Load every table from `dir`. Any missing file fails the whole load.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        debug!("Loading dictionaries from {}", dir.display());

        let stemmer = VerbTableStemmer::from_reader(open(dir, VERB_TABLE_FILE)?)?;
        let lexicon = read_lexicon(open(dir, DICT_FILE)?)?;
        let names = ChineseNameMatcher::from_readers(
            open(dir, SINGLE_NAME_FILE)?,
            open(dir, DOUBLE_NAME1_FILE)?,
            open(dir, DOUBLE_NAME2_FILE)?,
        )?;
        let stop_words = StopWords::from_reader(open(dir, STOP_WORD_FILE)?)?;
        let synonyms = SynonymDictionary::from_reader(open(dir, SYNONYM_FILE)?)?;

        Ok(Dictionaries::new(lexicon)
            .with_names(names)
            .with_stop_words(stop_words)
            .with_synonyms(synonyms)
            .with_stemmer(stemmer))
    }
}

fn open(dir: &Path, name: &str) -> Result<BufReader<File>> {
    let path = dir.join(name);
    let file = File::open(&path)
        .map_err(|e| SegmentError::dictionary(format!("{}: {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}

/// Read `word|pos|frequency` lines into a lexicon.
///
/// Lines that do not have exactly three fields, or whose part of speech or
/// frequency does not parse, are skipped.
pub fn read_lexicon<R: BufRead>(reader: R) -> Result<Lexicon> {
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for_each_line(reader, |line_no, line| {
        if line.trim().is_empty() {
            return Ok(());
        }
        match parse_entry(line) {
            Some(entry) => entries.push(entry),
            None => {
                debug!("Skipping dictionary line {line_no}: {line:?}");
                skipped += 1;
            }
        }
        Ok(())
    })?;

    if skipped > 0 {
        warn!("Skipped {skipped} malformed dictionary lines");
    }
    Ok(Lexicon::from_entries(entries))
}

fn parse_entry(line: &str) -> Option<WordAttr> {
    let fields: Vec<&str> = line.split('|').collect();
    let [word, pos, frequency] = fields.as_slice() else {
        return None;
    };

    let word = word.trim();
    if word.is_empty() {
        return None;
    }
    let pos = parse_pos(pos.trim())?;
    let frequency: f64 = frequency.trim().parse().ok()?;

    Some(WordAttr::new(word, pos, frequency))
}

fn parse_pos(text: &str) -> Option<PartOfSpeech> {
    let bits = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => text.parse().ok()?,
    };
    Some(PartOfSpeech::from_bits(bits))
}
