//! Boolean switches controlling segmentation.

use serde::{Deserialize, Serialize};

/// Segmentation switches.
///
/// Missing fields in a serialized configuration take their default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Recognize Chinese personal names.
    pub chinese_name_identify: bool,

    /// Prefer higher total frequency over fewer single-character words when ranking tilings.
    pub frequency_first: bool,

    /// Output words from several ranked tilings.
    pub multi_dimensionality: bool,

    /// Split English words at letter/digit boundaries and output the pieces as well.
    pub english_multi_dimensionality: bool,

    /// Remove stop words.
    pub filter_stop_words: bool,

    /// Drop space, tab, CR and LF runs.
    pub ignore_space: bool,

    /// Additionally output every Chinese character as a single word.
    pub force_single_word: bool,

    /// Merge out-of-vocabulary spans into unknown words.
    pub unknown_word_identify: bool,

    /// When filtering stop words, also drop English words longer than the configured length.
    pub filter_english: bool,

    /// When filtering stop words, also drop numbers longer than the configured length.
    pub filter_numeric: bool,

    /// Lower-case English words.
    pub ignore_capital: bool,

    /// Output the lower-case form and the stem of English words.
    pub english_segment: bool,

    /// Output synonyms after each word.
    pub synonym_output: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            chinese_name_identify: false,
            frequency_first: false,
            multi_dimensionality: true,
            english_multi_dimensionality: false,
            filter_stop_words: true,
            ignore_space: true,
            force_single_word: false,
            unknown_word_identify: true,
            filter_english: false,
            filter_numeric: false,
            ignore_capital: false,
            english_segment: false,
            synonym_output: false,
        }
    }
}
