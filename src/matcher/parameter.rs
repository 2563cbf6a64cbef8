//! Numeric tuning: redundancy, rank weights and filter lengths.

use serde::{Deserialize, Serialize};

/// Segmentation parameters.
///
/// Missing fields in a serialized configuration take their default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchParameter {
    /// Number of ranked tilings output in addition to the best one.
    pub redundancy: usize,

    /// Rank of unknown words.
    pub unknown_rank: u32,

    /// Rank of words from the best tiling.
    pub best_rank: u32,

    /// Rank of words from the second-best tiling.
    pub second_rank: u32,

    /// Rank of words from the third-best tiling.
    pub third_rank: u32,

    /// Rank of forced single characters.
    pub single_rank: u32,

    pub numeric_rank: u32,
    pub english_rank: u32,
    pub english_lower_rank: u32,
    pub english_stem_rank: u32,
    pub symbol_rank: u32,
    pub synonym_rank: u32,

    /// With `filter_english`, drop English words longer than this.
    pub filter_english_length: usize,

    /// With `filter_numeric`, drop numbers longer than this.
    pub filter_numeric_length: usize,
}

impl Default for MatchParameter {
    fn default() -> Self {
        Self {
            redundancy: 0,
            unknown_rank: 1,
            best_rank: 5,
            second_rank: 3,
            third_rank: 2,
            single_rank: 1,
            numeric_rank: 1,
            english_rank: 5,
            english_lower_rank: 3,
            english_stem_rank: 2,
            symbol_rank: 1,
            synonym_rank: 1,
            filter_english_length: 0,
            filter_numeric_length: 0,
        }
    }
}

impl MatchParameter {
    /// Rank weight of a candidate from tiling tier `level`.
    ///
    /// Levels 0, 1, 2 are the ranked tilings, 3 the forced single characters.
    /// Any other level gets the best rank.
    pub fn rank_for_level(&self, level: usize) -> u32 {
        match level {
            0 => self.best_rank,
            1 => self.second_rank,
            2 => self.third_rank,
            3 => self.single_rank,
            _ => self.best_rank,
        }
    }
}
