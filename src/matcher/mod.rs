//! Dictionary-driven disambiguation of Chinese runs.
//!
//! [`tree`] enumerates and ranks the tilings of one candidate group;
//! [`full_text`] splits a run into groups, recombines their ranked tilings
//! and detects unknown words.

pub mod full_text;
pub mod options;
pub mod parameter;
pub mod tree;

pub use full_text::ChineseFullTextMatch;
pub use options::MatchOptions;
pub use parameter::MatchParameter;
pub use tree::{LEAF_LIMIT, TilingTree};
