//! JSON configuration for the segmenter.
//!
//! Every field is optional; missing fields take their defaults.
//!
//! ```json
//! {
//!   "dict_dir": "/usr/share/hanseg",
//!   "options": { "chinese_name_identify": true },
//!   "params": { "redundancy": 1 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matcher::{MatchOptions, MatchParameter};

/// Segmenter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentConfig {
    /// Directory holding the dictionary files.
    pub dict_dir: Option<PathBuf>,

    pub options: MatchOptions,

    pub params: MatchParameter,
}

impl SegmentConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_from_json() {
        let config = SegmentConfig::from_json(
            r#"{"dict_dir": "dict", "options": {"force_single_word": true}, "params": {"redundancy": 2}}"#,
        )
        .unwrap();

        assert_eq!(config.dict_dir, Some(PathBuf::from("dict")));
        assert!(config.options.force_single_word);
        assert!(config.options.unknown_word_identify);
        assert_eq!(config.params.redundancy, 2);
        assert_eq!(config.params.best_rank, 5);
    }

    #[test]
    fn test_empty_json() {
        assert_eq!(SegmentConfig::from_json("{}").unwrap(), SegmentConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(SegmentConfig::from_json("{dict_dir").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"options": {{"ignore_space": false}}}}"#).unwrap();

        let config = SegmentConfig::from_file(file.path()).unwrap();
        assert!(!config.options.ignore_space);
        assert!(config.dict_dir.is_none());
    }
}
