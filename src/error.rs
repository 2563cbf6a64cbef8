//! Error types for the hanseg library.
//!
//! All fallible operations return [`SegmentError`]. Segmentation itself is a
//! pure computation over already-loaded dictionaries; errors only arise while
//! loading dictionary files or configuration.
//!
//! # Examples
//!
//! ```
//! use hanseg::error::{SegmentError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SegmentError::dictionary("Dict.txt is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for hanseg operations.
#[derive(Error, Debug)]
pub enum SegmentError {
    /// I/O errors (dictionary files, configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary loading errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors carrying context added by the command-line front end
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SegmentError.
pub type Result<T> = std::result::Result<T, SegmentError>;

impl SegmentError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        SegmentError::Dictionary(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SegmentError::Config(msg.into())
    }
}
