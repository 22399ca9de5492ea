//! Error types for the chainspell library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! crate-wide [`ChainspellError`] enum.
//!
//! # Examples
//!
//! ```
//! use chainspell::error::{ChainspellError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ChainspellError::query("empty query word"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for chainspell operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides constructor methods for the common cases.
#[derive(Error, Debug)]
pub enum ChainspellError {
    /// I/O errors (dictionary files, console).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Hash table errors (invalid capacity, invalid resize target).
    #[error("Table error: {0}")]
    Table(String),

    /// Dictionary loading errors.
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Query errors (empty or malformed query words).
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ChainspellError.
pub type Result<T> = std::result::Result<T, ChainspellError>;

impl ChainspellError {
    /// Create a new table error.
    pub fn table<S: Into<String>>(msg: S) -> Self {
        ChainspellError::Table(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        ChainspellError::Dictionary(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        ChainspellError::Query(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ChainspellError::Other(msg.into())
    }
}
