//! Error types for nlputils.
//!
//! All fallible operations in this crate return [`Result`], whose error side
//! is the [`NlpError`] enum.
//!
//! # Examples
//!
//! ```
//! use nlputils::error::{NlpError, Result};
//!
//! fn check(text: Option<&str>) -> Result<&str> {
//!     text.ok_or_else(|| NlpError::invalid_argument("text must not be absent"))
//! }
//!
//! assert!(check(None).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for nlputils operations.
#[derive(Error, Debug)]
pub enum NlpError {
    /// A resource path does not resolve to a readable file.
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// I/O errors while reading a resource.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required argument was absent or unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed content in a dictionary or model resource.
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON configuration errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with NlpError.
pub type Result<T> = std::result::Result<T, NlpError>;

impl NlpError {
    /// Create a new resource not found error.
    pub fn resource_not_found<S: Into<String>>(msg: S) -> Self {
        NlpError::ResourceNotFound(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        NlpError::InvalidArgument(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        NlpError::Parse(msg.into())
    }

    /// Whether this error was raised by an absent or unusable argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, NlpError::InvalidArgument(_))
    }
}
