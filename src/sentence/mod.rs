//! Sentence boundary detection.
//!
//! A [`SentenceBoundaryDetector`] splits running text into sentences before
//! word tokenization. The bundled [`UnicodeSentenceDetector`] follows the
//! Unicode sentence boundary rules (UAX #29) and can be taught a list of
//! abbreviations that must not end a sentence.

pub mod unicode;

pub use unicode::UnicodeSentenceDetector;

use crate::error::Result;

/// A service that splits text into sentences.
pub trait SentenceBoundaryDetector: Send + Sync {
    /// Split `text` into sentences.
    ///
    /// Concatenating the returned sentences reproduces `text`. Absent text
    /// (`None`) is an [`InvalidArgument`](crate::error::NlpError::InvalidArgument)
    /// error.
    fn tokenize(&self, text: Option<&str>) -> Result<Vec<String>>;
}
