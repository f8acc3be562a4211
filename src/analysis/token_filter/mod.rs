//! Token filter implementations for token transformation.
//!
//! Filters receive the token stream produced by a tokenizer (or a previous
//! filter) and produce a new stream.
//!
//! # Examples
//!
//! ```
//! use nlputils::analysis::token_filter::{Filter, StopWordFilter};
//!
//! let filter = StopWordFilter::from_words(["und", "so"]);
//! let tokens = vec!["Hund".to_string(), "Und".to_string(), "Katze".to_string()];
//! let result = filter.filter(Some(tokens)).unwrap();
//!
//! assert_eq!(result, vec!["Hund", "Katze"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    ///
    /// An absent stream (`None`) is an
    /// [`InvalidArgument`](crate::error::NlpError::InvalidArgument) error; an
    /// empty stream yields an empty stream.
    fn filter(&self, tokens: Option<TokenStream>) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod stop;

pub use stop::StopWordFilter;
