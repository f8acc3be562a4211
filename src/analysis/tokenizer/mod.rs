//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the analysis pipeline and split input
//! text into word tokens.
//!
//! # Examples
//!
//! ```
//! use nlputils::analysis::tokenizer::{Tokenizer, WordTokenizer};
//!
//! let tokenizer = WordTokenizer::from_signs(['(', ')']);
//! let tokens = tokenizer.tokenize(Some("Satz (obwohl)")).unwrap();
//! assert_eq!(tokens, vec!["Satz", "obwohl"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a single tokenizer can be shared
/// between threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text.
    ///
    /// Absent text (`None`) is an [`InvalidArgument`](crate::error::NlpError::InvalidArgument)
    /// error; an empty string yields an empty stream.
    fn tokenize(&self, text: Option<&str>) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod word;

pub use word::WordTokenizer;
