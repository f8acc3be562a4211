//! # nlputils
//!
//! Text preprocessing for German NLP pipelines.
//!
//! ## Features
//!
//! - Word tokenization on whitespace and configurable stop signs
//! - Case-insensitive stop word filtering
//! - Newline-delimited word and sign resources
//! - Pluggable spell checking and sentence boundary detection
//! - Thread-safe pipelines with parallel batch analysis
//!
//! ## Example
//!
//! ```
//! use nlputils::analysis::token_filter::{Filter, StopWordFilter};
//! use nlputils::analysis::tokenizer::{Tokenizer, WordTokenizer};
//!
//! let tokenizer = WordTokenizer::from_signs(['(', ')']);
//! let filter = StopWordFilter::from_words(["mit", "und", "so"]);
//!
//! let tokens = tokenizer.tokenize(Some("Satz (mit Klammern) und so"))?;
//! let tokens = filter.filter(Some(tokens))?;
//! assert_eq!(tokens, vec!["Satz", "Klammern"]);
//! # Ok::<(), nlputils::error::NlpError>(())
//! ```

pub mod analysis;
pub mod error;
pub mod factory;
pub mod resource;
pub mod sentence;
pub mod spelling;

pub mod prelude {
    pub use crate::analysis::{
        Filter, PipelineConfig, StopWordFilter, TextPipeline, Token, TokenStream, Tokenizer,
        WordTokenizer,
    };
    pub use crate::error::{NlpError, Result};
    pub use crate::factory::{StopWordFilterConfig, StopWordFilterFactory, TokenizerConfig};
    pub use crate::resource::{StopSignSet, WordSet};
    pub use crate::sentence::{SentenceBoundaryDetector, UnicodeSentenceDetector};
    pub use crate::spelling::{Dictionary, DictionaryConfig, WordListDictionary};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
