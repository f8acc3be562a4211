//! Text analysis: tokenization, stop word filtering and pipelines.
//!
//! ```text
//! raw text → Tokenizer → TokenStream → Filter → ... → TokenStream
//! ```

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
