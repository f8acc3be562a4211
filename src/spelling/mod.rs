//! Spell checking capability for analysis pipelines.
//!
//! The pipeline only depends on the [`Dictionary`] trait; any engine that can
//! answer "is this word spelled correctly?" can be plugged in.

pub mod dictionary;

pub use dictionary::*;

/// A lookup service that decides whether a word is spelled correctly.
pub trait Dictionary: Send + Sync {
    /// Returns `true` when `word` is a known, correctly spelled word.
    fn is_correctly_spelled(&self, word: &str) -> bool;
}
