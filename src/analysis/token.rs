//! Token types flowing through the analysis pipeline.
//!
//! A token is a non-empty run of characters copied out of the input text. It
//! carries no offsets or positions; its order in the [`TokenStream`] is the
//! only positional information kept.

/// A single word token.
pub type Token = String;

/// The ordered output of one tokenization or filter call.
pub type TokenStream = Vec<Token>;
