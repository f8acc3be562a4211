//! Analyzers combining sentence detection, tokenization, filtering and
//! spell checking.

pub mod pipeline;

pub use pipeline::{PipelineConfig, TextPipeline};
