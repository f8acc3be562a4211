//! Pipeline analyzer that combines a tokenizer with filters and optional
//! collaborators.
//!
//! # Architecture
//!
//! The TextPipeline applies processing in this order:
//! 1. Sentence detector (optional): splits raw text into sentences
//! 2. Tokenizer: splits text into tokens
//! 3. Filters: applied sequentially in the order they were added
//! 4. Dictionary (optional): consulted by [`TextPipeline::misspelled`]
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use nlputils::analysis::analyzer::pipeline::TextPipeline;
//! use nlputils::analysis::token_filter::stop::StopWordFilter;
//! use nlputils::analysis::tokenizer::word::WordTokenizer;
//!
//! let pipeline = TextPipeline::new(Arc::new(WordTokenizer::from_signs(['(', ')'])))
//!     .add_filter(Arc::new(StopWordFilter::from_words(["und", "so"])));
//!
//! let tokens = pipeline.analyze(Some("Hund (und) Katze und so")).unwrap();
//! assert_eq!(tokens, vec!["Hund", "Katze"]);
//! ```

use std::fmt::{Debug, Formatter};
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;
use crate::factory::{StopWordFilterConfig, StopWordFilterFactory, TokenizerConfig};
use crate::resource;
use crate::sentence::{SentenceBoundaryDetector, UnicodeSentenceDetector};
use crate::spelling::{Dictionary, DictionaryConfig, WordListDictionary};

/// Configuration for a complete [`TextPipeline`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Tokenizer configuration.
    pub tokenizer: TokenizerConfig,
    /// Stop word filter configuration.
    pub stop_word_filter: StopWordFilterConfig,
    /// Abbreviation list enabling sentence detection.
    #[serde(default)]
    pub abbreviation_path: Option<String>,
    /// Dictionary enabling spell checking.
    #[serde(default)]
    pub dictionary: Option<DictionaryConfig>,
}

impl PipelineConfig {
    /// Read a pipeline configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = resource::open_resource(path.as_ref())?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Parse a pipeline configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A configurable pipeline that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct TextPipeline {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    sentence_detector: Option<Arc<dyn SentenceBoundaryDetector>>,
    dictionary: Option<Arc<dyn Dictionary>>,
}

impl TextPipeline {
    /// Create a new pipeline with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        TextPipeline {
            tokenizer,
            filters: Vec::new(),
            sentence_detector: None,
            dictionary: None,
        }
    }

    /// Build a pipeline from configuration, loading every resource it names.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let tokenizer = StopWordFilterFactory::tokenizer_from_config(&config.tokenizer)?;
        let filter = StopWordFilterFactory::stop_word_filter_from_config(&config.stop_word_filter)?;

        let mut pipeline = TextPipeline::new(Arc::new(tokenizer)).add_filter(Arc::new(filter));

        if let Some(path) = &config.abbreviation_path {
            let detector = UnicodeSentenceDetector::from_abbreviation_file(path)?;
            pipeline = pipeline.with_sentence_detector(Arc::new(detector));
        }
        if let Some(dictionary) = &config.dictionary {
            let dictionary = WordListDictionary::from_config(dictionary)?;
            pipeline = pipeline.with_dictionary(Arc::new(dictionary));
        }

        log::debug!("built pipeline {pipeline:?}");
        Ok(pipeline)
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Split text into sentences before tokenizing.
    pub fn with_sentence_detector(mut self, detector: Arc<dyn SentenceBoundaryDetector>) -> Self {
        self.sentence_detector = Some(detector);
        self
    }

    /// Use `dictionary` for spell checking.
    pub fn with_dictionary(mut self, dictionary: Arc<dyn Dictionary>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Get the filters used by this pipeline.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Tokenize `text` and apply every filter in order.
    pub fn analyze(&self, text: Option<&str>) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            tokens = filter.filter(Some(tokens))?;
        }
        Ok(tokens)
    }

    /// Analyze each sentence of `text` separately.
    ///
    /// Without a sentence detector the whole text is one sentence. Empty text
    /// has no sentences either way.
    pub fn analyze_sentences(&self, text: Option<&str>) -> Result<Vec<TokenStream>> {
        match (&self.sentence_detector, text) {
            (Some(detector), text) => detector
                .tokenize(text)?
                .iter()
                .map(|sentence| self.analyze(Some(sentence.as_str())))
                .collect(),
            (None, Some("")) => Ok(Vec::new()),
            (None, text) => Ok(vec![self.analyze(text)?]),
        }
    }

    /// Analyzed tokens of `text` that the dictionary does not know.
    ///
    /// Returns an empty stream when no dictionary is configured.
    pub fn misspelled(&self, text: Option<&str>) -> Result<TokenStream> {
        let tokens = self.analyze(text)?;
        Ok(match &self.dictionary {
            Some(dictionary) => tokens
                .into_iter()
                .filter(|token| !dictionary.is_correctly_spelled(token))
                .collect(),
            None => TokenStream::new(),
        })
    }

    /// Analyze many texts in parallel.
    ///
    /// Results keep the order of `texts`; the first error aborts the batch.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Result<Vec<TokenStream>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.analyze(Some(text.as_ref())))
            .collect()
    }
}

impl Debug for TextPipeline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPipeline")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|filter| filter.name()).collect::<Vec<_>>(),
            )
            .field("sentence_detector", &self.sentence_detector.is_some())
            .field("dictionary", &self.dictionary.is_some())
            .finish()
    }
}
