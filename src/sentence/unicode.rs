//! Sentence detector based on Unicode sentence boundaries.

use std::path::Path;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{NlpError, Result};
use crate::resource::{self, WordSet};
use crate::sentence::SentenceBoundaryDetector;

/// Splits text at Unicode sentence boundaries.
///
/// A boundary that directly follows a known abbreviation (`"z.B."`,
/// `"Dr."`, ...) is ignored and the two pieces are joined. Abbreviations are
/// compared case-insensitively, also after an opening bracket or quote as in
/// `"(vgl. Kap. 2)"`.
///
/// # Examples
///
/// ```
/// use nlputils::sentence::{SentenceBoundaryDetector, UnicodeSentenceDetector};
///
/// let detector = UnicodeSentenceDetector::with_abbreviations(["Dr."]);
/// let sentences = detector
///     .tokenize(Some("Dr. Müller kommt. Er ist spät."))
///     .unwrap();
///
/// assert_eq!(sentences, vec!["Dr. Müller kommt. ", "Er ist spät."]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnicodeSentenceDetector {
    /// Lower-cased abbreviations
    abbreviations: Arc<WordSet>,
}

impl UnicodeSentenceDetector {
    /// Create a detector without abbreviations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector that does not split after the given abbreviations.
    pub fn with_abbreviations<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        UnicodeSentenceDetector {
            abbreviations: Arc::new(
                abbreviations
                    .into_iter()
                    .map(|a| a.as_ref().trim().to_lowercase())
                    .filter(|a| !a.is_empty())
                    .collect(),
            ),
        }
    }

    /// Create a detector whose abbreviations are read from a resource file.
    pub fn from_abbreviation_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let abbreviations = resource::load_word_set(path)?;
        Ok(Self::with_abbreviations(abbreviations))
    }

    /// Number of known abbreviations.
    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    fn ends_with_abbreviation(&self, sentence: &str) -> bool {
        sentence
            .split_whitespace()
            .next_back()
            .map(|word| word.trim_start_matches(|c: char| !c.is_alphanumeric()))
            .is_some_and(|word| self.abbreviations.contains(&word.to_lowercase()))
    }
}

impl SentenceBoundaryDetector for UnicodeSentenceDetector {
    fn tokenize(&self, text: Option<&str>) -> Result<Vec<String>> {
        let text = text.ok_or_else(|| NlpError::invalid_argument("text must not be absent"))?;

        let mut sentences: Vec<String> = Vec::new();
        let mut joining = false;
        for piece in text.split_sentence_bounds() {
            if joining && let Some(last) = sentences.last_mut() {
                last.push_str(piece);
            } else {
                sentences.push(piece.to_string());
            }
            joining = sentences
                .last()
                .is_some_and(|last| self.ends_with_abbreviation(last));
        }

        Ok(sentences)
    }
}
