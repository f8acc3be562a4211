//! Word tokenizer splitting on whitespace and stop signs.

use std::path::Path;
use std::sync::Arc;

use super::Tokenizer;

use crate::analysis::token::TokenStream;
use crate::error::{NlpError, Result};
use crate::resource::{self, StopSignSet};

/// A tokenizer that splits text on whitespace and on a set of stop signs.
///
/// Stop signs are pure delimiters: they end the current token and are
/// discarded, never emitted as tokens of their own. Any other punctuation
/// stays attached to the surrounding word.
///
/// # Examples
///
/// ```
/// use nlputils::analysis::tokenizer::{Tokenizer, WordTokenizer};
///
/// let tokenizer = WordTokenizer::from_signs(['(', ')']);
/// let tokens = tokenizer.split("gefiltert, (so) weiter...");
/// assert_eq!(tokens, vec!["gefiltert,", "so", "weiter..."]);
/// ```
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    stop_signs: Arc<StopSignSet>,
}

impl WordTokenizer {
    /// Create a tokenizer bound to the given stop sign set.
    pub fn new(stop_signs: StopSignSet) -> Self {
        WordTokenizer {
            stop_signs: Arc::new(stop_signs),
        }
    }

    /// Create a tokenizer from an iterator of stop sign characters.
    pub fn from_signs<I>(signs: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self::new(signs.into_iter().collect())
    }

    /// Create a tokenizer whose stop signs are read from a resource file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(resource::load_sign_set(path)?))
    }

    /// The stop signs this tokenizer splits on.
    pub fn stop_signs(&self) -> &StopSignSet {
        &self.stop_signs
    }

    /// Check whether `c` ends a token.
    pub fn is_delimiter(&self, c: char) -> bool {
        c.is_whitespace() || self.stop_signs.contains(&c)
    }

    /// Split `text` into tokens.
    ///
    /// Consecutive delimiters never produce empty tokens, so text made only
    /// of delimiters yields an empty stream.
    pub fn split(&self, text: &str) -> TokenStream {
        let mut tokens = TokenStream::new();
        let mut start: Option<usize> = None;

        for (offset, c) in text.char_indices() {
            if self.is_delimiter(c) {
                if let Some(begin) = start.take() {
                    tokens.push(text[begin..offset].to_string());
                }
            } else if start.is_none() {
                start = Some(offset);
            }
        }

        if let Some(begin) = start {
            tokens.push(text[begin..].to_string());
        }

        tokens
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: Option<&str>) -> Result<TokenStream> {
        let text = text.ok_or_else(|| NlpError::invalid_argument("text must not be absent"))?;
        Ok(self.split(text))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parentheses() -> WordTokenizer {
        WordTokenizer::from_signs(['(', ')'])
    }

    #[test]
    fn test_word_tokenizer() {
        let tokens = parentheses()
            .tokenize(Some(
                "Dieser Satz (obwohl mit Stopwords) wird gefiltert, Zeichen entfertn und so weiter...",
            ))
            .unwrap();

        assert_eq!(
            tokens,
            vec![
                "Dieser",
                "Satz",
                "obwohl",
                "mit",
                "Stopwords",
                "wird",
                "gefiltert,",
                "Zeichen",
                "entfertn",
                "und",
                "so",
                "weiter...",
            ]
        );
    }

    #[test]
    fn test_stop_signs_are_discarded() {
        let tokens = parentheses().split("(a)(b)c(");
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_only_delimiters() {
        let tokenizer = parentheses();
        assert!(tokenizer.split("  ( )\t)(\n ").is_empty());
        assert!(tokenizer.split("").is_empty());
    }

    #[test]
    fn test_non_ascii_text() {
        let tokenizer = WordTokenizer::from_signs(['«', '»']);
        let tokens = tokenizer.split("«Grüße»\u{a0}aus Köln");
        assert_eq!(tokens, vec!["Grüße", "aus", "Köln"]);
    }

    #[test]
    fn test_without_stop_signs_splits_on_whitespace_only() {
        let tokenizer = WordTokenizer::new(StopSignSet::new());
        let tokens = tokenizer.split("hallo  (welt)\tTest");
        assert_eq!(tokens, vec!["hallo", "(welt)", "Test"]);
    }

    #[test]
    fn test_absent_text_is_invalid_argument() {
        let err = parentheses().tokenize(None).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_empty_text_is_empty_stream() {
        assert!(parentheses().tokenize(Some("")).unwrap().is_empty());
    }

    #[test]
    fn test_stop_signs_accessor() {
        let tokenizer = parentheses();
        assert_eq!(tokenizer.stop_signs().len(), 2);
        assert!(tokenizer.is_delimiter('('));
        assert!(tokenizer.is_delimiter(' '));
        assert!(!tokenizer.is_delimiter(','));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(parentheses().name(), "word");
    }
}
