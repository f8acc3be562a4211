//! Stop word filter implementation.
//!
//! This module provides a filter that removes words whose contribution to
//! downstream processing is negligible ("und", "so", "dieser", ...). The stop
//! word list is supplied by the caller, usually loaded from a resource file.
//!
//! # Examples
//!
//! ```
//! use nlputils::analysis::token_filter::Filter;
//! use nlputils::analysis::token_filter::stop::StopWordFilter;
//!
//! let filter = StopWordFilter::from_words(["der", "die", "das"]);
//! let tokens = vec!["Die".to_string(), "Katze".to_string()];
//!
//! let result = filter.filter(Some(tokens)).unwrap();
//! assert_eq!(result, vec!["Katze"]);
//! ```

use std::path::Path;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::{NlpError, Result};
use crate::resource::{self, WordSet};

/// A filter that removes stop words from the token stream.
///
/// The stop word set is kept exactly as loaded. Matching is case-insensitive
/// by default: both the token and the stored words are case-folded for the
/// comparison, through a lookup table derived once at construction. Folding
/// lower-cases and expands `ß` to `ss`, so `"STRASSE"` matches `"Straße"`.
///
/// # Examples
///
/// ```
/// use nlputils::analysis::token_filter::stop::StopWordFilter;
///
/// let filter = StopWordFilter::from_words(["Und"]);
/// assert!(filter.is_stop_word("UND"));
///
/// let filter = StopWordFilter::from_words(["Und"]).case_sensitive(true);
/// assert!(!filter.is_stop_word("und"));
/// assert!(filter.is_stop_word("Und"));
/// ```
#[derive(Clone, Debug)]
pub struct StopWordFilter {
    /// The stop words as loaded
    stop_words: Arc<WordSet>,
    /// Case-folded copy of `stop_words`, absent when matching is case-sensitive
    folded: Option<Arc<WordSet>>,
}

impl StopWordFilter {
    /// Create a case-insensitive filter over the given stop words.
    pub fn new(stop_words: WordSet) -> Self {
        let stop_words = Arc::new(stop_words);
        StopWordFilter {
            folded: Some(Arc::new(fold(&stop_words))),
            stop_words,
        }
    }

    /// Create a filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(words.into_iter().map(Into::into).collect())
    }

    /// Create a filter whose stop words are read from a resource file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(resource::load_word_set(path)?))
    }

    /// Set whether stop words must match the token's case exactly.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.folded = if case_sensitive {
            None
        } else {
            Some(Arc::new(fold(&self.stop_words)))
        };
        self
    }

    /// Whether matching is case-sensitive.
    pub fn is_case_sensitive(&self) -> bool {
        self.folded.is_none()
    }

    /// The stop words of this filter, as loaded.
    pub fn stop_words(&self) -> &WordSet {
        &self.stop_words
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        match &self.folded {
            Some(folded) => folded.contains(&fold_case(word)),
            None => self.stop_words.contains(word),
        }
    }

    /// Remove stop words from a borrowed token sequence.
    ///
    /// The result is always a subsequence of `tokens`.
    pub fn filter_stop_words<S: AsRef<str>>(&self, tokens: &[S]) -> TokenStream {
        tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|token| !self.is_stop_word(token))
            .map(str::to_string)
            .collect()
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopWordFilter {
    fn filter(&self, tokens: Option<TokenStream>) -> Result<TokenStream> {
        let mut tokens =
            tokens.ok_or_else(|| NlpError::invalid_argument("tokens must not be absent"))?;
        tokens.retain(|token| !self.is_stop_word(token));
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

fn fold(words: &WordSet) -> WordSet {
    words.iter().map(|word| fold_case(word)).collect()
}

fn fold_case(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.contains('ß') {
        lower.replace('ß', "ss")
    } else {
        lower
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> TokenStream {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_stop_word_filter() {
        let filter = StopWordFilter::from_words(["der", "und", "oder"]);
        let result = filter
            .filter(Some(tokens(&["Hallo", "der", "Welt", "UND", "Test"])))
            .unwrap();

        assert_eq!(result, vec!["Hallo", "Welt", "Test"]);
    }

    #[test]
    fn test_stored_words_are_not_folded() {
        let filter = StopWordFilter::from_words(["Und"]);
        assert!(filter.stop_words().contains("Und"));
        assert!(!filter.stop_words().contains("und"));
        assert!(filter.is_stop_word("und"));
    }

    #[test]
    fn test_case_sensitive_filter() {
        let filter = StopWordFilter::from_words(["und"]).case_sensitive(true);
        assert!(filter.is_case_sensitive());

        let result = filter.filter(Some(tokens(&["Und", "und"]))).unwrap();
        assert_eq!(result, vec!["Und"]);

        let filter = filter.case_sensitive(false);
        assert!(!filter.is_case_sensitive());
        assert!(filter.filter(Some(tokens(&["Und", "und"]))).unwrap().is_empty());
    }

    #[test]
    fn test_german_case_folding() {
        let filter = StopWordFilter::from_words(["über", "während"]);
        let result = filter
            .filter(Some(tokens(&["Über", "WÄHREND", "Brücke"])))
            .unwrap();
        assert_eq!(result, vec!["Brücke"]);
    }

    #[test]
    fn test_sharp_s_folds_to_ss() {
        let filter = StopWordFilter::from_words(["straße", "daß"]);
        assert!(filter.is_stop_word("STRASSE"));
        assert!(filter.is_stop_word("Strasse"));
        assert!(filter.is_stop_word("Straße"));
        assert!(filter.is_stop_word("dass"));
        assert!(!filter.is_stop_word("Strasser"));

        let filter = filter.case_sensitive(true);
        assert!(!filter.is_stop_word("STRASSE"));
        assert!(filter.is_stop_word("straße"));
    }

    #[test]
    fn test_stop_word_free_stream_is_unchanged() {
        let filter = StopWordFilter::from_words(["und", "so"]);
        let input = tokens(&["Satz", "obwohl", "Zeichen"]);
        assert_eq!(filter.filter(Some(input.clone())).unwrap(), input);
    }

    #[test]
    fn test_absent_and_empty_streams() {
        let filter = StopWordFilter::from_words(["und"]);
        assert!(filter.filter(None).unwrap_err().is_invalid_argument());
        assert!(filter.filter(Some(TokenStream::new())).unwrap().is_empty());
    }

    #[test]
    fn test_filter_stop_words_borrowed() {
        let filter = StopWordFilter::from_words(["so"]);
        let result = filter.filter_stop_words(&["und", "so", "weiter"]);
        assert_eq!(result, vec!["und", "weiter"]);
    }

    #[test]
    fn test_len() {
        let filter = StopWordFilter::from_words(["a", "b", "a"]);
        assert_eq!(filter.len(), 2);
        assert!(!filter.is_empty());
        assert!(StopWordFilter::new(WordSet::new()).is_empty());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopWordFilter::from_words(["und"]).name(), "stop");
    }
}
