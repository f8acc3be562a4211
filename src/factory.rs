//! Factory for creating tokenizers and stop word filters from resources.
//!
//! The factory keeps no state and performs no caching: every call reads its
//! resource again and returns a fresh, independently owned instance.

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stop::StopWordFilter;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::error::Result;

/// Configuration for building a [`WordTokenizer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Resource listing the stop signs, one per line.
    pub stop_sign_path: String,
}

/// Configuration for building a [`StopWordFilter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopWordFilterConfig {
    /// Resource listing the stop words, one per line.
    pub stop_word_path: String,
    /// Whether stop words must match the token's case exactly.
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Factory for creating word tokenizers and stop word filters.
///
/// # Example
///
/// ```no_run
/// use nlputils::analysis::token_filter::Filter;
/// use nlputils::analysis::tokenizer::Tokenizer;
/// use nlputils::factory::StopWordFilterFactory;
///
/// let tokenizer = StopWordFilterFactory::create_tokenizer("resources/stopsign2.txt")?;
/// let filter = StopWordFilterFactory::create_stop_word_filter("resources/stopwords.txt")?;
///
/// let tokens = filter.filter(Some(tokenizer.tokenize(Some("Dieser Satz (obwohl kurz)"))?))?;
/// # Ok::<(), nlputils::error::NlpError>(())
/// ```
pub struct StopWordFilterFactory;

impl StopWordFilterFactory {
    /// Create a tokenizer splitting on the stop signs listed at `stop_sign_path`.
    ///
    /// # Errors
    ///
    /// Returns the resource loader's error if the stop signs cannot be read.
    pub fn create_tokenizer(stop_sign_path: &str) -> Result<WordTokenizer> {
        Self::tokenizer_from_config(&TokenizerConfig {
            stop_sign_path: stop_sign_path.to_string(),
        })
    }

    /// Create a case-insensitive stop word filter for the words listed at
    /// `stop_word_path`.
    ///
    /// # Errors
    ///
    /// Returns the resource loader's error if the stop words cannot be read.
    pub fn create_stop_word_filter(stop_word_path: &str) -> Result<StopWordFilter> {
        Self::stop_word_filter_from_config(&StopWordFilterConfig {
            stop_word_path: stop_word_path.to_string(),
            case_sensitive: false,
        })
    }

    /// Create a tokenizer from configuration.
    pub fn tokenizer_from_config(config: &TokenizerConfig) -> Result<WordTokenizer> {
        let tokenizer = WordTokenizer::from_file(&config.stop_sign_path)?;
        log::debug!(
            "created word tokenizer with {} stop signs from {}",
            tokenizer.stop_signs().len(),
            config.stop_sign_path
        );
        Ok(tokenizer)
    }

    /// Create a stop word filter from configuration.
    pub fn stop_word_filter_from_config(config: &StopWordFilterConfig) -> Result<StopWordFilter> {
        let filter =
            StopWordFilter::from_file(&config.stop_word_path)?.case_sensitive(config.case_sensitive);
        log::debug!(
            "created stop word filter with {} words from {} (case sensitive: {})",
            filter.len(),
            config.stop_word_path,
            config.case_sensitive
        );
        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::analysis::token_filter::Filter;
    use crate::analysis::tokenizer::Tokenizer;
    use crate::error::NlpError;

    fn resource(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    fn path(file: &NamedTempFile) -> String {
        file.path().to_string_lossy().into_owned()
    }

    #[test]
    fn test_create_tokenizer() {
        let signs = resource("(\n)\n");
        let tokenizer = StopWordFilterFactory::create_tokenizer(&path(&signs)).unwrap();

        assert_eq!(tokenizer.stop_signs().len(), 2);
        assert_eq!(
            tokenizer.tokenize(Some("(a) b")).unwrap(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_create_stop_word_filter_is_case_insensitive() {
        let words = resource("und\nso\n");
        let filter = StopWordFilterFactory::create_stop_word_filter(&path(&words)).unwrap();

        assert!(!filter.is_case_sensitive());
        let result = filter
            .filter(Some(vec!["Und".to_string(), "Hund".to_string()]))
            .unwrap();
        assert_eq!(result, vec!["Hund"]);
    }

    #[test]
    fn test_case_sensitive_config() {
        let words = resource("und\n");
        let config = StopWordFilterConfig {
            stop_word_path: path(&words),
            case_sensitive: true,
        };
        let filter = StopWordFilterFactory::stop_word_filter_from_config(&config).unwrap();
        assert!(filter.is_case_sensitive());
        assert!(!filter.is_stop_word("Und"));
    }

    #[test]
    fn test_each_call_reloads_the_resource() {
        let mut words = resource("und\n");
        let first = StopWordFilterFactory::create_stop_word_filter(&path(&words)).unwrap();

        writeln!(words, "so").unwrap();
        let second = StopWordFilterFactory::create_stop_word_filter(&path(&words)).unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_missing_resources() {
        assert!(matches!(
            StopWordFilterFactory::create_tokenizer("no/such/stopsigns.txt"),
            Err(NlpError::ResourceNotFound(_))
        ));
        assert!(matches!(
            StopWordFilterFactory::create_stop_word_filter(""),
            Err(NlpError::ResourceNotFound(_))
        ));
    }
}
