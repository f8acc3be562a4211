//! Word list dictionaries for spell checking.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use crate::error::{NlpError, Result};
use crate::resource::{self, WordSet};
use crate::spelling::Dictionary;

/// Configuration for building a [`WordListDictionary`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Plain word list, or Hunspell `.dic` file when `affix_path` is set.
    pub dictionary_path: String,
    /// Hunspell `.aff` file accompanying `dictionary_path`.
    #[serde(default)]
    pub affix_path: Option<String>,
    /// Whether lookups must match the stored case exactly.
    #[serde(default)]
    pub case_sensitive: bool,
}

/// A dictionary that accepts exactly the words it was loaded with.
///
/// Words can come from a plain word list (one word per line) or from the
/// stem list of a Hunspell `.dic` file, decoded in the charset named by the
/// `SET` line of its `.aff` file. Affix rules are not expanded, so only the
/// listed stems are accepted.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    /// Words as loaded, lower-cased unless the dictionary is case-sensitive
    words: Arc<WordSet>,
    case_sensitive: bool,
}

impl WordListDictionary {
    /// Create a dictionary from a set of words.
    pub fn new(words: WordSet, case_sensitive: bool) -> Self {
        let words = if case_sensitive {
            words
        } else {
            words.iter().map(|w| w.to_lowercase()).collect()
        };

        WordListDictionary {
            words: Arc::new(words),
            case_sensitive,
        }
    }

    /// Load a dictionary from a plain word list resource.
    pub fn from_word_list<P: AsRef<Path>>(path: P, case_sensitive: bool) -> Result<Self> {
        Ok(Self::new(resource::load_word_set(path)?, case_sensitive))
    }

    /// Load a dictionary from a Hunspell `.dic` / `.aff` file pair.
    pub fn from_hunspell<P, Q>(dictionary_path: P, affix_path: Q, case_sensitive: bool) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let dictionary = resource::open_resource(dictionary_path.as_ref())?;
        let affix = resource::open_resource(affix_path.as_ref())?;
        let loaded = Self::from_hunspell_readers(dictionary, affix, case_sensitive)?;
        log::debug!(
            "loaded {} hunspell stems from {}",
            loaded.word_count(),
            dictionary_path.as_ref().display()
        );
        Ok(loaded)
    }

    /// Read a dictionary from Hunspell `.dic` and `.aff` streams.
    ///
    /// # Errors
    ///
    /// Returns [`NlpError::Parse`] when the `.aff` declares no `SET`
    /// encoding or an unknown one, when the `.dic` is not valid in that
    /// encoding, or when its entry count header is malformed.
    pub fn from_hunspell_readers<D, A>(dictionary: D, affix: A, case_sensitive: bool) -> Result<Self>
    where
        D: Read,
        A: Read,
    {
        let encoding = read_affix_encoding(affix)?;
        log::debug!("reading hunspell dictionary as {}", encoding.name());
        let words = read_hunspell_stems(dictionary, encoding)?;
        Ok(Self::new(words, case_sensitive))
    }

    /// Build a dictionary as described by `config`.
    pub fn from_config(config: &DictionaryConfig) -> Result<Self> {
        match &config.affix_path {
            Some(affix_path) => {
                Self::from_hunspell(&config.dictionary_path, affix_path, config.case_sensitive)
            }
            None => Self::from_word_list(&config.dictionary_path, config.case_sensitive),
        }
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.words.contains(word)
        } else {
            self.words.contains(&word.to_lowercase())
        }
    }

    /// Get the total number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Whether lookups are case-sensitive.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl Dictionary for WordListDictionary {
    fn is_correctly_spelled(&self, word: &str) -> bool {
        !word.is_empty() && self.contains(word)
    }
}

/// Hunspell `.dic`: an entry count on the first line, then one
/// `stem[/FLAGS][ morphology]` entry per line.
fn read_hunspell_stems<R: Read>(mut reader: R, encoding: &'static Encoding) -> Result<WordSet> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = encoding
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .ok_or_else(|| NlpError::parse(format!("dictionary is not valid {}", encoding.name())))?;

    let mut lines = text.lines();
    let header = lines
        .by_ref()
        .map(|line| line.trim_start_matches('\u{feff}').trim())
        .find(|line| !line.is_empty())
        .ok_or_else(|| NlpError::parse("dictionary is empty"))?;
    let expected: usize = header
        .parse()
        .map_err(|_| NlpError::parse(format!("invalid dictionary entry count {header:?}")))?;

    let mut words = WordSet::with_capacity(expected);
    for line in lines {
        // Lines starting with a tab are comments in some dictionaries.
        if line.starts_with('\t') {
            continue;
        }
        let entry = line.split_whitespace().next().unwrap_or("");
        let stem = entry.split('/').next().unwrap_or("");
        if stem.is_empty() {
            log::trace!("skipping dictionary line {line:?}");
            continue;
        }
        words.insert(stem.to_string());
    }

    if words.len() > expected {
        log::warn!(
            "dictionary declares {expected} entries but contains {} stems",
            words.len()
        );
    }
    Ok(words)
}

/// The charset declared by the `SET` directive of a Hunspell `.aff` file.
///
/// The rest of the file may be in that charset, so lines are only inspected
/// for the ASCII directive.
fn read_affix_encoding<R: Read>(mut reader: R) -> Result<&'static Encoding> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    for line in bytes.split(|b| *b == b'\n') {
        let line = String::from_utf8_lossy(line);
        let mut parts = line.trim_start_matches('\u{feff}').split_whitespace();
        if parts.next() != Some("SET") {
            continue;
        }
        let label = parts
            .next()
            .ok_or_else(|| NlpError::parse("SET directive without encoding"))?;
        return Encoding::for_label(label.as_bytes())
            .ok_or_else(|| NlpError::parse(format!("unknown dictionary encoding {label}")));
    }
    Err(NlpError::parse("affix file declares no SET encoding"))
}
