//! Loading of newline-delimited word and sign lists.
//!
//! Resource files are plain UTF-8 text with one entry per line. Every line is
//! trimmed and blank lines are skipped; duplicates collapse because the result
//! is a set.
//!
//! # Examples
//!
//! ```
//! use nlputils::resource::read_word_set;
//!
//! let words = read_word_set("und\n  so\n\nund\n".as_bytes()).unwrap();
//! assert_eq!(words.len(), 2);
//! assert!(words.contains("so"));
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use ahash::AHashSet;

use crate::error::{NlpError, Result};

/// A set of words as read from a resource, not case-folded.
pub type WordSet = AHashSet<String>;

/// A set of delimiter characters that end a token and are discarded.
pub type StopSignSet = AHashSet<char>;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Load a word set from the file at `path`.
pub fn load_word_set<P: AsRef<Path>>(path: P) -> Result<WordSet> {
    let path = path.as_ref();
    let file = open_resource(path)?;
    let words = read_word_set(file)?;
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Read a word set from any byte stream.
pub fn read_word_set<R: Read>(reader: R) -> Result<WordSet> {
    let mut words = WordSet::new();
    for_each_entry(reader, |entry| {
        words.insert(entry.to_string());
    })?;
    Ok(words)
}

/// Load a stop sign set from the file at `path`.
pub fn load_sign_set<P: AsRef<Path>>(path: P) -> Result<StopSignSet> {
    let path = path.as_ref();
    let file = open_resource(path)?;
    let signs = read_sign_set(file)?;
    log::debug!("loaded {} stop signs from {}", signs.len(), path.display());
    Ok(signs)
}

/// Read a stop sign set from any byte stream.
///
/// A line holding more than one character contributes each of its
/// characters as a separate sign.
pub fn read_sign_set<R: Read>(reader: R) -> Result<StopSignSet> {
    let mut signs = StopSignSet::new();
    for_each_entry(reader, |entry| {
        if entry.chars().count() > 1 {
            log::warn!("stop sign entry {entry:?} has several characters, using each of them");
        }
        signs.extend(entry.chars().filter(|c| !c.is_whitespace()));
    })?;
    Ok(signs)
}

/// Open a resource file, mapping every failure to resolve it to
/// [`NlpError::ResourceNotFound`].
pub(crate) fn open_resource(path: &Path) -> Result<File> {
    if path.as_os_str().is_empty() {
        return Err(NlpError::resource_not_found("empty resource path"));
    }
    if !path.is_file() {
        return Err(NlpError::resource_not_found(format!(
            "{} is not a readable file",
            path.display()
        )));
    }

    File::open(path)
        .map_err(|e| NlpError::resource_not_found(format!("{}: {e}", path.display())))
}

fn for_each_entry<R, F>(reader: R, mut f: F) -> Result<()>
where
    R: Read,
    F: FnMut(&str),
{
    let reader = BufReader::new(reader);
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = if index == 0 {
            line.trim_start_matches(BYTE_ORDER_MARK)
        } else {
            line.as_str()
        };

        let entry = line.trim();
        if !entry.is_empty() {
            f(entry);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_read_word_set_collapses_duplicates_and_blanks() {
        let input = "und\nso\n\n   \n und \nweiter\r\nso\n";
        let words = read_word_set(input.as_bytes()).unwrap();

        assert_eq!(words.len(), 3);
        assert!(words.contains("und"));
        assert!(words.contains("so"));
        assert!(words.contains("weiter"));
    }

    #[test]
    fn test_read_word_set_keeps_case() {
        let words = read_word_set("Und\nund\n".as_bytes()).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_read_word_set_skips_byte_order_mark() {
        let words = read_word_set("\u{feff}aber\nalle\n".as_bytes()).unwrap();
        assert!(words.contains("aber"));
        assert!(words.contains("alle"));
    }

    #[test]
    fn test_read_sign_set() {
        let signs = read_sign_set("(\n)\n\n(\n".as_bytes()).unwrap();
        assert_eq!(signs.len(), 2);
        assert!(signs.contains(&'('));
        assert!(signs.contains(&')'));
    }

    #[test]
    fn test_read_sign_set_splits_multi_character_lines() {
        let signs = read_sign_set("[]\n".as_bytes()).unwrap();
        assert_eq!(signs.len(), 2);
        assert!(signs.contains(&'['));
        assert!(signs.contains(&']'));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let bytes: &[u8] = &[b'u', b'n', b'd', b'\n', 0xff, 0xfe, b'\n'];
        match read_word_set(bytes) {
            Err(NlpError::Io(_)) => {}
            other => panic!("Expected IO error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_word_set_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "der\ndie\ndas\n\nder").unwrap();

        let words = load_word_set(file.path()).unwrap();
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_load_missing_resource() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.txt");
        assert!(matches!(
            load_word_set(&missing),
            Err(NlpError::ResourceNotFound(_))
        ));
        assert!(matches!(
            load_sign_set(""),
            Err(NlpError::ResourceNotFound(_))
        ));
        // A directory is not a readable resource either.
        assert!(matches!(
            load_word_set(dir.path()),
            Err(NlpError::ResourceNotFound(_))
        ));
    }
}
