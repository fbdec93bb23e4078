//! Word list loading
//!
//! Lists on disk are either JSON (`{"words": ["tales", ...]}`) or plain text
//! with one word per line. Entries that are not five ASCII letters are
//! skipped.

use crate::core::Word;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Errors from loading a word list
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Json(serde_json::Error),
    /// The file held no valid words
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Could not read word list: {e}"),
            Self::Json(e) => write!(f, "Malformed JSON word list: {e}"),
            Self::Empty => write!(f, "Word list contains no valid five-letter words"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[derive(Deserialize)]
struct WordListFile {
    words: Vec<String>,
}

/// Load words from a file
///
/// Files ending in `.json` are parsed as `{"words": [...]}`; anything else
/// is read one word per line, ignoring blank lines and `#` comments.
/// Duplicates are dropped, first occurrence wins.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, `LoadError::Json` for
/// malformed JSON and `LoadError::Empty` if no valid word remains.
///
/// # Examples
/// ```no_run
/// use wordle_sieve::wordlists::load_from_file;
///
/// let words = load_from_file("words.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let words = if is_json {
        parse_json(&content)?
    } else {
        parse_lines(&content)
    };

    if words.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(words)
}

/// Parse a JSON word list
///
/// # Errors
///
/// Returns `LoadError::Json` if `content` is not `{"words": [...]}`.
pub fn parse_json(content: &str) -> Result<Vec<Word>, LoadError> {
    let file: WordListFile = serde_json::from_str(content)?;
    Ok(dedup(file.words.iter().filter_map(|w| Word::new(w).ok())))
}

/// Parse a plain text word list, one word per line
#[must_use]
pub fn parse_lines(content: &str) -> Vec<Word> {
    dedup(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| Word::new(line).ok()),
    )
}

fn dedup(words: impl Iterator<Item = Word>) -> Vec<Word> {
    let mut seen = rustc_hash::FxHashSet::default();
    words.filter(|w| seen.insert(w.clone())).collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_sieve::wordlists::{WORDS, words_from_slice};
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
