//! Word list loading utilities
//!
//! Reads a dictionary from disk: one record per line, first comma-separated
//! field used, so both plain word lists and CSV exports load.

use super::WordCorpus;
use crate::core::Word;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for a dictionary that cannot be used
#[derive(Debug)]
pub enum CorpusError {
    /// The source could not be opened or read
    Io { path: PathBuf, source: io::Error },
    /// The source held no valid five-letter words
    Empty { path: PathBuf },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::Empty { path } => {
                write!(f, "Word list {} contains no valid words", path.display())
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Load a corpus from a file
///
/// Invalid records are skipped and logged.
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read and
/// `CorpusError::Empty` if no record holds a valid word.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_from_file;
///
/// let corpus = load_from_file("all-answers.csv").unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordCorpus, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (corpus, skipped) = parse_records(&content);
    if skipped > 0 {
        log::warn!(
            "skipped {skipped} record(s) in {} that are not five-letter words",
            path.display()
        );
    }

    if corpus.is_empty() {
        return Err(CorpusError::Empty {
            path: path.to_path_buf(),
        });
    }

    log::info!("loaded {} words from {}", corpus.len(), path.display());
    Ok(corpus)
}

/// Parse dictionary text into a corpus
///
/// Returns the corpus and the number of non-blank records that were skipped.
#[must_use]
pub fn parse_records(content: &str) -> (WordCorpus, usize) {
    let mut skipped = 0;
    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let field = first_field(line);
            if field.is_empty() {
                return None;
            }
            let word = Word::new(field).ok();
            if word.is_none() {
                log::debug!("skipping record {line:?}");
                skipped += 1;
            }
            word
        })
        .collect();

    (WordCorpus::new(words), skipped)
}

fn first_field(line: &str) -> &str {
    line.split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches('"')
        .trim()
}
