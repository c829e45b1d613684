//! Filler word search
//!
//! Finds dictionary words spelled only from a small set of letters. Such a
//! word can test several unconfirmed letters in one guess even when it cannot
//! be the answer, so the search runs over the full corpus.

use crate::core::{Word, letter_index};
use crate::wordlists::WordCorpus;
use std::fmt;

/// Most distinct letters a filler query may hold
pub const MAX_FILLER_LETTERS: usize = 5;

/// Error type for a rejected filler query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillerError {
    Empty,
    NonAlphabetic(char),
    TooManyLetters(usize),
}

impl fmt::Display for FillerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Enter at least one letter"),
            Self::NonAlphabetic(ch) => write!(f, "Please enter letters only (got '{ch}')"),
            Self::TooManyLetters(n) => {
                write!(f, "Please enter up to {MAX_FILLER_LETTERS} unique letters (got {n})")
            }
        }
    }
}

impl std::error::Error for FillerError {}

/// Set of distinct query letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Parse a filler query
    ///
    /// Letters are lower-cased and repeats collapse, so "Tat" is {a, t}.
    ///
    /// # Errors
    /// Returns `FillerError` if the query is empty, holds a non-letter, or
    /// holds more than five distinct letters.
    pub fn parse(letters: &str) -> Result<Self, FillerError> {
        let mut mask = 0u32;
        for ch in letters.trim().chars() {
            let lower = ch.to_ascii_lowercase();
            let index = u8::try_from(lower)
                .ok()
                .and_then(letter_index)
                .ok_or(FillerError::NonAlphabetic(ch))?;
            mask |= 1 << index;
        }

        let distinct = mask.count_ones() as usize;
        if distinct == 0 {
            return Err(FillerError::Empty);
        }
        if distinct > MAX_FILLER_LETTERS {
            return Err(FillerError::TooManyLetters(distinct));
        }
        Ok(Self(mask))
    }

    /// Number of distinct letters
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether every letter of `word` is in the set
    #[inline]
    #[must_use]
    pub const fn spells(self, word: &Word) -> bool {
        word.letter_mask() & !self.0 == 0
    }

    /// The letters as a sorted string
    #[must_use]
    pub fn letters(self) -> String {
        (b'a'..=b'z')
            .filter(|&ch| letter_index(ch).is_some_and(|i| self.0 & (1 << i) != 0))
            .map(char::from)
            .collect()
    }
}

/// Find every corpus word spelled only from `letters`, in lexical order
///
/// # Errors
/// Returns `FillerError` when `letters` is not 1-5 distinct letters.
///
/// # Examples
/// ```
/// use wordle_assist::solver::find_filler_words;
/// use wordle_assist::wordlists::WordCorpus;
///
/// let corpus = WordCorpus::from_strs(&["sassy", "tests", "asset", "state"]);
/// let found = find_filler_words(&corpus, "tse").unwrap();
/// let texts: Vec<&str> = found.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["tests"]);
/// ```
pub fn find_filler_words<'a>(
    corpus: &'a WordCorpus,
    letters: &str,
) -> Result<Vec<&'a Word>, FillerError> {
    let set = LetterSet::parse(letters)?;

    let mut found: Vec<&Word> = corpus.iter().filter(|word| set.spells(word)).collect();
    found.sort_by(|a, b| a.text().cmp(b.text()));

    log::debug!("filler query {:?} matched {} word(s)", set.letters(), found.len());
    Ok(found)
}
