//! Five-letter word representation
//!
//! A Word stores a validated lowercase word together with per-letter counts
//! indexed by alphabet rank, so duplicate-letter checks need no hashing.

use std::fmt;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of letters in the recognized alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Alphabet rank (0-25) of a lowercase ASCII letter
///
/// Returns `None` for anything outside `a..=z`.
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// Lowercase ASCII letter for an alphabet rank
///
/// # Panics
/// Panics in debug mode if `index >= 26`
#[inline]
#[must_use]
pub const fn letter_at(index: usize) -> u8 {
    debug_assert!(index < ALPHABET_SIZE);
    b'a' + index as u8
}

/// A 5-letter word with letter count tracking
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    counts: [u8; ALPHABET_SIZE],
    mask: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and lower-cased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        let mut counts = [0u8; ALPHABET_SIZE];
        let mut mask = 0u32;
        for &ch in &chars {
            let index = letter_index(ch).ok_or(WordError::InvalidCharacters)?;
            counts[index] += 1;
            mask |= 1 << index;
        }

        Ok(Self {
            text,
            chars,
            counts,
            mask,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.count_of(letter) > 0
    }

    /// Number of times a letter appears in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        letter_index(letter).map_or(0, |i| self.counts[i])
    }

    /// Per-letter counts indexed by alphabet rank
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &[u8; ALPHABET_SIZE] {
        &self.counts
    }

    /// Bit set of the distinct letters in the word (bit 0 = 'a')
    #[inline]
    #[must_use]
    pub const fn letter_mask(&self) -> u32 {
        self.mask
    }

    /// Distinct letters in order of first appearance
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(move |&(i, ch)| !self.chars[..i].contains(ch))
            .map(|(_, &ch)| ch)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("  CrAnE\n").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("toolong"),
            Err(WordError::InvalidLength(7))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cranë"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_counts_duplicates() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.count_of(b'e'), 2);
        assert_eq!(word.count_of(b's'), 1);
        assert_eq!(word.count_of(b'z'), 0);
        assert_eq!(word.count_of(b'!'), 0);
        assert!(word.has_letter(b'd'));
        assert!(!word.has_letter(b'a'));
    }

    #[test]
    fn word_letter_mask() {
        let word = Word::new("abbey").unwrap();
        let expected = (1 << 0) | (1 << 1) | (1 << 4) | (1 << 24);
        assert_eq!(word.letter_mask(), expected);
    }

    #[test]
    fn word_distinct_letters_keep_first_order() {
        let word = Word::new("geese").unwrap();
        let letters: Vec<u8> = word.distinct_letters().collect();
        assert_eq!(letters, b"ges");
    }

    #[test]
    fn letter_rank_round_trip() {
        assert_eq!(letter_index(b'a'), Some(0));
        assert_eq!(letter_index(b'z'), Some(25));
        assert_eq!(letter_index(b'A'), None);
        assert_eq!(letter_at(7), b'h');
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
