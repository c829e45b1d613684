//! Tile feedback for a submitted guess
//!
//! Each of the five tiles carries one of three marks:
//! - 0 = Absent (letter not in the word)
//! - 1 = Present (letter in the word, wrong position)
//! - 2 = Correct (letter in the correct position)

use super::Word;
use super::word::{ALPHABET_SIZE, WORD_LENGTH, letter_index};
use std::fmt;

/// Mark shown on a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Gray tile
    Absent,
    /// Yellow tile
    Present,
    /// Green tile
    Correct,
}

impl Mark {
    /// Wire value of the mark (0, 1 or 2)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    /// Decode a wire value
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Correct),
            _ => None,
        }
    }

    /// Next mark in the gray → yellow → green cycle
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Absent => Self::Present,
            Self::Present => Self::Correct,
            Self::Correct => Self::Absent,
        }
    }

    /// Parse a single text mark
    ///
    /// Accepts digits `0`/`1`/`2`, letters `G`/`Y`/`B`/`X` (any case),
    /// `-`, `_`, `.` and tile emoji.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '2' | 'G' | 'g' | '🟩' => Some(Self::Correct),
            '1' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '0' | 'B' | 'b' | 'X' | 'x' | '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Tile emoji for the mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Error type for malformed feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// Not exactly five marks
    WrongLength(usize),
    /// A text mark that is not recognized
    InvalidMark(char),
    /// A numeric mark outside 0..=2
    InvalidValue(u8),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => write!(f, "Feedback must have exactly 5 marks, got {len}"),
            Self::InvalidMark(ch) => {
                write!(f, "Invalid feedback mark '{ch}' (use 0/1/2, G/Y/- or tiles)")
            }
            Self::InvalidValue(v) => write!(f, "Invalid feedback value {v} (expected 0, 1 or 2)"),
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All greens (the guess is the answer)
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    /// All grays
    pub const ALL_ABSENT: Self = Self([Mark::Absent; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Build feedback from wire values {0 = absent, 1 = present, 2 = correct}
    ///
    /// # Errors
    /// Returns `FeedbackError` if there are not exactly five values or a
    /// value is outside 0..=2.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::from_values(&[2, 1, 0, 0, 0]).unwrap();
    /// assert_eq!(feedback.mark(0), Mark::Correct);
    /// assert!(Feedback::from_values(&[0, 3, 0, 0, 0]).is_err());
    /// ```
    pub fn from_values(values: &[u8]) -> Result<Self, FeedbackError> {
        if values.len() != WORD_LENGTH {
            return Err(FeedbackError::WrongLength(values.len()));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, &value) in marks.iter_mut().zip(values) {
            *mark = Mark::from_value(value).ok_or(FeedbackError::InvalidValue(value))?;
        }
        Ok(Self(marks))
    }

    /// Parse feedback text like "GY-GY", "21022", "1 0 1 0 1" or "🟩🟨⬜🟩🟨"
    ///
    /// Whitespace between marks is ignored.
    ///
    /// # Errors
    /// Returns `FeedbackError` on an unknown mark or a mark count other than five.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Feedback;
    ///
    /// let a = Feedback::parse("GY-GY").unwrap();
    /// let b = Feedback::parse("2 1 0 2 1").unwrap();
    /// let c = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(b, c);
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();

        if chars.len() != WORD_LENGTH {
            return Err(FeedbackError::WrongLength(chars.len()));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, &ch) in marks.iter_mut().zip(&chars) {
            *mark = Mark::from_char(ch).ok_or(FeedbackError::InvalidMark(ch))?;
        }
        Ok(Self(marks))
    }

    /// Calculate the feedback the game shows when `guess` is played against `answer`
    ///
    /// Greens are assigned first and consume their letter; yellows are then
    /// handed out left to right while unmatched copies remain.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(feedback.to_string(), "--G-G");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut available = [0u8; ALPHABET_SIZE];

        // Letters of the answer not matched by a green
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                marks[i] = Mark::Correct;
            } else if let Some(index) = letter_index(a) {
                available[index] += 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if marks[i] == Mark::Correct {
                continue;
            }
            if let Some(index) = letter_index(g)
                && available[index] > 0
            {
                marks[i] = Mark::Present;
                available[index] -= 1;
            }
        }

        Self(marks)
    }

    /// Mark at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark(self, position: usize) -> Mark {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Wire values, one per position
    #[must_use]
    pub fn values(self) -> [u8; WORD_LENGTH] {
        self.0.map(Mark::value)
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.0 {
            let ch = match mark {
                Mark::Absent => '-',
                Mark::Present => 'Y',
                Mark::Correct => 'G',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
