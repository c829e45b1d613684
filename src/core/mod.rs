//! Core domain types for the word game
//!
//! Words and tile feedback. Pure values with no I/O.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError, letter_at, letter_index};
