//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::{ColoredString, Colorize};

/// Upper-case display form of a letter byte
#[must_use]
pub fn letter(ch: u8) -> char {
    char::from(ch).to_ascii_uppercase()
}

/// Comma-separated word list, cut off after `max` entries
#[must_use]
pub fn format_word_list(words: &[&Word], max: usize) -> String {
    let mut out = words
        .iter()
        .take(max)
        .map(|w| w.text())
        .collect::<Vec<_>>()
        .join(", ");

    if words.len() > max {
        out.push_str(&format!(" ... and {} more", words.len() - max));
    }
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One guess letter painted as its tile
#[must_use]
pub fn colored_tile(ch: u8, mark: Mark) -> ColoredString {
    let text = format!(" {} ", letter(ch));
    match mark {
        Mark::Correct => text.black().on_green().bold(),
        Mark::Present => text.black().on_yellow().bold(),
        Mark::Absent => text.white().on_bright_black(),
    }
}

/// A guess painted with its feedback, tile by tile
#[must_use]
pub fn colored_guess(word: &str, feedback: Feedback) -> String {
    word.bytes()
        .zip(feedback.marks())
        .map(|(ch, &mark)| colored_tile(ch, mark).to_string())
        .collect()
}
