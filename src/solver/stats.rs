//! Letter statistics over a word collection
//!
//! Three counts per letter, stored in arrays indexed by alphabet rank:
//! - occurrence: words containing the letter at least once
//! - frequency: total appearances across all words and positions
//! - positions: appearances at each of the five positions

use crate::core::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_at, letter_index};
use rayon::prelude::*;
use std::borrow::Borrow;

/// Per-letter occurrence, frequency and positional counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStatistics {
    word_count: usize,
    occurrences: [u32; ALPHABET_SIZE],
    frequencies: [u32; ALPHABET_SIZE],
    positions: [[u32; WORD_LENGTH]; ALPHABET_SIZE],
}

impl LetterStatistics {
    /// Add one word to the counts
    pub fn record(&mut self, word: &Word) {
        let mut seen = 0u32;

        for (position, &ch) in word.chars().iter().enumerate() {
            let Some(index) = letter_index(ch) else {
                continue;
            };
            self.frequencies[index] += 1;
            self.positions[index][position] += 1;

            if seen & (1 << index) == 0 {
                self.occurrences[index] += 1;
                seen |= 1 << index;
            }
        }

        self.word_count += 1;
    }

    /// Combine two partial results by summation
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.word_count += other.word_count;
        for i in 0..ALPHABET_SIZE {
            self.occurrences[i] += other.occurrences[i];
            self.frequencies[i] += other.frequencies[i];
            for (mine, theirs) in self.positions[i].iter_mut().zip(other.positions[i]) {
                *mine += theirs;
            }
        }
        self
    }

    /// Number of words aggregated
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Words containing `letter` at least once (0 for non-letters)
    #[must_use]
    pub fn occurrence(&self, letter: u8) -> u32 {
        letter_index(letter).map_or(0, |i| self.occurrences[i])
    }

    /// Total appearances of `letter`
    #[must_use]
    pub fn frequency(&self, letter: u8) -> u32 {
        letter_index(letter).map_or(0, |i| self.frequencies[i])
    }

    /// Appearances of `letter` at each position
    #[must_use]
    pub fn positions(&self, letter: u8) -> [u32; WORD_LENGTH] {
        letter_index(letter).map_or([0; WORD_LENGTH], |i| self.positions[i])
    }

    #[inline]
    #[must_use]
    pub const fn occurrences(&self) -> &[u32; ALPHABET_SIZE] {
        &self.occurrences
    }

    #[inline]
    #[must_use]
    pub const fn frequencies(&self) -> &[u32; ALPHABET_SIZE] {
        &self.frequencies
    }

    /// Letters by occurrence count, highest first, ties alphabetical
    #[must_use]
    pub fn top_occurrences(&self, n: usize) -> Vec<(u8, u32)> {
        ranked(&self.occurrences, n)
    }

    /// Letters by frequency count, highest first, ties alphabetical
    #[must_use]
    pub fn top_frequencies(&self, n: usize) -> Vec<(u8, u32)> {
        ranked(&self.frequencies, n)
    }
}

fn ranked(counts: &[u32; ALPHABET_SIZE], n: usize) -> Vec<(u8, u32)> {
    let mut letters: Vec<(u8, u32)> = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| (letter_at(i), count))
        .collect();
    letters.sort_by(|(la, ca), (lb, cb)| cb.cmp(ca).then(la.cmp(lb)));
    letters.truncate(n);
    letters
}

/// Compute letter statistics over a word collection
///
/// Runs in parallel; partial counts are summed, so the result does not
/// depend on scheduling or input order. An empty collection yields all zeros.
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::aggregate;
///
/// let words = vec![Word::new("abcde").unwrap(), Word::new("aabbc").unwrap()];
/// let stats = aggregate(&words);
///
/// assert_eq!(stats.occurrence(b'a'), 2);
/// assert_eq!(stats.frequency(b'a'), 3);
/// assert_eq!(stats.positions(b'a'), [2, 1, 0, 0, 0]);
/// ```
#[must_use]
pub fn aggregate<W>(words: &[W]) -> LetterStatistics
where
    W: Borrow<Word> + Sync,
{
    words
        .par_iter()
        .fold(LetterStatistics::default, |mut acc, word| {
            acc.record(word.borrow());
            acc
        })
        .reduce(LetterStatistics::default, LetterStatistics::merge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn occurrence_counted_once_per_word() {
        let stats = aggregate(&words(&["abcde", "aabbc"]));

        assert_eq!(stats.word_count(), 2);
        assert_eq!(stats.occurrence(b'a'), 2);
        assert_eq!(stats.frequency(b'a'), 3);
        assert_eq!(stats.positions(b'a'), [2, 1, 0, 0, 0]);

        assert_eq!(stats.occurrence(b'b'), 2);
        assert_eq!(stats.frequency(b'b'), 3);
        assert_eq!(stats.positions(b'b'), [0, 1, 1, 1, 0]);

        assert_eq!(stats.occurrence(b'z'), 0);
    }

    #[test]
    fn empty_collection_is_all_zero() {
        let empty: Vec<Word> = Vec::new();
        let stats = aggregate(&empty);
        assert_eq!(stats, LetterStatistics::default());
        assert_eq!(stats.word_count(), 0);
    }

    #[test]
    fn non_letters_are_ignored() {
        let stats = aggregate(&words(&["crane"]));
        assert_eq!(stats.occurrence(b'#'), 0);
        assert_eq!(stats.positions(b'A'), [0; WORD_LENGTH]);
    }

    #[test]
    fn totals_are_consistent() {
        let list = words(&["speed", "geese", "abbey", "crane", "error", "llama", "eerie"]);
        let stats = aggregate(&list);

        for i in 0..ALPHABET_SIZE {
            let letter = letter_at(i);
            let positional: u32 = stats.positions(letter).iter().sum();
            assert_eq!(positional, stats.frequency(letter));
            assert!(stats.occurrence(letter) <= stats.frequency(letter));
            assert!(stats.occurrence(letter) as usize <= list.len());
        }

        let total: u32 = stats.frequencies().iter().sum();
        assert_eq!(total as usize, list.len() * WORD_LENGTH);
    }

    #[test]
    fn parallel_matches_sequential() {
        let list = words(&["crane", "slate", "irate", "crate", "grate", "trace", "speed"]);
        let mut sequential = LetterStatistics::default();
        for word in &list {
            sequential.record(word);
        }
        assert_eq!(aggregate(&list), sequential);

        let refs: Vec<&Word> = list.iter().collect();
        assert_eq!(aggregate(&refs), sequential);
    }

    #[test]
    fn top_occurrences_break_ties_alphabetically() {
        let stats = aggregate(&words(&["crane", "slate"]));
        // a, e appear in both; then c, l, n, r, s, t once each
        let top = stats.top_occurrences(4);
        assert_eq!(top, vec![(b'a', 2), (b'e', 2), (b'c', 1), (b'l', 1)]);
    }
}
