//! The immutable dictionary of legal words

use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

/// Full dictionary of legal words, loaded once and never mutated
///
/// Keeps first-seen order for deterministic output and a hash index for
/// membership tests.
#[derive(Debug, Clone, Default)]
pub struct WordCorpus {
    words: Vec<Word>,
    index: FxHashSet<[u8; WORD_LENGTH]>,
}

impl WordCorpus {
    /// Build a corpus from already-validated words
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(*word.chars()))
            .collect();

        Self { words, index }
    }

    /// Build a corpus from string slices, skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::wordlists::WordCorpus;
    ///
    /// let corpus = WordCorpus::from_strs(&["crane", "toolong", "slate", "crane"]);
    /// assert_eq!(corpus.len(), 2);
    /// assert!(corpus.contains_str("SLATE"));
    /// ```
    #[must_use]
    pub fn from_strs(slice: &[&str]) -> Self {
        Self::new(slice.iter().filter_map(|&s| Word::new(s).ok()))
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.chars())
    }

    /// Membership test on raw text (case-insensitive)
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    /// Look up the corpus copy of a word
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        if !self.contains(&word) {
            return None;
        }
        self.words.iter().find(|w| w.chars() == word.chars())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a WordCorpus {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
