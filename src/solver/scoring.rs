//! Heuristic scoring and ranking of guesses
//!
//! A word scores the sum of occurrence counts of its distinct letters: words
//! whose letters each appear in many remaining candidates split the pool
//! best. This is a cheap stand-in for expected information gain.

use super::stats::LetterStatistics;
use crate::core::Word;
use rayon::prelude::*;

/// A word paired with its heuristic score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub score: u32,
}

/// Score a word: sum of occurrence counts over its distinct letters
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::{aggregate, score};
///
/// let words = vec![Word::new("speed").unwrap(), Word::new("crane").unwrap()];
/// let stats = aggregate(&words);
///
/// // s(1) + p(1) + e(2) + d(1), the second E is not counted again
/// assert_eq!(score(&words[0], &stats), 5);
/// ```
#[must_use]
pub fn score(word: &Word, stats: &LetterStatistics) -> u32 {
    word.distinct_letters()
        .map(|letter| stats.occurrence(letter))
        .sum()
}

/// Rank words by score, highest first, ties in ascending lexical order
///
/// Returns at most `limit` entries.
#[must_use]
pub fn rank<'a>(words: &[&'a Word], stats: &LetterStatistics, limit: usize) -> Vec<ScoredWord<'a>> {
    let mut scored: Vec<ScoredWord<'a>> = words
        .par_iter()
        .map(|&word| ScoredWord {
            word,
            score: score(word, stats),
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.word.text().cmp(b.word.text()))
    });
    scored.truncate(limit);
    scored
}

/// Evenly strided subset of at most `max` words, keeping order
///
/// Used to bound ranking cost on very large candidate sets.
#[must_use]
pub fn stride_sample<'a>(words: &[&'a Word], max: usize) -> Vec<&'a Word> {
    if max == 0 {
        return Vec::new();
    }
    let step = words.len().div_ceil(max).max(1);
    words.iter().copied().step_by(step).take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::stats::aggregate;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn score_counts_distinct_letters_once() {
        let list = words(&["trace", "crate", "react", "crack"]);
        let stats = aggregate(&list);

        // t:3 r:4 a:4 c:4 e:3 k:1
        assert_eq!(score(&list[0], &stats), 18);
        assert_eq!(score(&list[3], &stats), 13);
    }

    #[test]
    fn rank_breaks_ties_lexically_and_truncates() {
        let list = words(&["trace", "crate", "react", "crack"]);
        let stats = aggregate(&list);
        let refs: Vec<&Word> = list.iter().collect();

        let top = rank(&refs, &stats, 2);
        let pairs: Vec<(&str, u32)> = top.iter().map(|s| (s.word.text(), s.score)).collect();
        assert_eq!(pairs, [("crate", 18), ("react", 18)]);
    }

    #[test]
    fn rank_full_list_is_sorted() {
        let list = words(&["trace", "crate", "react", "crack"]);
        let stats = aggregate(&list);
        let refs: Vec<&Word> = list.iter().collect();

        let all = rank(&refs, &stats, usize::MAX);
        let order: Vec<&str> = all.iter().map(|s| s.word.text()).collect();
        assert_eq!(order, ["crate", "react", "trace", "crack"]);
    }

    #[test]
    fn rank_is_deterministic() {
        let list = words(&["crane", "slate", "irate", "crate", "grate", "trace", "speed"]);
        let stats = aggregate(&list);
        let refs: Vec<&Word> = list.iter().collect();

        assert_eq!(rank(&refs, &stats, 5), rank(&refs, &stats, 5));
        assert_eq!(score(&list[0], &stats), score(&list[0], &stats));
    }

    #[test]
    fn rank_empty() {
        let stats = LetterStatistics::default();
        assert!(rank(&[], &stats, 10).is_empty());
    }

    #[test]
    fn stride_sample_bounds_size() {
        let list = words(&["crane", "slate", "irate", "crate", "grate", "trace", "speed"]);
        let refs: Vec<&Word> = list.iter().collect();

        let sample = stride_sample(&refs, 3);
        let texts: Vec<&str> = sample.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["crane", "crate", "speed"]);

        assert_eq!(stride_sample(&refs, 100).len(), refs.len());
        assert!(stride_sample(&refs, 0).is_empty());
    }
}
