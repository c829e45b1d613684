//! Letter statistics command
//!
//! Replays guesses and reports letter statistics for what remains.

use super::suggest::{GuessInput, replay};
use crate::solver::{LetterStatistics, SessionConfig};
use crate::wordlists::WordCorpus;
use anyhow::Result;

/// Statistics over the candidates left after a set of guesses
#[derive(Debug, Clone)]
pub struct StatsReport {
    pub guesses: usize,
    pub candidates: usize,
    pub statistics: LetterStatistics,
}

/// Replay guesses and aggregate letter statistics over the candidates
///
/// # Errors
///
/// Returns an error if replaying the guesses fails.
pub fn letter_stats(
    corpus: &WordCorpus,
    config: SessionConfig,
    guesses: &[GuessInput],
) -> Result<StatsReport> {
    let session = replay(corpus, config, guesses)?;

    Ok(StatsReport {
        guesses: session.guesses_used(),
        candidates: session.candidate_count(),
        statistics: session.statistics(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_cover_remaining_candidates() {
        let corpus = WordCorpus::from_strs(&["crane", "slate", "plate", "crate"]);
        let guesses: Vec<GuessInput> = vec!["crate:00222".parse().unwrap()];
        let report = letter_stats(&corpus, SessionConfig::default(), &guesses).unwrap();

        assert_eq!(report.guesses, 1);
        assert_eq!(report.candidates, 2);
        assert_eq!(report.statistics.word_count(), 2);
        assert_eq!(report.statistics.occurrence(b'a'), 2);
        assert_eq!(report.statistics.occurrence(b'p'), 1);
        assert_eq!(report.statistics.occurrence(b'c'), 0);
    }

    #[test]
    fn stats_without_guesses_cover_corpus() {
        let corpus = WordCorpus::from_strs(&["crane", "slate"]);
        let report = letter_stats(&corpus, SessionConfig::default(), &[]).unwrap();
        assert_eq!(report.candidates, 2);
        assert_eq!(report.statistics.frequency(b'a'), 2);
    }
}
