//! Word solving command
//!
//! Plays the helper against a known answer and returns the guess path.

use crate::core::{Feedback, Word};
use crate::solver::{GuessOutcome, Session, SessionConfig};
use crate::wordlists::WordCorpus;
use anyhow::{Context, Result, bail};
use rand::seq::IndexedRandom;

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub score: u32,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Pick a random target from the corpus
#[must_use]
pub fn random_target(corpus: &WordCorpus) -> Option<&Word> {
    corpus.words().choose(&mut rand::rng())
}

/// Solve `target` by always playing the top-ranked candidate
///
/// Feedback for each guess is computed against the target, so the session
/// only ever sees consistent input.
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid five-letter word
/// - The target is not in the corpus
/// - The session rejects a guess
pub fn solve_word(corpus: &WordCorpus, config: SessionConfig, target: &str) -> Result<SolveResult> {
    let target_word = Word::new(target).context("Invalid target word")?;
    if !corpus.contains(&target_word) {
        bail!("'{target_word}' is not in the word list");
    }

    let mut session = Session::new(corpus, config);
    let mut guesses: Vec<GuessStep> = Vec::new();
    let within_budget = |used: usize| config.max_guesses == 0 || used < config.max_guesses;

    while within_budget(guesses.len()) {
        let Some(best) = session.best_guess() else {
            break;
        };
        let feedback = Feedback::calculate(best.word, &target_word);
        let candidates_before = session.candidate_count();

        let outcome = session
            .apply(best.word.text(), feedback)
            .with_context(|| format!("guess {} ({})", guesses.len() + 1, best.word))?;

        guesses.push(GuessStep {
            word: best.word.text().to_string(),
            feedback,
            score: best.score,
            candidates_before,
            candidates_after: session.candidate_count(),
        });

        if feedback.is_perfect() {
            return Ok(finish(true, guesses, &target_word));
        }

        match outcome {
            GuessOutcome::Narrowed { .. } => {}
            GuessOutcome::Solved(last) => {
                // One candidate left; it still has to be played
                if within_budget(guesses.len()) {
                    guesses.push(GuessStep {
                        word: last.text().to_string(),
                        feedback: Feedback::PERFECT,
                        score: 0,
                        candidates_before: 1,
                        candidates_after: 1,
                    });
                    return Ok(finish(last == &target_word, guesses, &target_word));
                }
                break;
            }
            GuessOutcome::Contradiction { .. } | GuessOutcome::OutOfGuesses { .. } => break,
        }
    }

    Ok(finish(false, guesses, &target_word))
}

fn finish(success: bool, guesses: Vec<GuessStep>, target: &Word) -> SolveResult {
    log::debug!(
        "solve {target}: {} in {} guess(es)",
        if success { "solved" } else { "failed" },
        guesses.len()
    );
    SolveResult {
        success,
        guesses,
        target: target.text().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::embedded_corpus;

    fn corpus() -> WordCorpus {
        WordCorpus::from_strs(&["crane", "slate", "plate", "irate", "crate", "grate", "trace"])
    }

    #[test]
    fn solve_word_succeeds() {
        let corpus = corpus();
        let result = solve_word(&corpus, SessionConfig::default(), "plate").unwrap();

        assert!(result.success);
        assert_eq!(result.target, "plate");
        assert_eq!(result.guesses.last().unwrap().word, "plate");
        assert!(result.guesses.last().unwrap().feedback.is_perfect());
    }

    #[test]
    fn solve_records_history() {
        let corpus = corpus();
        let result = solve_word(&corpus, SessionConfig::default(), "grate").unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn solve_rejects_unknown_target() {
        let corpus = corpus();
        assert!(solve_word(&corpus, SessionConfig::default(), "zzzzz").is_err());
        assert!(solve_word(&corpus, SessionConfig::default(), "abc").is_err());
    }

    #[test]
    fn solve_respects_guess_budget() {
        let corpus = corpus();
        let config = SessionConfig {
            max_guesses: 1,
            ..SessionConfig::default()
        };

        for word in &corpus {
            let result = solve_word(&corpus, config, word.text()).unwrap();
            assert!(result.guesses.len() <= 1);
            assert_eq!(result.success, result.guesses[0].word == word.text());
        }
    }

    #[test]
    fn every_embedded_word_solves_without_limit() {
        let corpus = embedded_corpus();
        let config = SessionConfig {
            max_guesses: 0,
            ..SessionConfig::default()
        };

        for word in corpus.iter().step_by(211) {
            let result = solve_word(&corpus, config, word.text()).unwrap();
            assert!(result.success, "failed to solve {word}");
        }
    }

    #[test]
    fn random_target_comes_from_corpus() {
        let corpus = corpus();
        let target = random_target(&corpus).unwrap();
        assert!(corpus.contains(target));
        assert!(random_target(&WordCorpus::from_strs(&[])).is_none());
    }
}
