//! Suggestion command
//!
//! Replays guesses given on the command line and ranks what remains.

use crate::core::{Feedback, Word};
use crate::solver::{
    GuessOutcome, GuessRecord, LetterStatistics, ScoredWord, Session, SessionConfig,
};
use crate::wordlists::WordCorpus;
use anyhow::{Context, Result, bail};
use std::str::FromStr;

/// A guess and its feedback, written `WORD:MARKS` (e.g. `crane:01200`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessInput {
    pub word: String,
    pub feedback: Feedback,
}

impl FromStr for GuessInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, marks) = s
            .split_once([':', '='])
            .ok_or_else(|| format!("Expected WORD:MARKS, got '{s}'"))?;

        let word = Word::new(word).map_err(|e| format!("Invalid word '{word}': {e}"))?;
        let feedback = Feedback::parse(marks).map_err(|e| e.to_string())?;

        Ok(Self {
            word: word.text().to_string(),
            feedback,
        })
    }
}

/// Candidates and rankings after replaying guesses
pub struct SuggestResult<'a> {
    pub history: Vec<GuessRecord>,
    pub candidates: Vec<&'a Word>,
    pub suggestions: Vec<ScoredWord<'a>>,
    pub statistics: LetterStatistics,
}

/// Replay guesses into a fresh session
///
/// A contradiction is an error here, since a one-shot run has nothing to
/// fall back to.
///
/// # Errors
///
/// Returns an error if a guess is rejected or the feedback leaves no candidates.
pub fn replay<'a>(
    corpus: &'a WordCorpus,
    config: SessionConfig,
    guesses: &[GuessInput],
) -> Result<Session<'a>> {
    let mut session = Session::new(corpus, config);

    for (turn, input) in guesses.iter().enumerate() {
        let outcome = session
            .apply(&input.word, input.feedback)
            .with_context(|| format!("guess {} ({})", turn + 1, input.word))?;

        if let GuessOutcome::Contradiction { .. } = outcome {
            bail!(
                "No words match your criteria after guess {} ({} {}). Please check your inputs.",
                turn + 1,
                input.word,
                input.feedback
            );
        }
    }

    Ok(session)
}

/// Replay guesses and rank the remaining candidates
///
/// # Errors
///
/// Returns an error if replaying the guesses fails.
pub fn suggest<'a>(
    corpus: &'a WordCorpus,
    config: SessionConfig,
    guesses: &[GuessInput],
    limit: usize,
) -> Result<SuggestResult<'a>> {
    let session = replay(corpus, config, guesses)?;

    Ok(SuggestResult {
        history: session.history().to_vec(),
        candidates: session.candidates().to_vec(),
        suggestions: session.suggestions(limit),
        statistics: session.statistics(),
    })
}
