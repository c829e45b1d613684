//! Game session: owns the candidate set and drives the lifecycle

use super::filler::{FillerError, find_filler_words};
use super::filter::filter;
use super::scoring::{ScoredWord, rank, stride_sample};
use super::stats::{LetterStatistics, aggregate};
use crate::core::{Feedback, FeedbackError, Word, WordError};
use crate::wordlists::WordCorpus;
use std::fmt;

/// Session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Guess budget; 0 disables the limit
    pub max_guesses: usize,
    /// Reject guesses that are not dictionary words
    pub require_dictionary_word: bool,
    /// Restore the full corpus when feedback leaves no candidates
    pub auto_reset: bool,
    /// Rank an evenly strided subset when more candidates than this remain
    pub max_ranked: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_guesses: 6,
            require_dictionary_word: true,
            auto_reset: true,
            max_ranked: None,
        }
    }
}

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Every corpus word is a candidate
    FullCorpus,
    /// Feedback applied, several candidates remain
    Filtering,
    /// Exactly one candidate remains
    Solved,
    /// No candidate is consistent with the feedback
    Exhausted,
    /// Guess budget spent with several candidates left
    ExhaustedGuesses,
}

impl SessionState {
    /// States that accept no further guesses until reset
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted | Self::ExhaustedGuesses)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FullCorpus => "full corpus",
            Self::Filtering => "filtering",
            Self::Solved => "solved",
            Self::Exhausted => "no candidates left",
            Self::ExhaustedGuesses => "out of guesses",
        };
        f.write_str(name)
    }
}

/// Result of applying one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome<'a> {
    /// Several candidates remain
    Narrowed { remaining: usize },
    /// A single candidate remains
    Solved(&'a Word),
    /// The feedback contradicts itself or earlier guesses
    Contradiction { reset: bool },
    /// The guess budget is spent
    OutOfGuesses { remaining: usize },
}

/// Error type for a rejected guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Not a well-formed five-letter word
    InvalidGuess(WordError),
    /// Feedback values outside the three marks
    InvalidFeedback(FeedbackError),
    /// Well-formed but not in the dictionary
    UnknownWord(String),
    /// The session is finished and needs a reset
    GameOver(SessionState),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(err) => write!(f, "Invalid guess: {err}"),
            Self::InvalidFeedback(err) => write!(f, "Invalid feedback: {err}"),
            Self::UnknownWord(word) => write!(f, "'{word}' is not a valid word"),
            Self::GameOver(state) => write!(f, "Game is over ({state}); reset to play again"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(err) => Some(err),
            Self::InvalidFeedback(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WordError> for SessionError {
    fn from(err: WordError) -> Self {
        Self::InvalidGuess(err)
    }
}

impl From<FeedbackError> for SessionError {
    fn from(err: FeedbackError) -> Self {
        Self::InvalidFeedback(err)
    }
}

/// One applied guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// An active game session
///
/// Borrows the corpus and owns the working candidate set.
///
/// # Examples
/// ```
/// use wordle_assist::core::Feedback;
/// use wordle_assist::solver::{GuessOutcome, Session, SessionConfig};
/// use wordle_assist::wordlists::WordCorpus;
///
/// let corpus = WordCorpus::from_strs(&["crane", "slate", "plate", "irate"]);
/// let mut session = Session::new(&corpus, SessionConfig::default());
///
/// let feedback = Feedback::parse("--GGG").unwrap();
/// let outcome = session.apply("irate", feedback).unwrap();
/// assert_eq!(outcome, GuessOutcome::Narrowed { remaining: 2 });
/// ```
#[derive(Debug, Clone)]
pub struct Session<'a> {
    corpus: &'a WordCorpus,
    config: SessionConfig,
    candidates: Vec<&'a Word>,
    history: Vec<GuessRecord>,
    state: SessionState,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(corpus: &'a WordCorpus, config: SessionConfig) -> Self {
        Self {
            corpus,
            config,
            candidates: corpus.iter().collect(),
            history: Vec::new(),
            state: SessionState::FullCorpus,
        }
    }

    #[inline]
    #[must_use]
    pub const fn corpus(&self) -> &'a WordCorpus {
        self.corpus
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    /// Guesses left in the budget, `None` when unlimited
    #[must_use]
    pub fn guesses_left(&self) -> Option<usize> {
        (self.config.max_guesses > 0)
            .then(|| self.config.max_guesses.saturating_sub(self.history.len()))
    }

    /// Validate guess text against the word rules and the dictionary
    ///
    /// # Errors
    /// `InvalidGuess` for malformed text, `UnknownWord` when dictionary
    /// validation is on and the word is not in the corpus.
    pub fn validate_guess(&self, text: &str) -> Result<Word, SessionError> {
        let word = Word::new(text)?;
        if self.config.require_dictionary_word && !self.corpus.contains(&word) {
            return Err(SessionError::UnknownWord(word.text().to_string()));
        }
        Ok(word)
    }

    /// Apply a guess and its feedback
    ///
    /// Validation happens before any change; a rejected guess leaves the
    /// session untouched.
    ///
    /// # Errors
    /// `GameOver` in a terminal state, otherwise the errors of
    /// [`Session::validate_guess`].
    pub fn apply(
        &mut self,
        guess: &str,
        feedback: Feedback,
    ) -> Result<GuessOutcome<'a>, SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::GameOver(self.state));
        }
        let guess = self.validate_guess(guess)?;

        let candidates_before = self.candidates.len();
        self.candidates = filter(&self.candidates, &guess, feedback);
        let candidates_after = self.candidates.len();

        log::debug!("{guess} {feedback}: {candidates_before} -> {candidates_after} candidates");
        self.history.push(GuessRecord {
            guess,
            feedback,
            candidates_before,
            candidates_after,
        });

        if candidates_after == 0 {
            log::warn!("feedback left no candidates after {} guess(es)", self.history.len());
            if self.config.auto_reset {
                self.reset();
                return Ok(GuessOutcome::Contradiction { reset: true });
            }
            self.state = SessionState::Exhausted;
            return Ok(GuessOutcome::Contradiction { reset: false });
        }

        if candidates_after == 1 {
            self.state = SessionState::Solved;
            return Ok(GuessOutcome::Solved(self.candidates[0]));
        }

        if self.guesses_left() == Some(0) {
            self.state = SessionState::ExhaustedGuesses;
            return Ok(GuessOutcome::OutOfGuesses {
                remaining: candidates_after,
            });
        }

        self.state = SessionState::Filtering;
        Ok(GuessOutcome::Narrowed {
            remaining: candidates_after,
        })
    }

    /// Apply feedback given as wire values {0, 1, 2}
    ///
    /// # Errors
    /// `InvalidFeedback` for malformed values, otherwise as [`Session::apply`].
    pub fn apply_values(
        &mut self,
        guess: &str,
        values: &[u8],
    ) -> Result<GuessOutcome<'a>, SessionError> {
        let feedback = Feedback::from_values(values)?;
        self.apply(guess, feedback)
    }

    /// Restore the full corpus and clear the history
    pub fn reset(&mut self) {
        log::info!("session reset to {} words", self.corpus.len());
        self.candidates = self.corpus.iter().collect();
        self.history.clear();
        self.state = SessionState::FullCorpus;
    }

    /// Letter statistics over the current candidates
    #[must_use]
    pub fn statistics(&self) -> LetterStatistics {
        aggregate(&self.candidates)
    }

    /// Ranked suggestions among the current candidates
    ///
    /// Statistics always cover every candidate; with `max_ranked` set, only
    /// an evenly strided subset is scored.
    #[must_use]
    pub fn suggestions(&self, limit: usize) -> Vec<ScoredWord<'a>> {
        let stats = self.statistics();
        match self.config.max_ranked {
            Some(max) if self.candidates.len() > max => {
                rank(&stride_sample(&self.candidates, max), &stats, limit)
            }
            _ => rank(&self.candidates, &stats, limit),
        }
    }

    /// The top-ranked candidate
    #[must_use]
    pub fn best_guess(&self) -> Option<ScoredWord<'a>> {
        self.suggestions(1).into_iter().next()
    }

    /// Filler words from the full corpus
    ///
    /// # Errors
    /// Returns `FillerError` for an invalid letter query.
    pub fn filler_words(&self, letters: &str) -> Result<Vec<&'a Word>, FillerError> {
        find_filler_words(self.corpus, letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> WordCorpus {
        WordCorpus::from_strs(&["crane", "slate", "plate", "irate", "crate", "grate", "trace"])
    }

    fn fb(s: &str) -> Feedback {
        Feedback::parse(s).unwrap()
    }

    #[test]
    fn new_session_holds_full_corpus() {
        let corpus = corpus();
        let session = Session::new(&corpus, SessionConfig::default());
        assert_eq!(session.state(), SessionState::FullCorpus);
        assert_eq!(session.candidate_count(), corpus.len());
        assert_eq!(session.guesses_left(), Some(6));
    }

    #[test]
    fn narrowing_moves_to_filtering() {
        let corpus = corpus();
        let mut session = Session::new(&corpus, SessionConfig::default());

        // -- A T E green with C, R gray: slate, plate
        let outcome = session.apply("crate", fb("--GGG")).unwrap();
        assert_eq!(outcome, GuessOutcome::Narrowed { remaining: 2 });
        assert_eq!(session.state(), SessionState::Filtering);

        let record = &session.history()[0];
        assert_eq!(record.candidates_before, 7);
        assert_eq!(record.candidates_after, 2);
    }

    #[test]
    fn single_candidate_is_solved() {
        let corpus = corpus();
        let mut session = Session::new(&corpus, SessionConfig::default());

        let outcome = session.apply("plate", fb("GGGGG")).unwrap();
        assert_eq!(outcome, GuessOutcome::Solved(corpus.get("plate").unwrap()));
        assert_eq!(session.state(), SessionState::Solved);

        assert_eq!(
            session.apply("crane", fb("-----")),
            Err(SessionError::GameOver(SessionState::Solved))
        );
    }

    #[test]
    fn contradiction_auto_resets() {
        let corpus = corpus();
        let mut session = Session::new(&corpus, SessionConfig::default());

        session.apply("crate", fb("--GGG")).unwrap();
        // IRATE was already ruled out by the gray R
        let outcome = session.apply("irate", fb("GGGGG")).unwrap();

        assert_eq!(outcome, GuessOutcome::Contradiction { reset: true });
        assert_eq!(session.state(), SessionState::FullCorpus);
        assert_eq!(session.candidate_count(), corpus.len());
        assert!(session.history().is_empty());
    }

    #[test]
    fn contradiction_without_auto_reset_stays_exhausted() {
        let corpus = corpus();
        let config = SessionConfig {
            auto_reset: false,
            ..SessionConfig::default()
        };
        let mut session = Session::new(&corpus, config);

        let outcome = session.apply("crane", fb("YYYYY")).unwrap();
        assert_eq!(outcome, GuessOutcome::Contradiction { reset: false });
        assert_eq!(session.state(), SessionState::Exhausted);
        assert_eq!(session.candidate_count(), 0);

        session.reset();
        assert_eq!(session.state(), SessionState::FullCorpus);
        assert_eq!(session.candidate_count(), corpus.len());
    }

    #[test]
    fn guess_budget_runs_out() {
        let corpus = corpus();
        let config = SessionConfig {
            max_guesses: 1,
            ..SessionConfig::default()
        };
        let mut session = Session::new(&corpus, config);

        let outcome = session.apply("crate", fb("--GGG")).unwrap();
        assert_eq!(outcome, GuessOutcome::OutOfGuesses { remaining: 2 });
        assert_eq!(session.state(), SessionState::ExhaustedGuesses);
        assert_eq!(session.guesses_left(), Some(0));
    }

    #[test]
    fn unlimited_budget() {
        let corpus = corpus();
        let config = SessionConfig {
            max_guesses: 0,
            ..SessionConfig::default()
        };
        let session = Session::new(&corpus, config);
        assert_eq!(session.guesses_left(), None);
    }

    #[test]
    fn invalid_guess_leaves_state_untouched() {
        let corpus = corpus();
        let mut session = Session::new(&corpus, SessionConfig::default());

        assert_eq!(
            session.apply("cran", fb("-----")),
            Err(SessionError::InvalidGuess(WordError::InvalidLength(4)))
        );
        assert_eq!(
            session.apply("zzzzz", fb("-----")),
            Err(SessionError::UnknownWord("zzzzz".to_string()))
        );
        assert_eq!(session.state(), SessionState::FullCorpus);
        assert_eq!(session.candidate_count(), corpus.len());
        assert!(session.history().is_empty());
    }

    #[test]
    fn unknown_words_allowed_when_configured() {
        let corpus = corpus();
        let config = SessionConfig {
            require_dictionary_word: false,
            ..SessionConfig::default()
        };
        let mut session = Session::new(&corpus, config);

        let outcome = session.apply("zzzzz", fb("-----")).unwrap();
        assert_eq!(outcome, GuessOutcome::Narrowed { remaining: 7 });
    }

    #[test]
    fn embedded_dictionary_accepts_common_openers() {
        let corpus = crate::wordlists::embedded_corpus();
        let mut session = Session::new(&corpus, SessionConfig::default());

        let outcome = session.apply("adieu", fb("-----")).unwrap();
        assert!(matches!(outcome, GuessOutcome::Narrowed { .. }));

        let has = |text: &str| session.candidates().iter().any(|w| w.text() == text);
        assert!(has("frown"));
        assert!(!has("crane"));

        for opener in ["roate", "salet", "reset"] {
            assert!(session.validate_guess(opener).is_ok(), "{opener} rejected");
        }
    }

    #[test]
    fn apply_values_uses_wire_encoding() {
        let corpus = corpus();
        let mut session = Session::new(&corpus, SessionConfig::default());

        let outcome = session.apply_values("crate", &[0, 0, 2, 2, 2]).unwrap();
        assert_eq!(outcome, GuessOutcome::Narrowed { remaining: 2 });
        assert_eq!(
            session.apply_values("crate", &[0, 0, 3, 2, 2]),
            Err(SessionError::InvalidFeedback(FeedbackError::InvalidValue(3)))
        );
    }

    #[test]
    fn suggestions_rank_candidates() {
        let corpus = corpus();
        let session = Session::new(&corpus, SessionConfig::default());

        let all = session.suggestions(usize::MAX);
        assert_eq!(all.len(), corpus.len());
        assert!(all.windows(2).all(|pair| pair[0].score >= pair[1].score));
        assert_eq!(session.best_guess(), all.first().copied());
    }

    #[test]
    fn suggestions_respect_max_ranked() {
        let corpus = corpus();
        let config = SessionConfig {
            max_ranked: Some(3),
            ..SessionConfig::default()
        };
        let session = Session::new(&corpus, config);
        assert_eq!(session.suggestions(usize::MAX).len(), 3);
    }

    #[test]
    fn filler_words_search_full_corpus() {
        let corpus = corpus();
        let mut session = Session::new(&corpus, SessionConfig::default());
        session.apply("crate", fb("--GGG")).unwrap();

        // CRATE is no longer a candidate but still a filler word
        let found = session.filler_words("craet").unwrap();
        let texts: Vec<&str> = found.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["crate", "trace"]);
    }
}
