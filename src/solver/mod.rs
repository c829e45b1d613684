//! Candidate narrowing and guess ranking
//!
//! Filtering, letter statistics, scoring, filler search and the session
//! that ties them together.

pub mod filler;
pub mod filter;
pub mod scoring;
mod session;
pub mod stats;

pub use filler::{FillerError, LetterSet, find_filler_words};
pub use filter::{GuessConstraint, filter};
pub use scoring::{ScoredWord, rank, score};
pub use session::{GuessOutcome, GuessRecord, Session, SessionConfig, SessionError, SessionState};
pub use stats::{LetterStatistics, aggregate};
