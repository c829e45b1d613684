//! Wordle Assist
//!
//! Narrows Wordle candidate answers from tile feedback and ranks next
//! guesses by letter occurrence.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::Feedback;
//! use wordle_assist::solver::{Session, SessionConfig};
//! use wordle_assist::wordlists::WordCorpus;
//!
//! let corpus = WordCorpus::from_strs(&["crane", "slate", "plate", "crate"]);
//! let mut session = Session::new(&corpus, SessionConfig::default());
//!
//! // Played CRATE: C and R gray, A T E green
//! session.apply("crate", Feedback::parse("00222").unwrap()).unwrap();
//! assert_eq!(session.candidate_count(), 2);
//!
//! let best = session.best_guess().unwrap();
//! assert_eq!(best.word.text(), "plate");
//! ```

// Core domain types
pub mod core;

// Filtering, statistics, scoring and the session
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
