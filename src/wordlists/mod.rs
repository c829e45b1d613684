//! Word lists for the helper
//!
//! Provides the embedded dictionaries compiled into the binary and loading
//! from user-supplied files.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::WordCorpus;
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use loader::CorpusError;

/// Every allowed guess as a corpus (answers included)
#[must_use]
pub fn embedded_corpus() -> WordCorpus {
    WordCorpus::from_strs(ALLOWED)
}

/// Only the answer words as a corpus
#[must_use]
pub fn answers_corpus() -> WordCorpus {
    WordCorpus::from_strs(ANSWERS)
}
