//! Command implementations

pub mod filler;
pub mod simple;
pub mod solve;
pub mod stats;
pub mod suggest;
pub mod test_all;

pub use filler::{FillerResult, run_filler};
pub use simple::{run_simple, run_simple_with};
pub use solve::{GuessStep, SolveResult, random_target, solve_word};
pub use stats::{StatsReport, letter_stats};
pub use suggest::{GuessInput, SuggestResult, replay, suggest};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
