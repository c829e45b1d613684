//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_filler_result, print_solve_result, print_statistics, print_stats_report,
    print_suggest_result,
};
