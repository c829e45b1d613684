//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, GameTally, InputMode, Message, MessageStyle, SUGGESTION_COUNT, run_tui};
