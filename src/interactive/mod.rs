//! Interactive TUI
//!
//! The solver suggests a guess; the player types the feedback the real game
//! showed and the board, remaining words and known constraints update.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
