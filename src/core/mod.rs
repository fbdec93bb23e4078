//! Core domain types for Wordle
//!
//! Words, per-letter feedback and the error type shared by the solver.
//! Nothing here performs I/O.

mod error;
mod feedback;
mod word;

pub use error::SolveError;
pub use feedback::{Feedback, Mark};
pub use word::{WORD_LENGTH, Word, WordError};
