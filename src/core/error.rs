//! Errors raised while solving a puzzle

use super::WordError;
use std::fmt;

/// Error type for feedback ingestion, filtering and sessions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Guess and feedback have different lengths
    LengthMismatch { word: usize, feedback: usize },
    /// Feedback contained a character that is not a known symbol
    InvalidFeedbackSymbol(char),
    /// No word in the population satisfies the accumulated constraints
    EmptyPopulation,
    /// The external feedback source failed
    OracleUnavailable(String),
    /// The session is already solved or exhausted
    SessionOver,
    /// A word failed validation
    InvalidWord(WordError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { word, feedback } => write!(
                f,
                "Feedback must be the same length as the word ({word}), got {feedback}"
            ),
            Self::InvalidFeedbackSymbol(c) => {
                write!(f, "The feedback had an unknown character: '{c}'")
            }
            Self::EmptyPopulation => write!(f, "No candidate words remain"),
            Self::OracleUnavailable(reason) => {
                write!(f, "Feedback source unavailable: {reason}")
            }
            Self::SessionOver => write!(f, "The puzzle is already finished"),
            Self::InvalidWord(e) => write!(f, "Invalid word: {e}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for SolveError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}
