//! Word solving command
//!
//! Runs one session against a known secret and returns the solution path.

use crate::core::{SolveError, Word};
use crate::solver::{
    ConstraintStore, FilterMode, OpeningSequence, SecretOracle, Session, SessionState, Turn,
};
use rand::Rng;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub opening: OpeningSequence,
    pub filter_mode: FilterMode,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String, opening: OpeningSequence) -> Self {
        Self {
            target,
            opening,
            filter_mode: FilterMode::default(),
        }
    }

    #[must_use]
    pub const fn with_filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = mode;
        self
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: Word,
    pub state: SessionState,
    pub turns: Vec<Turn>,
    /// Constraints known when the session ended
    pub store: ConstraintStore,
    /// True if the feedback ruled out every word before the end
    pub gave_up: bool,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.state, SessionState::Solved { .. })
    }
}

/// Solve `config.target` by random guessing from the filtered population
///
/// The target does not have to be in `words`; a session that runs out of
/// candidates gives up instead of failing.
///
/// # Errors
///
/// Returns an error if the target word is invalid or `words` is empty.
pub fn solve_word<R: Rng>(
    config: SolveConfig,
    words: &[Word],
    rng: R,
) -> Result<SolveResult, SolveError> {
    let target = Word::new(&config.target)?;
    let mut oracle = SecretOracle::new(target.clone());
    let mut session =
        Session::new(words, config.opening, rng)?.with_filter_mode(config.filter_mode);

    let gave_up = match session.play(&mut oracle) {
        Ok(_) => false,
        Err(SolveError::EmptyPopulation) => true,
        Err(e) => return Err(e),
    };

    Ok(SolveResult {
        target,
        state: session.state(),
        turns: session.history().to_vec(),
        store: session.store().clone(),
        gave_up,
    })
}
