//! Constraint-filtering solver
//!
//! Feedback is folded into a [`ConstraintStore`], the word population is
//! narrowed with [`filter`], and a [`Session`] drives one puzzle from the
//! first guess to solved or exhausted.

mod constraints;
mod filter;
mod opening;
mod oracle;
mod session;

pub use constraints::{ConstraintStore, FilterMode};
pub use filter::{count_consistent, filter, is_consistent};
pub use opening::{OpeningPreset, OpeningSequence};
pub use oracle::{FeedbackOracle, InteractiveOracle, Reply, SecretOracle, Verdict};
pub use session::{MAX_GUESSES, Session, SessionState, Turn};
