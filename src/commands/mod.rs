//! Command implementations

pub mod simple;
pub mod solve;
pub mod stats;

pub use simple::{SimpleSummary, run_simple, run_simple_with};
pub use solve::{SolveConfig, SolveResult, solve_word};
pub use stats::{
    RunOutcome, StatsConfig, StatsReport, distribution_rows, opening_label, play_one,
    preset_openings, run_openings, run_stats,
};
