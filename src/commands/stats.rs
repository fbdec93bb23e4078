//! Opening statistics
//!
//! Plays many independent puzzles per opening against the local game and
//! summarises how often and how fast each opening solves.

use crate::core::{SolveError, Word};
use crate::game::Game;
use crate::solver::{
    FilterMode, MAX_GUESSES, OpeningPreset, OpeningSequence, Session, SessionState,
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Settings shared by every run
#[derive(Debug, Clone, Copy)]
pub struct StatsConfig {
    pub runs: usize,
    /// Run `i` is seeded with `base_seed + i`
    pub base_seed: u64,
    pub filter_mode: FilterMode,
}

impl StatsConfig {
    #[must_use]
    pub fn new(runs: usize, base_seed: u64) -> Self {
        Self {
            runs,
            base_seed,
            filter_mode: FilterMode::default(),
        }
    }
}

/// How a single puzzle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Solved(usize),
    Exhausted,
    /// The population emptied before the puzzle ended
    GaveUp,
}

/// Statistics for one opening
#[derive(Debug)]
pub struct StatsReport {
    pub opening: String,
    pub runs: usize,
    pub solved: usize,
    pub exhausted: usize,
    pub gave_up: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub average_guesses: f64,
    pub duration: Duration,
}

impl StatsReport {
    fn from_outcomes(opening: String, outcomes: &[RunOutcome], duration: Duration) -> Self {
        let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
        let mut exhausted = 0;
        let mut gave_up = 0;

        for outcome in outcomes {
            match outcome {
                RunOutcome::Solved(guesses) => {
                    *guess_distribution.entry(*guesses).or_insert(0) += 1;
                }
                RunOutcome::Exhausted => exhausted += 1,
                RunOutcome::GaveUp => gave_up += 1,
            }
        }

        let solved: usize = guess_distribution.values().sum();
        let total_guesses: usize = guess_distribution.iter().map(|(g, n)| g * n).sum();
        let average_guesses = if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        };

        Self {
            opening,
            runs: outcomes.len(),
            solved,
            exhausted,
            gave_up,
            guess_distribution,
            average_guesses,
            duration,
        }
    }

    /// Percentage of runs solved within six guesses
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.solved as f64 / self.runs as f64 * 100.0
        }
    }
}

/// Label for an opening, e.g. `"two (cones, trial)"`
#[must_use]
pub fn opening_label(name: &str, opening: &OpeningSequence) -> String {
    if opening.is_empty() {
        return name.to_string();
    }
    let words: Vec<&str> = opening.words().iter().map(Word::text).collect();
    format!("{name} ({})", words.join(", "))
}

/// Play one puzzle with its own game, session and random source
///
/// # Errors
///
/// Returns `SolveError::EmptyPopulation` if `words` is empty.
pub fn play_one(
    words: &[Word],
    opening: &OpeningSequence,
    filter_mode: FilterMode,
    seed: u64,
) -> Result<RunOutcome, SolveError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new(words, StdRng::from_rng(&mut rng))?;
    let mut session = Session::new(words, opening.clone(), rng)?.with_filter_mode(filter_mode);

    match session.play(&mut game) {
        Ok(SessionState::Solved { guesses_used }) => Ok(RunOutcome::Solved(guesses_used)),
        Ok(_) => Ok(RunOutcome::Exhausted),
        Err(SolveError::EmptyPopulation) => Ok(RunOutcome::GaveUp),
        Err(e) => Err(e),
    }
}

/// Run `config.runs` puzzles with one opening
///
/// Runs are independent and execute in parallel; the report does not depend
/// on scheduling.
///
/// # Errors
///
/// Returns `SolveError::EmptyPopulation` if `words` is empty.
pub fn run_stats(
    words: &[Word],
    label: &str,
    opening: &OpeningSequence,
    config: StatsConfig,
    progress: Option<&ProgressBar>,
) -> Result<StatsReport, SolveError> {
    let start = Instant::now();

    let outcomes = (0..config.runs)
        .into_par_iter()
        .map(|i| {
            let seed = config.base_seed.wrapping_add(i as u64);
            let outcome = play_one(words, opening, config.filter_mode, seed);
            if let Some(pb) = progress {
                pb.inc(1);
            }
            outcome
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StatsReport::from_outcomes(
        label.to_string(),
        &outcomes,
        start.elapsed(),
    ))
}

/// Run statistics for several openings, showing a progress bar for each
///
/// # Errors
///
/// Returns `SolveError::EmptyPopulation` if `words` is empty.
pub fn run_openings(
    words: &[Word],
    openings: &[(String, OpeningSequence)],
    config: StatsConfig,
) -> Result<Vec<StatsReport>, SolveError> {
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} {prefix:>24} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");

    openings
        .iter()
        .map(|(label, opening)| {
            let pb = ProgressBar::new(config.runs as u64);
            pb.set_style(style.clone());
            pb.set_prefix(label.clone());

            let report = run_stats(words, label, opening, config, Some(&pb))?;
            pb.finish_with_message(format!("{:.1}%", report.success_rate()));
            Ok(report)
        })
        .collect()
}

/// Every preset as a labelled opening
#[must_use]
pub fn preset_openings() -> Vec<(String, OpeningSequence)> {
    OpeningPreset::ALL
        .into_iter()
        .map(|preset| {
            let opening = OpeningSequence::from(preset);
            (opening_label(preset.name(), &opening), opening)
        })
        .collect()
}

/// Guess counts from 1 to the limit with how many runs needed each
#[must_use]
pub fn distribution_rows(report: &StatsReport) -> Vec<(usize, usize)> {
    (1..=MAX_GUESSES)
        .map(|g| (g, report.guess_distribution.get(&g).copied().unwrap_or(0)))
        .collect()
}
