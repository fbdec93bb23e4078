//! Display functions for command results

use super::formatters::{create_progress_bar, distribution_bar, verdict_tiles};
use crate::commands::{SolveResult, StatsReport, distribution_rows};
use crate::solver::{ConstraintStore, SessionState, Verdict};
use colored::Colorize;

/// Print the result of solving a word
///
/// Verbose output adds the population size around each guess and the
/// constraints known after it.
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let known = known_after_each_turn(result);

    for (i, turn) in result.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            turn.guess.text().to_uppercase(),
            verdict_tiles(&turn.verdict)
        );

        if verbose {
            println!(
                "  Population: {} → {}",
                turn.population_before, turn.population_after
            );
            if let Some(Some(store)) = known.get(i) {
                println!("  Known:      {store}");
            }
        }
    }

    println!();
    match result.state {
        SessionState::Solved { guesses_used } => println!(
            "{}",
            format!("✅ Solved in {guesses_used} guesses!").green().bold()
        ),
        _ if result.gave_up => println!(
            "{}",
            format!("❌ No words left after {} guesses", result.turns.len())
                .red()
                .bold()
        ),
        _ => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.turns.len())
                .red()
                .bold()
        ),
    }
}

/// Constraints the session held after each turn
///
/// The final turn of a finished session is never ingested, so it has no entry.
fn known_after_each_turn(result: &SolveResult) -> Vec<Option<String>> {
    let mut store = ConstraintStore::with_mode(result.store.mode());
    let last = result.turns.len().saturating_sub(1);

    result
        .turns
        .iter()
        .enumerate()
        .map(|(i, turn)| {
            if i == last && result.state.is_terminal() {
                return None;
            }
            match &turn.verdict {
                Verdict::Feedback(feedback) if store.ingest(&turn.guess, feedback).is_ok() => {
                    Some(store.to_string())
                }
                _ => None,
            }
        })
        .collect()
}

/// Print statistics for one opening
pub fn print_stats_report(report: &StatsReport) {
    println!("\n{}", "═".repeat(70));
    println!(" Opening: {} ", report.opening.bright_yellow().bold());
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Games played:        {}", report.runs);
    println!(
        "  Solved:              {} {}",
        report.solved,
        format!("({:.1}%)", report.success_rate()).green()
    );
    if report.exhausted > 0 {
        println!("  Out of guesses:      {}", report.exhausted.to_string().red());
    }
    if report.gave_up > 0 {
        println!("  Gave up (no words):  {}", report.gave_up.to_string().red());
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", report.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        report.duration.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let rows = distribution_rows(report);
    let max_count = rows.iter().map(|&(_, n)| n).max().unwrap_or(0);
    for (guesses, count) in rows {
        let bar_len = distribution_bar(count, max_count, 40);
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        let percentage = if report.solved > 0 {
            count as f64 / report.solved as f64 * 100.0
        } else {
            0.0
        };
        println!("  {guesses} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }
}

/// Print a side-by-side comparison of several openings
pub fn print_stats_comparison(reports: &[StatsReport]) {
    if reports.len() < 2 {
        return;
    }

    println!("\n{}", "═".repeat(70));
    println!(" {} ", "OPENING COMPARISON".bright_cyan().bold());
    println!("{}", "═".repeat(70));

    let best = reports
        .iter()
        .map(StatsReport::success_rate)
        .fold(0.0_f64, f64::max);

    for report in reports {
        let rate = report.success_rate();
        let line = format!(
            "  {:<28} {} {:5.1}%  avg {:.2}",
            report.opening,
            create_progress_bar(rate, 100.0, 20),
            rate,
            report.average_guesses
        );
        if (rate - best).abs() < f64::EPSILON {
            println!("{}", line.bright_green().bold());
        } else {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};
    use crate::solver::{MAX_GUESSES, OpeningPreset, Session};
    use crate::wordlists::{WORDS, loader::words_from_slice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn result_of(session: &Session<'_, StdRng>, target: &str) -> SolveResult {
        SolveResult {
            target: Word::new(target).unwrap(),
            state: session.state(),
            turns: session.history().to_vec(),
            store: session.store().clone(),
            gave_up: false,
        }
    }

    #[test]
    fn exhausted_last_turn_adds_no_constraints() {
        let words = words_from_slice(WORDS);
        let mut session =
            Session::new(&words, OpeningPreset::None.into(), StdRng::seed_from_u64(1)).unwrap();
        for _ in 0..MAX_GUESSES - 1 {
            session
                .record_feedback(&Word::new("xylyl").unwrap(), Feedback::parse("00000").unwrap())
                .unwrap();
        }
        session
            .record_feedback(&Word::new("lucky").unwrap(), Feedback::parse("01110").unwrap())
            .unwrap();
        assert_eq!(session.state(), SessionState::Exhausted);

        let known = known_after_each_turn(&result_of(&session, "truck"));

        assert_eq!(known.len(), MAX_GUESSES);
        assert_eq!(known[MAX_GUESSES - 1], None);
        assert_eq!(
            known[MAX_GUESSES - 2].as_deref(),
            Some(session.store().to_string().as_str())
        );
    }

    #[test]
    fn unfinished_turns_show_growing_constraints() {
        let words = words_from_slice(WORDS);
        let mut session =
            Session::new(&words, OpeningPreset::None.into(), StdRng::seed_from_u64(1)).unwrap();
        session
            .record_feedback(&Word::new("lucky").unwrap(), Feedback::parse("01110").unwrap())
            .unwrap();

        let known = known_after_each_turn(&result_of(&session, "truck"));

        assert_eq!(known, vec![Some(session.store().to_string())]);
    }
}
