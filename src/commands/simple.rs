//! Simple interactive CLI mode
//!
//! Text-based solver without TUI: the solver guesses, a person types the
//! feedback the real game showed.

use crate::core::{SolveError, Word};
use crate::output::formatters::verdict_tiles;
use crate::solver::{InteractiveOracle, Reply, Session, SessionState};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Outcome counts of a simple-mode run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimpleSummary {
    pub solved: usize,
    pub exhausted: usize,
    pub abandoned: usize,
}

/// Run the simple interactive mode on standard input and output
///
/// # Errors
///
/// Returns an error if writing to the terminal fails.
pub fn run_simple<R: Rng>(session: Session<'_, R>) -> Result<SimpleSummary, SolveError> {
    print_banner(&mut io::stdout()).map_err(unavailable)?;
    let mut oracle = InteractiveOracle::stdio();
    run_simple_with(session, &mut oracle)
}

fn unavailable(e: io::Error) -> SolveError {
    SolveError::OracleUnavailable(e.to_string())
}

fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║              Wordle Sieve - Interactive Mode                 ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "I'll suggest guesses. After each one, enter the feedback:\n")?;
    writeln!(out, "  - 2, G/g or 🟩 for green (correct position)")?;
    writeln!(out, "  - 1, Y/y or 🟨 for yellow (elsewhere in the word)")?;
    writeln!(out, "  - 0, -, _ or ⬜ for gray (not in the word)")?;
    writeln!(out, "  - Or type 'win' if the guess was right!\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new game\n")
}

/// Run the simple mode against any line source
///
/// Ends when the person quits or the input closes.
///
/// # Errors
///
/// Returns an error if writing to `oracle`'s output fails.
pub fn run_simple_with<R, I, W>(
    mut session: Session<'_, R>,
    oracle: &mut InteractiveOracle<I, W>,
) -> Result<SimpleSummary, SolveError>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    let mut summary = SimpleSummary::default();

    loop {
        let guess = match session.next_guess() {
            Ok(guess) => guess,
            Err(SolveError::EmptyPopulation) => {
                writeln!(
                    oracle.writer(),
                    "\n{}",
                    "❌ No words remain! The feedback may be incorrect. Starting over.".red()
                )
                .map_err(unavailable)?;
                summary.abandoned += 1;
                session.reset();
                continue;
            }
            Err(e) => return Err(e),
        };

        print_turn(oracle.writer(), &session, &guess).map_err(unavailable)?;

        let reply = match oracle.read_reply(&guess) {
            Ok(reply) => reply,
            Err(SolveError::OracleUnavailable(_)) => Reply::Quit,
            Err(e) => return Err(e),
        };

        let verdict = match reply {
            Reply::Verdict(verdict) => verdict,
            Reply::NewGame => {
                writeln!(oracle.writer(), "\n🔄 New game started!\n").map_err(unavailable)?;
                summary.abandoned += 1;
                session.reset();
                continue;
            }
            Reply::Quit => {
                writeln!(oracle.writer(), "\n👋 Thanks for playing!\n").map_err(unavailable)?;
                return Ok(summary);
            }
        };

        match session.record(&guess, verdict)? {
            SessionState::AwaitingGuess { .. } => {}
            SessionState::Solved { guesses_used } => {
                summary.solved += 1;
                print_finish(oracle.writer(), &session, true, guesses_used)
                    .map_err(unavailable)?;
                session.reset();
            }
            SessionState::Exhausted => {
                summary.exhausted += 1;
                print_finish(oracle.writer(), &session, false, session.guesses_used())
                    .map_err(unavailable)?;
                session.reset();
            }
        }
    }
}

fn print_turn<R: Rng, W: Write>(
    out: &mut W,
    session: &Session<'_, R>,
    guess: &Word,
) -> io::Result<()> {
    let population = session.population();

    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Turn {}: {} words remaining",
        session.guesses_used() + 1,
        population.len()
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")?;

    let source = if session.in_opening() { "opening" } else { "random pick" };
    writeln!(
        out,
        "\n📊 Suggested guess: {} ({source})",
        guess.text().to_uppercase().bright_yellow().bold()
    )?;
    if !session.store().is_empty() {
        writeln!(out, "   Known: {}", session.store())?;
    }

    if population.len() <= 10 {
        writeln!(out, "\nRemaining words:")?;
        for word in population {
            writeln!(out, "  • {}", word.text().to_uppercase())?;
        }
    }
    writeln!(out)
}

fn print_finish<R: Rng, W: Write>(
    out: &mut W,
    session: &Session<'_, R>,
    solved: bool,
    guesses_used: usize,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    if solved {
        writeln!(
            out,
            "  {} in {} {}",
            "🎉 Solved".bright_green().bold(),
            guesses_used.to_string().bright_cyan().bold(),
            if guesses_used == 1 { "guess" } else { "guesses" }
        )?;
    } else {
        writeln!(out, "  {}", "❌ Out of guesses".red().bold())?;
    }

    writeln!(out, "\n  Guess history:")?;
    for (i, turn) in session.history().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            turn.guess.text().to_uppercase().bright_white().bold(),
            verdict_tiles(&turn.verdict)
        )?;
    }
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::OpeningPreset;
    use crate::wordlists::{WORDS, loader::words_from_slice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn run(words: &[Word], preset: OpeningPreset, input: &str) -> (SimpleSummary, String) {
        let session = Session::new(words, preset.into(), StdRng::seed_from_u64(11)).unwrap();
        let mut output = Vec::new();
        let mut oracle = InteractiveOracle::new(Cursor::new(input.to_string()), &mut output);
        let summary = run_simple_with(session, &mut oracle).unwrap();
        drop(oracle);
        (summary, String::from_utf8_lossy(&output).into_owned())
    }

    #[test]
    fn win_on_first_guess_then_quit() {
        let words = words_from_slice(WORDS);
        let (summary, shown) = run(&words, OpeningPreset::One, "win\nquit\n");

        assert_eq!(summary.solved, 1);
        assert!(shown.contains("TALES"));
        assert!(shown.contains("Thanks for playing"));
    }

    #[test]
    fn bad_feedback_is_asked_again() {
        let words = words_from_slice(WORDS);
        let (summary, shown) = run(&words, OpeningPreset::One, "0x000\n22222\nq\n");

        assert_eq!(summary.solved, 1);
        assert!(shown.contains("unknown character: 'x'"));
    }

    #[test]
    fn new_game_restarts_from_the_opening() {
        let words = words_from_slice(WORDS);
        let (summary, shown) = run(&words, OpeningPreset::Two, "00000\nnew\nquit\n");

        assert_eq!(summary.abandoned, 1);
        assert!(shown.contains("New game started"));
        // cones, trial, then cones again
        assert_eq!(shown.matches("(opening)").count(), 3);
    }

    #[test]
    fn closed_input_ends_quietly() {
        let words = words_from_slice(WORDS);
        let (summary, _) = run(&words, OpeningPreset::None, "");
        assert_eq!(summary, SimpleSummary::default());
    }

    #[test]
    fn contradictory_feedback_starts_over() {
        let words = words_from_slice(&["hates", "round", "climb"]);
        // no word starts with t
        let (summary, shown) = run(&words, OpeningPreset::One, "20000\nquit\n");

        assert_eq!(summary.abandoned, 1);
        assert!(shown.contains("No words remain"));
    }

    #[test]
    fn six_misses_exhaust_the_session() {
        let words = words_from_slice(WORDS);
        let input = "00000\n".repeat(6) + "quit\n";
        let session = Session::new(&words, OpeningPreset::None.into(), StdRng::seed_from_u64(1))
            .unwrap();
        let mut oracle = InteractiveOracle::new(Cursor::new(input), Vec::new());

        let summary = run_simple_with(session, &mut oracle).unwrap();
        assert!(summary.exhausted + summary.abandoned >= 1);
    }
}
