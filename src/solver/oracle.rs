//! Feedback sources
//!
//! The solver only needs `submit(guess) -> Feedback | Solved`. Where the
//! feedback comes from (a person, a local secret, a game) is up to the
//! implementation.

use crate::core::{Feedback, SolveError, WORD_LENGTH, Word};
use std::io::{self, BufRead, Write};

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Per-letter feedback for an incorrect guess
    Feedback(Feedback),
    /// The guess was the secret word
    Solved,
}

impl Verdict {
    /// True for `Solved` and for all-correct feedback
    #[must_use]
    pub fn is_solved(&self) -> bool {
        match self {
            Self::Solved => true,
            Self::Feedback(feedback) => feedback.is_solved(),
        }
    }
}

/// A source of feedback for guesses
pub trait FeedbackOracle {
    /// Submit a guess and receive its verdict
    ///
    /// # Errors
    /// Returns `SolveError::OracleUnavailable` if the source fails.
    fn submit(&mut self, guess: &Word) -> Result<Verdict, SolveError>;
}

impl<O: FeedbackOracle + ?Sized> FeedbackOracle for &mut O {
    fn submit(&mut self, guess: &Word) -> Result<Verdict, SolveError> {
        (**self).submit(guess)
    }
}

/// Local oracle that scores guesses against a known secret
#[derive(Debug, Clone)]
pub struct SecretOracle {
    secret: Word,
}

impl SecretOracle {
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self { secret }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}

impl FeedbackOracle for SecretOracle {
    fn submit(&mut self, guess: &Word) -> Result<Verdict, SolveError> {
        if *guess == self.secret {
            Ok(Verdict::Solved)
        } else {
            Ok(Verdict::Feedback(Feedback::score(guess, &self.secret)))
        }
    }
}

/// A line typed by a person in reply to a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Verdict(Verdict),
    /// Abandon this puzzle and start another
    NewGame,
    Quit,
}

/// Oracle that asks a person for feedback over a text stream
///
/// Invalid symbols and wrong lengths are reported and asked again. A closed
/// input stream makes the oracle unavailable.
pub struct InteractiveOracle<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveOracle<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The stream prompts are written to
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    fn prompt(&mut self, guess: &Word) -> io::Result<Option<String>> {
        write!(
            self.output,
            "Enter feedback for '{guess}' (e.g. '00120' for gray, gray, yellow, green, gray): "
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    /// Read feedback or a command for `guess`
    ///
    /// Asks again until the line is a command or well-formed feedback.
    ///
    /// # Errors
    /// Returns `SolveError::OracleUnavailable` if the input closes or a
    /// stream operation fails.
    pub fn read_reply(&mut self, guess: &Word) -> Result<Reply, SolveError> {
        let unavailable = |e: io::Error| SolveError::OracleUnavailable(e.to_string());

        loop {
            let Some(line) = self.prompt(guess).map_err(unavailable)? else {
                return Err(SolveError::OracleUnavailable(
                    "input closed before feedback was entered".to_string(),
                ));
            };

            match line.as_str() {
                "win" | "solved" | "correct" => return Ok(Reply::Verdict(Verdict::Solved)),
                "new" | "n" => return Ok(Reply::NewGame),
                "quit" | "q" | "exit" => return Ok(Reply::Quit),
                _ => {}
            }

            match Feedback::parse(&line) {
                Ok(feedback) if feedback.len() == WORD_LENGTH => {
                    let verdict = if feedback.is_solved() {
                        Verdict::Solved
                    } else {
                        Verdict::Feedback(feedback)
                    };
                    return Ok(Reply::Verdict(verdict));
                }
                Ok(feedback) => writeln!(
                    self.output,
                    "Feedback must have {WORD_LENGTH} symbols, got {}",
                    feedback.len()
                ),
                Err(e) => writeln!(self.output, "{e}"),
            }
            .map_err(unavailable)?;
        }
    }
}

impl InteractiveOracle<io::StdinLock<'static>, io::Stdout> {
    /// Interactive oracle over standard input and output
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> FeedbackOracle for InteractiveOracle<R, W> {
    fn submit(&mut self, guess: &Word) -> Result<Verdict, SolveError> {
        match self.read_reply(guess)? {
            Reply::Verdict(verdict) => Ok(verdict),
            Reply::NewGame | Reply::Quit => Err(SolveError::OracleUnavailable(
                "feedback entry cancelled".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn secret_oracle_scores_guesses() {
        let mut oracle = SecretOracle::new(word("truck"));

        let verdict = oracle.submit(&word("lucky")).unwrap();
        assert_eq!(
            verdict,
            Verdict::Feedback(Feedback::parse("01110").unwrap())
        );
        assert!(!verdict.is_solved());

        assert_eq!(oracle.submit(&word("truck")).unwrap(), Verdict::Solved);
    }

    #[test]
    fn verdict_all_correct_feedback_counts_as_solved() {
        assert!(Verdict::Feedback(Feedback::solved()).is_solved());
        assert!(Verdict::Solved.is_solved());
    }

    #[test]
    fn interactive_oracle_reads_feedback() {
        let mut output = Vec::new();
        let mut oracle = InteractiveOracle::new(Cursor::new("01120\n"), &mut output);

        let verdict = oracle.submit(&word("tales")).unwrap();
        assert_eq!(
            verdict,
            Verdict::Feedback(Feedback::parse("01120").unwrap())
        );
        drop(oracle);
        assert!(String::from_utf8(output).unwrap().contains("'tales'"));
    }

    #[test]
    fn interactive_oracle_retries_bad_input() {
        let mut output = Vec::new();
        let input = Cursor::new("01x20\n0120\nGY-G-\n");
        let mut oracle = InteractiveOracle::new(input, &mut output);

        let verdict = oracle.submit(&word("cones")).unwrap();
        assert_eq!(
            verdict,
            Verdict::Feedback(Feedback::parse("21020").unwrap())
        );
        drop(oracle);

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("unknown character: 'x'"));
        assert!(shown.contains("must have 5 symbols, got 4"));
    }

    #[test]
    fn interactive_oracle_recognises_solved() {
        let mut oracle = InteractiveOracle::new(Cursor::new("22222\n"), Vec::new());
        assert_eq!(oracle.submit(&word("round")).unwrap(), Verdict::Solved);

        let mut oracle = InteractiveOracle::new(Cursor::new("win\n"), Vec::new());
        assert_eq!(oracle.submit(&word("round")).unwrap(), Verdict::Solved);
    }

    #[test]
    fn interactive_oracle_reads_commands() {
        let mut oracle = InteractiveOracle::new(Cursor::new("NEW\nq\n"), Vec::new());
        assert_eq!(oracle.read_reply(&word("tales")).unwrap(), Reply::NewGame);
        assert_eq!(oracle.read_reply(&word("tales")).unwrap(), Reply::Quit);
    }

    #[test]
    fn quitting_cancels_submission() {
        let mut oracle = InteractiveOracle::new(Cursor::new("quit\n"), Vec::new());
        assert!(matches!(
            oracle.submit(&word("trial")),
            Err(SolveError::OracleUnavailable(_))
        ));
    }

    #[test]
    fn interactive_oracle_closed_input_is_unavailable() {
        let mut oracle = InteractiveOracle::new(Cursor::new(""), Vec::new());
        assert!(matches!(
            oracle.submit(&word("climb")),
            Err(SolveError::OracleUnavailable(_))
        ));
    }
}
