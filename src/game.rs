//! Local Wordle game
//!
//! Holds a secret word and scores guesses against it. A finished game
//! (solved or out of guesses) reports a summary and starts over with a new
//! secret drawn from the injected random source.

use crate::core::{Feedback, SolveError, Word, WordError};
use crate::solver::{FeedbackOracle, MAX_GUESSES, Verdict};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Summary of a finished (or abandoned) game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub secret: Word,
    pub guesses: Vec<Word>,
}

/// Current state of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStatus {
    pub guesses: Vec<Word>,
    pub guesses_used: usize,
    pub secret: Word,
}

/// Response to a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub guess: Word,
    pub feedback: Feedback,
    pub guesses_used: usize,
    pub is_correct: bool,
    pub out_of_guesses: bool,
    /// Present when this guess ended the game
    pub summary: Option<GameSummary>,
}

/// A game with a secret word
pub struct Game<'a, R> {
    words: &'a [Word],
    secret: Word,
    guesses: Vec<Word>,
    rng: R,
}

impl<'a, R: Rng> Game<'a, R> {
    /// Start a game with a secret drawn from `words`
    ///
    /// # Errors
    /// Returns `SolveError::EmptyPopulation` if `words` is empty.
    pub fn new(words: &'a [Word], mut rng: R) -> Result<Self, SolveError> {
        let secret = Self::draw(words, &mut rng)?;
        Ok(Self {
            words,
            secret,
            guesses: Vec::new(),
            rng,
        })
    }

    /// Start a game with a fixed first secret
    ///
    /// Later secrets are still drawn from `words`.
    pub const fn with_secret(words: &'a [Word], secret: Word, rng: R) -> Self {
        Self {
            words,
            secret,
            guesses: Vec::new(),
            rng,
        }
    }

    fn draw(words: &[Word], rng: &mut R) -> Result<Word, SolveError> {
        words
            .choose(rng)
            .cloned()
            .ok_or(SolveError::EmptyPopulation)
    }

    /// Score a guess
    ///
    /// # Errors
    /// Returns `WordError` if `guess` is not a valid five-letter word.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_sieve::core::Word;
    /// use wordle_sieve::game::Game;
    ///
    /// let words = vec![Word::new("truck").unwrap()];
    /// let secret = Word::new("truck").unwrap();
    /// let mut game = Game::with_secret(&words, secret, StdRng::seed_from_u64(1));
    ///
    /// let outcome = game.make_guess("lucky").unwrap();
    /// assert_eq!(outcome.feedback.to_string(), "01110");
    /// assert!(!outcome.is_correct);
    /// ```
    pub fn make_guess(&mut self, guess: &str) -> Result<GuessOutcome, WordError> {
        let guess = Word::new(guess)?;
        Ok(self.score(guess))
    }

    fn score(&mut self, guess: Word) -> GuessOutcome {
        self.guesses.push(guess.clone());

        let feedback = Feedback::score(&guess, &self.secret);
        let is_correct = guess == self.secret;
        let guesses_used = self.guesses.len();
        let out_of_guesses = guesses_used >= MAX_GUESSES;

        let summary = (is_correct || out_of_guesses).then(|| self.restart());

        GuessOutcome {
            guess,
            feedback,
            guesses_used,
            is_correct,
            out_of_guesses,
            summary,
        }
    }

    /// End the current game and start a new one
    ///
    /// Keeps the current secret if the word list is empty.
    pub fn restart(&mut self) -> GameSummary {
        let next = Self::draw(self.words, &mut self.rng).unwrap_or_else(|_| self.secret.clone());
        GameSummary {
            secret: std::mem::replace(&mut self.secret, next),
            guesses: std::mem::take(&mut self.guesses),
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus {
            guesses: self.guesses.clone(),
            guesses_used: self.guesses.len(),
            secret: self.secret.clone(),
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}

impl<R: Rng> FeedbackOracle for Game<'_, R> {
    fn submit(&mut self, guess: &Word) -> Result<Verdict, SolveError> {
        let outcome = self.score(guess.clone());
        if outcome.is_correct {
            Ok(Verdict::Solved)
        } else {
            Ok(Verdict::Feedback(outcome.feedback))
        }
    }
}
