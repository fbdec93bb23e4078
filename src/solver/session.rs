//! A single puzzle attempt
//!
//! A `Session` owns its constraint store, its population and its random
//! source. Guesses come from the opening sequence first, then uniformly at
//! random from the current population. Given the same seed and the same
//! feedback, a session makes the same guesses.

use super::constraints::{ConstraintStore, FilterMode};
use super::filter::filter;
use super::opening::OpeningSequence;
use super::oracle::{FeedbackOracle, Verdict};
use crate::core::{Feedback, SolveError, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Maximum number of guesses per puzzle
pub const MAX_GUESSES: usize = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the next guess
    AwaitingGuess { guesses_used: usize },
    /// Solved with the given number of guesses
    Solved { guesses_used: usize },
    /// Six guesses used without solving
    Exhausted,
}

impl SessionState {
    /// True for `Solved` and `Exhausted`
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingGuess { .. })
    }
}

/// One played guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub verdict: Verdict,
    pub population_before: usize,
    pub population_after: usize,
}

/// Solving state for one secret word
pub struct Session<'a, R> {
    words: &'a [Word],
    opening: OpeningSequence,
    store: ConstraintStore,
    population: Vec<&'a Word>,
    state: SessionState,
    history: Vec<Turn>,
    rng: R,
}

impl<'a, R: Rng> Session<'a, R> {
    /// Create a session over `words`
    ///
    /// # Errors
    /// Returns `SolveError::EmptyPopulation` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_sieve::core::Word;
    /// use wordle_sieve::solver::{OpeningPreset, SecretOracle, Session, SessionState};
    ///
    /// let words: Vec<Word> = ["hates", "round", "climb", "truck"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let mut session =
    ///     Session::new(&words, OpeningPreset::Three.into(), StdRng::seed_from_u64(7)).unwrap();
    ///
    /// let mut oracle = SecretOracle::new(Word::new("truck").unwrap());
    /// let state = session.play(&mut oracle).unwrap();
    /// assert_eq!(state, SessionState::Solved { guesses_used: 4 });
    /// ```
    pub fn new(words: &'a [Word], opening: OpeningSequence, rng: R) -> Result<Self, SolveError> {
        if words.is_empty() {
            return Err(SolveError::EmptyPopulation);
        }

        Ok(Self {
            words,
            opening,
            store: ConstraintStore::new(),
            population: words.iter().collect(),
            state: SessionState::AwaitingGuess { guesses_used: 0 },
            history: Vec::new(),
            rng,
        })
    }

    /// Use the given filter mode (resets the constraint store)
    #[must_use]
    pub fn with_filter_mode(mut self, mode: FilterMode) -> Self {
        self.store = ConstraintStore::with_mode(mode);
        self
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn store(&self) -> &ConstraintStore {
        &self.store
    }

    /// Words still consistent with all feedback, in word-list order
    #[must_use]
    pub fn population(&self) -> &[&'a Word] {
        &self.population
    }

    /// The full word list the session started from
    #[must_use]
    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    #[must_use]
    pub const fn opening(&self) -> &OpeningSequence {
        &self.opening
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub const fn guesses_used(&self) -> usize {
        match self.state {
            SessionState::AwaitingGuess { guesses_used }
            | SessionState::Solved { guesses_used } => guesses_used,
            SessionState::Exhausted => MAX_GUESSES,
        }
    }

    /// True if the next guess comes from the opening sequence
    #[must_use]
    pub fn in_opening(&self) -> bool {
        !self.state.is_terminal() && self.guesses_used() < self.opening.len()
    }

    /// Choose the next guess
    ///
    /// # Errors
    /// - `SolveError::SessionOver` if the session is solved or exhausted
    /// - `SolveError::EmptyPopulation` if the opening is used up and no
    ///   candidates remain
    pub fn next_guess(&mut self) -> Result<Word, SolveError> {
        let SessionState::AwaitingGuess { guesses_used } = self.state else {
            return Err(SolveError::SessionOver);
        };

        if let Some(word) = self.opening.get(guesses_used) {
            return Ok(word.clone());
        }

        self.population
            .choose(&mut self.rng)
            .map(|&word| word.clone())
            .ok_or(SolveError::EmptyPopulation)
    }

    /// Record the verdict for `guess` and advance the state
    ///
    /// # Errors
    /// - `SolveError::SessionOver` if the session is already terminal
    /// - `SolveError::LengthMismatch` for feedback of the wrong length
    ///
    /// Nothing changes on error.
    pub fn record(&mut self, guess: &Word, verdict: Verdict) -> Result<SessionState, SolveError> {
        let SessionState::AwaitingGuess { guesses_used } = self.state else {
            return Err(SolveError::SessionOver);
        };
        if let Verdict::Feedback(feedback) = &verdict {
            ConstraintStore::validate(guess, feedback)?;
        }

        let used = guesses_used + 1;
        let population_before = self.population.len();

        self.state = if verdict.is_solved() {
            SessionState::Solved { guesses_used: used }
        } else if used == MAX_GUESSES {
            SessionState::Exhausted
        } else {
            if let Verdict::Feedback(feedback) = &verdict {
                self.store.ingest(guess, feedback)?;
            }
            self.population = filter(self.population.iter().copied(), &self.store);
            SessionState::AwaitingGuess { guesses_used: used }
        };

        self.history.push(Turn {
            guess: guess.clone(),
            verdict,
            population_before,
            population_after: self.population.len(),
        });

        Ok(self.state)
    }

    /// Record parsed feedback for `guess`
    ///
    /// # Errors
    /// Same as [`Session::record`].
    pub fn record_feedback(
        &mut self,
        guess: &Word,
        feedback: Feedback,
    ) -> Result<SessionState, SolveError> {
        self.record(guess, Verdict::Feedback(feedback))
    }

    /// Choose a guess, submit it to `oracle` and record the verdict
    ///
    /// # Errors
    /// Propagates errors from [`Session::next_guess`], the oracle and
    /// [`Session::record`].
    pub fn step<O: FeedbackOracle>(&mut self, oracle: &mut O) -> Result<SessionState, SolveError> {
        let guess = self.next_guess()?;
        let verdict = oracle.submit(&guess)?;
        self.record(&guess, verdict)
    }

    /// Play until solved or exhausted
    ///
    /// # Errors
    /// `SolveError::EmptyPopulation` means the feedback ruled out every word;
    /// callers treat it as giving up. Oracle failures are passed through.
    pub fn play<O: FeedbackOracle>(&mut self, oracle: &mut O) -> Result<SessionState, SolveError> {
        while !self.state.is_terminal() {
            self.step(oracle)?;
        }
        Ok(self.state)
    }

    /// Start over: empty store, full population, no guesses used
    ///
    /// The random source keeps its state, so consecutive puzzles differ.
    pub fn reset(&mut self) {
        self.store.clear();
        self.population = self.words.iter().collect();
        self.state = SessionState::AwaitingGuess { guesses_used: 0 };
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::OpeningPreset;
    use crate::solver::oracle::SecretOracle;
    use crate::wordlists::{WORDS, loader::words_from_slice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn session(words: &[Word], preset: OpeningPreset, seed: u64) -> Session<'_, StdRng> {
        Session::new(words, preset.into(), StdRng::seed_from_u64(seed)).unwrap()
    }

    /// Oracle that never solves, always answering all-absent
    struct NeverSolved;

    impl FeedbackOracle for NeverSolved {
        fn submit(&mut self, _guess: &Word) -> Result<Verdict, SolveError> {
            Ok(Verdict::Feedback(Feedback::parse("00000")?))
        }
    }

    struct Unreachable;

    impl FeedbackOracle for Unreachable {
        fn submit(&mut self, _guess: &Word) -> Result<Verdict, SolveError> {
            Err(SolveError::OracleUnavailable("connection refused".to_string()))
        }
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let words: Vec<Word> = Vec::new();
        assert!(matches!(
            Session::new(&words, OpeningSequence::default(), StdRng::seed_from_u64(1)),
            Err(SolveError::EmptyPopulation)
        ));
    }

    #[test]
    fn opening_words_come_first() {
        let words = words_from_slice(WORDS);
        let mut s = session(&words, OpeningPreset::Two, 1);

        assert!(s.in_opening());
        assert_eq!(s.next_guess().unwrap().text(), "cones");
        s.record_feedback(&word("cones"), Feedback::parse("00000").unwrap())
            .unwrap();
        assert_eq!(s.next_guess().unwrap().text(), "trial");
        s.record_feedback(&word("trial"), Feedback::parse("00000").unwrap())
            .unwrap();
        assert!(!s.in_opening());
    }

    #[test]
    fn correct_guess_solves_in_one() {
        let words = words_from_slice(WORDS);
        let mut s = session(&words, OpeningPreset::One, 3);

        let state = s.record(&word("tales"), Verdict::Solved).unwrap();
        assert_eq!(state, SessionState::Solved { guesses_used: 1 });
        assert_eq!(s.guesses_used(), 1);
    }

    #[test]
    fn all_correct_feedback_solves() {
        let words = words_from_slice(WORDS);
        let mut s = session(&words, OpeningPreset::None, 3);

        s.record_feedback(&word("hates"), Feedback::parse("00010").unwrap())
            .unwrap();
        let state = s
            .record_feedback(&word("truck"), Feedback::parse("22222").unwrap())
            .unwrap();
        assert_eq!(state, SessionState::Solved { guesses_used: 2 });
    }

    #[test]
    fn six_misses_exhaust_the_session() {
        let words = words_from_slice(WORDS);
        let mut s = session(&words, OpeningPreset::None, 3);

        for _ in 0..MAX_GUESSES {
            let guess = word("xylyl");
            s.record_feedback(&guess, Feedback::parse("00000").unwrap())
                .unwrap();
        }
        assert_eq!(s.state(), SessionState::Exhausted);
        assert_eq!(s.history().len(), MAX_GUESSES);
    }

    #[test]
    fn all_correct_on_the_last_guess_solves() {
        let words = words_from_slice(WORDS);
        let mut s = session(&words, OpeningPreset::None, 3);

        for _ in 0..MAX_GUESSES - 1 {
            s.record_feedback(&word("xylyl"), Feedback::parse("00000").unwrap())
                .unwrap();
        }
        let state = s
            .record_feedback(&word("truck"), Feedback::parse("22222").unwrap())
            .unwrap();

        assert_eq!(state, SessionState::Solved { guesses_used: MAX_GUESSES });
        assert_eq!(
            s.record(&word("truck"), Verdict::Solved),
            Err(SolveError::SessionOver)
        );
    }

    #[test]
    fn terminal_sessions_refuse_guesses() {
        let words = words_from_slice(WORDS);
        let mut s = session(&words, OpeningPreset::One, 3);
        s.record(&word("tales"), Verdict::Solved).unwrap();

        assert_eq!(s.next_guess(), Err(SolveError::SessionOver));
        assert_eq!(
            s.record(&word("tales"), Verdict::Solved),
            Err(SolveError::SessionOver)
        );
    }

    #[test]
    fn bad_feedback_changes_nothing() {
        let words = words_from_slice(WORDS);
        let mut s = session(&words, OpeningPreset::One, 3);

        let err = s
            .record_feedback(&word("tales"), Feedback::parse("0120").unwrap())
            .unwrap_err();
        assert!(matches!(err, SolveError::LengthMismatch { .. }));
        assert_eq!(s.state(), SessionState::AwaitingGuess { guesses_used: 0 });
        assert!(s.store().is_empty());
        assert_eq!(s.population().len(), words.len());
        assert!(s.history().is_empty());
    }

    #[test]
    fn feedback_narrows_population() {
        let words = words_from_slice(WORDS);
        let mut s = session(&words, OpeningPreset::None, 3);
        let secret = word("truck");
        let guess = word("lucky");

        s.record_feedback(&guess, Feedback::score(&guess, &secret))
            .unwrap();
        let turn = &s.history()[0];
        assert_eq!(turn.population_before, words.len());
        assert!(turn.population_after < turn.population_before);
        assert!(s.population().contains(&&secret));
        assert!(!s.population().contains(&&guess));
    }

    #[test]
    fn play_reaches_a_terminal_state() {
        let words = words_from_slice(WORDS);
        for (i, secret) in words.iter().step_by(50).enumerate() {
            let mut s = session(&words, OpeningPreset::ALL[i % 4], i as u64);
            let mut oracle = SecretOracle::new(secret.clone());

            let state = s.play(&mut oracle).unwrap();
            assert!(state.is_terminal());
            if let SessionState::Solved { guesses_used } = state {
                assert!((1..=MAX_GUESSES).contains(&guesses_used));
                assert_eq!(&s.history().last().unwrap().guess, secret);
            }
        }
    }

    #[test]
    fn never_solved_oracle_exhausts_or_empties() {
        let words = words_from_slice(&["hates", "round", "climb", "truck", "lucky"]);
        let mut s = session(&words, OpeningPreset::Three, 9);

        // every word shares a letter with one of the openers
        let result = s.play(&mut NeverSolved);
        assert_eq!(result, Err(SolveError::EmptyPopulation));
        assert!(!s.state().is_terminal());
        assert_eq!(s.guesses_used(), 3);
    }

    #[test]
    fn oracle_failure_is_propagated() {
        let words = words_from_slice(WORDS);
        let mut s = session(&words, OpeningPreset::One, 3);

        assert!(matches!(
            s.step(&mut Unreachable),
            Err(SolveError::OracleUnavailable(_))
        ));
        assert_eq!(s.guesses_used(), 0);
    }

    #[test]
    fn same_seed_same_guesses() {
        let words = words_from_slice(WORDS);
        let secret = word("crane");

        let play = |seed| {
            let mut s = session(&words, OpeningPreset::None, seed);
            let mut oracle = SecretOracle::new(secret.clone());
            let _ = s.play(&mut oracle);
            s.history()
                .iter()
                .map(|t| t.guess.text().to_string())
                .collect::<Vec<_>>()
        };

        assert_eq!(play(42), play(42));
    }

    #[test]
    fn reset_restores_full_population() {
        let words = words_from_slice(WORDS);
        let mut s = session(&words, OpeningPreset::Two, 5);
        let mut oracle = SecretOracle::new(word("truck"));
        let _ = s.play(&mut oracle);

        s.reset();
        assert_eq!(s.state(), SessionState::AwaitingGuess { guesses_used: 0 });
        assert!(s.store().is_empty());
        assert!(s.history().is_empty());
        let restored: Vec<&Word> = words.iter().collect();
        assert_eq!(s.population(), restored.as_slice());
        assert_eq!(s.next_guess().unwrap().text(), "cones");
    }

    #[test]
    fn filter_mode_is_kept_across_reset() {
        let words = words_from_slice(WORDS);
        let mut s =
            session(&words, OpeningPreset::None, 5).with_filter_mode(FilterMode::CountAware);
        s.reset();
        assert_eq!(s.store().mode(), FilterMode::CountAware);
    }
}
