//! Knowledge accumulated from guess feedback
//!
//! The store only grows during a session. It records three kinds of fact:
//! - absent letters (marked `0`)
//! - misplaced letters: present in the secret but not at this position (`1`)
//! - fixed letters: at this position (`2`)
//!
//! Repeated letters are not counted by default. A letter marked absent on
//! one occurrence and confirmed on another is ambiguous, so the default
//! filter ignores the absent mark for any confirmed letter. This can keep
//! words that a count-aware reading would reject. [`FilterMode::CountAware`]
//! opts into the stricter reading.

use crate::core::{Feedback, Mark, SolveError, WORD_LENGTH, Word};
use std::collections::BTreeSet;
use std::fmt;

const ALPHABET: usize = 26;

/// How absent marks are interpreted when filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Absent letters exclude a word only if never confirmed elsewhere
    #[default]
    Lenient,
    /// Track per-letter occurrence bounds and absent positions
    CountAware,
}

/// Constraints derived from every (guess, feedback) pair seen so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintStore {
    mode: FilterMode,
    absent: BTreeSet<u8>,
    misplaced: BTreeSet<(u8, usize)>,
    fixed: BTreeSet<(u8, usize)>,
    // Only consulted in count-aware mode
    absent_at: BTreeSet<(u8, usize)>,
    min_counts: [u8; ALPHABET],
    max_counts: [Option<u8>; ALPHABET],
}

impl ConstraintStore {
    /// Create an empty store using the default lenient filter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with an explicit filter mode
    #[must_use]
    pub fn with_mode(mode: FilterMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Fold one guess and its feedback into the store
    ///
    /// # Errors
    /// Returns `SolveError::LengthMismatch` if the feedback length differs
    /// from the word length. The store is unchanged on error.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Feedback, Word};
    /// use wordle_sieve::solver::ConstraintStore;
    ///
    /// let mut store = ConstraintStore::new();
    /// let guess = Word::new("lucky").unwrap();
    /// store.ingest(&guess, &Feedback::parse("01110").unwrap()).unwrap();
    ///
    /// assert!(store.fixed().is_empty());
    /// assert!(store.misplaced().contains(&(b'u', 1)));
    /// assert!(store.absent_letters().contains(&b'y'));
    /// ```
    pub fn ingest(&mut self, word: &Word, feedback: &Feedback) -> Result<(), SolveError> {
        Self::validate(word, feedback)?;

        for (i, (&letter, &mark)) in word.chars().iter().zip(feedback.marks()).enumerate() {
            match mark {
                Mark::Correct => {
                    self.fixed.insert((letter, i));
                }
                Mark::Present => {
                    self.misplaced.insert((letter, i));
                }
                Mark::Absent => {
                    self.absent.insert(letter);
                    self.absent_at.insert((letter, i));
                }
            }
        }

        self.record_counts(word, feedback);
        Ok(())
    }

    /// Parse `feedback` and fold it into the store
    ///
    /// # Errors
    /// Returns `SolveError::InvalidFeedbackSymbol` or
    /// `SolveError::LengthMismatch`. The store is unchanged on error.
    pub fn ingest_str(&mut self, word: &Word, feedback: &str) -> Result<(), SolveError> {
        let feedback = Feedback::parse(feedback)?;
        self.ingest(word, &feedback)
    }

    /// Check that `feedback` can be ingested against `word`
    ///
    /// # Errors
    /// Returns `SolveError::LengthMismatch` when the lengths differ.
    pub fn validate(word: &Word, feedback: &Feedback) -> Result<(), SolveError> {
        if feedback.len() == WORD_LENGTH {
            Ok(())
        } else {
            Err(SolveError::LengthMismatch {
                word: word.chars().len(),
                feedback: feedback.len(),
            })
        }
    }

    // Lower bound: occurrences not marked absent. Exact when any occurrence is absent.
    fn record_counts(&mut self, word: &Word, feedback: &Feedback) {
        for (letter, _) in word.char_counts() {
            let idx = usize::from(letter - b'a');
            let mut confirmed = 0u8;
            let mut saw_absent = false;
            for (&c, &mark) in word.chars().iter().zip(feedback.marks()) {
                if c != letter {
                    continue;
                }
                if mark == Mark::Absent {
                    saw_absent = true;
                } else {
                    confirmed += 1;
                }
            }

            self.min_counts[idx] = self.min_counts[idx].max(confirmed);
            if saw_absent {
                let bound = self.max_counts[idx].map_or(confirmed, |m| m.min(confirmed));
                self.max_counts[idx] = Some(bound);
            }
        }
    }

    /// Reset to an empty store, keeping the filter mode
    pub fn clear(&mut self) {
        *self = Self::with_mode(self.mode);
    }

    #[must_use]
    pub const fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Letters marked absent at least once
    #[must_use]
    pub const fn absent_letters(&self) -> &BTreeSet<u8> {
        &self.absent
    }

    /// (letter, position) pairs: letter present, but not at position
    #[must_use]
    pub const fn misplaced(&self) -> &BTreeSet<(u8, usize)> {
        &self.misplaced
    }

    /// (letter, position) pairs: letter at position
    #[must_use]
    pub const fn fixed(&self) -> &BTreeSet<(u8, usize)> {
        &self.fixed
    }

    /// Letters known to be in the secret (fixed or misplaced)
    #[must_use]
    pub fn confirmed_letters(&self) -> BTreeSet<u8> {
        self.fixed
            .iter()
            .chain(&self.misplaced)
            .map(|&(letter, _)| letter)
            .collect()
    }

    /// Absent letters that were never confirmed, i.e. letters a candidate must not contain
    #[must_use]
    pub fn excluded_letters(&self) -> Vec<u8> {
        let confirmed = self.confirmed_letters();
        self.absent
            .iter()
            .copied()
            .filter(|letter| !confirmed.contains(letter))
            .collect()
    }

    pub(crate) const fn absent_positions(&self) -> &BTreeSet<(u8, usize)> {
        &self.absent_at
    }

    /// Minimum known occurrences of `letter`
    #[must_use]
    pub fn min_count(&self, letter: u8) -> u8 {
        letter_index(letter).map_or(0, |i| self.min_counts[i])
    }

    /// Maximum known occurrences of `letter`, if bounded
    #[must_use]
    pub fn max_count(&self, letter: u8) -> Option<u8> {
        letter_index(letter).and_then(|i| self.max_counts[i])
    }

    /// True if nothing has been ingested
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.absent.is_empty() && self.misplaced.is_empty() && self.fixed.is_empty()
    }

    /// Fixed letters laid out by position, `_` where unknown (e.g. `"__u_k"`)
    #[must_use]
    pub fn known_pattern(&self) -> String {
        let mut slots = ['_'; WORD_LENGTH];
        for &(letter, pos) in &self.fixed {
            slots[pos] = char::from(letter);
        }
        slots.iter().collect()
    }
}

fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

impl fmt::Display for ConstraintStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut by_position: Vec<_> = self.misplaced.iter().copied().collect();
        by_position.sort_by_key(|&(letter, pos)| (pos, letter));
        let misplaced: Vec<String> = by_position
            .into_iter()
            .map(|(letter, pos)| format!("{}@{pos}", char::from(letter)))
            .collect();
        let absent: String = self.absent.iter().map(|&l| char::from(l)).collect();

        write!(
            f,
            "fixed: {} | misplaced: {} | absent: {}",
            self.known_pattern(),
            if misplaced.is_empty() {
                "-".to_string()
            } else {
                misplaced.join(" ")
            },
            if absent.is_empty() { "-" } else { absent.as_str() }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn ingest_sorts_marks_into_collections() {
        let mut store = ConstraintStore::new();
        store.ingest_str(&word("cones"), "20100").unwrap();

        assert!(store.fixed().contains(&(b'c', 0)));
        assert!(store.misplaced().contains(&(b'n', 2)));
        assert_eq!(
            store.absent_letters().iter().copied().collect::<Vec<_>>(),
            vec![b'e', b'o', b's']
        );
    }

    #[test]
    fn ingest_is_additive() {
        let mut store = ConstraintStore::new();
        store.ingest_str(&word("cones"), "00001").unwrap();
        store.ingest_str(&word("trial"), "01000").unwrap();

        assert!(store.misplaced().contains(&(b's', 4)));
        assert!(store.misplaced().contains(&(b'r', 1)));
        assert!(store.absent_letters().contains(&b'c'));
        assert!(store.absent_letters().contains(&b'l'));
    }

    #[test]
    fn length_mismatch_leaves_store_untouched() {
        let mut store = ConstraintStore::new();
        store.ingest_str(&word("tales"), "00001").unwrap();
        let before = store.clone();

        let err = store.ingest_str(&word("round"), "0120").unwrap_err();
        assert_eq!(
            err,
            SolveError::LengthMismatch {
                word: 5,
                feedback: 4
            }
        );
        assert_eq!(store, before);

        let err = store.ingest_str(&word("round"), "012001").unwrap_err();
        assert!(matches!(err, SolveError::LengthMismatch { feedback: 6, .. }));
        assert_eq!(store, before);
    }

    #[test]
    fn invalid_symbol_leaves_store_untouched() {
        let mut store = ConstraintStore::new();
        let err = store.ingest_str(&word("round"), "01x00").unwrap_err();

        assert_eq!(err, SolveError::InvalidFeedbackSymbol('x'));
        assert!(store.is_empty());
    }

    #[test]
    fn confirmed_and_excluded_letters() {
        let mut store = ConstraintStore::new();
        // SPEED vs ABIDE: first E present, second E absent
        store.ingest_str(&word("speed"), "00101").unwrap();

        assert!(store.confirmed_letters().contains(&b'e'));
        assert!(store.absent_letters().contains(&b'e'));
        assert_eq!(store.excluded_letters(), vec![b'p', b's']);
    }

    #[test]
    fn count_bounds_follow_marks() {
        let mut store = ConstraintStore::with_mode(FilterMode::CountAware);
        store.ingest_str(&word("speed"), "00101").unwrap();

        assert_eq!(store.min_count(b'e'), 1);
        assert_eq!(store.max_count(b'e'), Some(1));
        assert_eq!(store.min_count(b'd'), 1);
        assert_eq!(store.max_count(b'd'), None);
        assert_eq!(store.max_count(b's'), Some(0));
    }

    #[test]
    fn clear_keeps_mode() {
        let mut store = ConstraintStore::with_mode(FilterMode::CountAware);
        store.ingest_str(&word("hates"), "22222").unwrap();
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.mode(), FilterMode::CountAware);
        assert_eq!(store.min_count(b'h'), 0);
    }

    #[test]
    fn display_summary() {
        let mut store = ConstraintStore::new();
        assert_eq!(
            store.to_string(),
            "fixed: _____ | misplaced: - | absent: -"
        );

        store.ingest_str(&word("lucky"), "01112").unwrap();
        assert_eq!(store.known_pattern(), "____y");
        assert_eq!(
            store.to_string(),
            "fixed: ____y | misplaced: u@1 c@2 k@3 | absent: l"
        );
    }
}
