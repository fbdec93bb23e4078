//! Per-letter feedback for a guess
//!
//! Each position of a guess receives one [`Mark`]:
//! - `0` = Absent (letter not in word, subject to duplicate counting)
//! - `1` = Present (letter in word, wrong position)
//! - `2` = Correct (letter in correct position)
//!
//! A [`Feedback`] is any-length until it is ingested against a guess, so a
//! length mismatch can be reported instead of silently truncated.

use super::{SolveError, WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Parse a single feedback symbol
    ///
    /// Accepts digits (`0`/`1`/`2`), letters (`-`/`_`, `Y`, `G`) and tiles.
    ///
    /// # Errors
    /// Returns `SolveError::InvalidFeedbackSymbol` for anything else.
    pub fn from_symbol(symbol: char) -> Result<Self, SolveError> {
        match symbol {
            '0' | '-' | '_' | '⬜' | '⬛' => Ok(Self::Absent),
            '1' | 'Y' | 'y' | '🟨' => Ok(Self::Present),
            '2' | 'G' | 'g' | '🟩' => Ok(Self::Correct),
            other => Err(SolveError::InvalidFeedbackSymbol(other)),
        }
    }

    /// Canonical digit for this mark
    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Self::Absent => '0',
            Self::Present => '1',
            Self::Correct => '2',
        }
    }

    /// Tile emoji for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Feedback for a whole guess, one mark per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    marks: Vec<Mark>,
}

impl Feedback {
    /// All positions correct
    #[must_use]
    pub fn solved() -> Self {
        Self {
            marks: vec![Mark::Correct; WORD_LENGTH],
        }
    }

    /// Parse feedback such as `"01120"`, `"-YG--"` or `"⬜🟨🟩⬜⬜"`
    ///
    /// Surrounding whitespace is ignored. Length is not checked here; that
    /// happens when the feedback is ingested against a guess.
    ///
    /// # Errors
    /// Returns `SolveError::InvalidFeedbackSymbol` for the first unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Feedback, Mark};
    ///
    /// let fb = Feedback::parse("01120").unwrap();
    /// assert_eq!(fb.marks()[3], Mark::Correct);
    /// assert_eq!(Feedback::parse("-YYG-").unwrap(), fb);
    /// assert!(Feedback::parse("01x20").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, SolveError> {
        let marks = s
            .trim()
            .chars()
            .map(Mark::from_symbol)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { marks })
    }

    /// Compute the feedback Wordle gives for `guess` when `secret` is the answer
    ///
    /// Duplicate letters are accounted for the standard way: exact matches
    /// are marked first and removed from the available pool, then
    /// present-elsewhere marks are handed out from what remains.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Feedback, Word};
    ///
    /// let guess = Word::new("lucky").unwrap();
    /// let secret = Word::new("truck").unwrap();
    /// assert_eq!(Feedback::score(&guess, &secret).to_string(), "01110");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut marks = vec![Mark::Absent; WORD_LENGTH];
        let mut available = secret.char_counts();

        // Allow: Index needed to compare guess[i] with secret[i] and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == secret.char_at(i) {
                marks[i] = Mark::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Self { marks }
    }

    /// The marks in position order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of marks
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// True if there are no marks
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// True if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|&m| m == Mark::Correct)
    }

    /// Count positions with the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    /// Render as tiles, e.g. `"⬜🟨🟨🟨⬜"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.marks {
            write!(f, "{}", mark.digit())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn parse_digits() {
        let fb = Feedback::parse("00120").unwrap();
        assert_eq!(
            fb.marks(),
            &[
                Mark::Absent,
                Mark::Absent,
                Mark::Present,
                Mark::Correct,
                Mark::Absent
            ]
        );
    }

    #[test]
    fn parse_alternate_symbols_agree() {
        let digits = Feedback::parse("21012").unwrap();
        assert_eq!(Feedback::parse("GY-YG").unwrap(), digits);
        assert_eq!(Feedback::parse("gy_yg").unwrap(), digits);
        assert_eq!(Feedback::parse("🟩🟨⬜🟨🟩").unwrap(), digits);
    }

    #[test]
    fn parse_rejects_unknown_symbol() {
        assert_eq!(
            Feedback::parse("0013x"),
            Err(SolveError::InvalidFeedbackSymbol('3'))
        );
        assert_eq!(
            Feedback::parse("b0000"),
            Err(SolveError::InvalidFeedbackSymbol('b'))
        );
    }

    #[test]
    fn parse_keeps_wrong_length() {
        assert_eq!(Feedback::parse("0120").unwrap().len(), 4);
        assert!(Feedback::parse("").unwrap().is_empty());
    }

    #[test]
    fn score_lucky_against_truck() {
        let fb = Feedback::score(&word("lucky"), &word("truck"));
        assert_eq!(fb.to_string(), "01110");
        assert_eq!(fb.count(Mark::Present), 3);
    }

    #[test]
    fn score_self_is_solved() {
        for w in ["tales", "speed", "aaaaa", "truck"] {
            let w = word(w);
            assert!(Feedback::score(&w, &w).is_solved());
        }
    }

    #[test]
    fn score_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O is present, second O is correct
        let fb = Feedback::score(&word("robot"), &word("floor"));
        assert_eq!(fb.to_string(), "11020");
    }

    #[test]
    fn score_extra_duplicate_is_absent() {
        // SPEED vs ABIDE: only one E in the secret
        let fb = Feedback::score(&word("speed"), &word("abide"));
        assert_eq!(fb.to_string(), "00101");
    }

    #[test]
    fn solved_detection() {
        assert!(Feedback::solved().is_solved());
        assert!(Feedback::parse("22222").unwrap().is_solved());
        assert!(!Feedback::parse("22212").unwrap().is_solved());
        assert!(!Feedback::parse("").unwrap().is_solved());
    }

    #[test]
    fn emoji_rendering() {
        let fb = Feedback::parse("01210").unwrap();
        assert_eq!(fb.to_emoji(), "⬜🟨🟩🟨⬜");
    }
}
