//! Opening sequences
//!
//! A fixed list of guesses tried before the solver starts drawing at random
//! from the population. The presets come from published Wordle data
//! analysis; the success rates below were measured with random follow-ups
//! against a scorer that marks every letter present in the secret as yellow,
//! without counting repeats. Two-pass scoring as in [`crate::game::Game`]
//! can give somewhat different figures.

use crate::core::{Word, WordError};

/// Named opening presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpeningPreset {
    /// No opening words, draw at random from the start
    None,
    /// `tales` (about 95% solved, 3.66 guesses on average)
    One,
    /// `cones`, `trial` (about 96% solved, 3.68 guesses)
    Two,
    /// `hates`, `round`, `climb` (about 97% solved, 4.20 guesses)
    Three,
}

impl OpeningPreset {
    /// Every preset, shortest first
    pub const ALL: [Self; 4] = [Self::None, Self::One, Self::Two, Self::Three];

    /// Parse a preset from its name or word count
    ///
    /// Supported names: "none"/"0", "one"/"1", "two"/"2", "three"/"3"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "none" | "0" => Some(Self::None),
            "one" | "1" => Some(Self::One),
            "two" | "2" => Some(Self::Two),
            "three" | "3" => Some(Self::Three),
            _ => None,
        }
    }

    /// The preset's words in guessing order
    #[must_use]
    pub const fn words(self) -> &'static [&'static str] {
        match self {
            Self::None => &[],
            Self::One => &["tales"],
            Self::Two => &["cones", "trial"],
            Self::Three => &["hates", "round", "climb"],
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::One => "one",
            Self::Two => "two",
            Self::Three => "three",
        }
    }
}

/// An ordered list of guesses to play before random selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpeningSequence {
    words: Vec<Word>,
}

impl OpeningSequence {
    /// Opening sequence for a preset
    #[must_use]
    pub fn from_preset(preset: OpeningPreset) -> Self {
        Self {
            words: preset
                .words()
                .iter()
                .filter_map(|&w| Word::new(w).ok())
                .collect(),
        }
    }

    /// Opening sequence from explicit words, e.g. guesses already played
    ///
    /// # Errors
    /// Returns the first `WordError` if any word is invalid.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::solver::OpeningSequence;
    ///
    /// let opening = OpeningSequence::custom(&["kicky", "issue"]).unwrap();
    /// assert_eq!(opening.len(), 2);
    /// assert!(OpeningSequence::custom(&["toolong"]).is_err());
    /// ```
    pub fn custom<S: AsRef<str>>(words: &[S]) -> Result<Self, WordError> {
        let words = words
            .iter()
            .map(|w| Word::new(w.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { words })
    }

    /// The opening guess for the given turn (0-based), if any
    #[must_use]
    pub fn get(&self, turn: usize) -> Option<&Word> {
        self.words.get(turn)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl From<OpeningPreset> for OpeningSequence {
    fn from(preset: OpeningPreset) -> Self {
        Self::from_preset(preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_have_matching_lengths() {
        for (count, preset) in OpeningPreset::ALL.into_iter().enumerate() {
            assert_eq!(OpeningSequence::from_preset(preset).len(), count);
        }
    }

    #[test]
    fn preset_from_name() {
        assert_eq!(OpeningPreset::from_name("none"), Some(OpeningPreset::None));
        assert_eq!(OpeningPreset::from_name("2"), Some(OpeningPreset::Two));
        assert_eq!(OpeningPreset::from_name(" Three "), Some(OpeningPreset::Three));
        assert_eq!(OpeningPreset::from_name("four"), None);
    }

    #[test]
    fn preset_words_in_order() {
        let opening = OpeningSequence::from(OpeningPreset::Three);
        let texts: Vec<&str> = opening.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["hates", "round", "climb"]);
        assert_eq!(opening.get(1).map(Word::text), Some("round"));
        assert!(opening.get(3).is_none());
    }

    #[test]
    fn custom_opening_validates_words() {
        let opening = OpeningSequence::custom(&["grief", "tried"]).unwrap();
        assert_eq!(opening.get(0).map(Word::text), Some("grief"));

        assert_eq!(
            OpeningSequence::custom(&["grief", "tri"]),
            Err(WordError::InvalidLength(3))
        );
        assert!(OpeningSequence::custom::<&str>(&[]).unwrap().is_empty());
    }
}
