//! Population narrowing against a constraint store

use super::constraints::{ConstraintStore, FilterMode};
use crate::core::Word;

/// Keep the words consistent with every constraint in `store`
///
/// Relative order of the surviving words is preserved, so random draws over
/// the result stay reproducible. An empty result is a legitimate outcome.
///
/// # Examples
/// ```
/// use wordle_sieve::core::Word;
/// use wordle_sieve::solver::{ConstraintStore, filter};
///
/// let words: Vec<Word> = ["lucky", "truck", "quick", "trick"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let mut store = ConstraintStore::new();
/// store.ingest_str(&words[0], "01110").unwrap();
///
/// let left: Vec<&str> = filter(&words, &store).iter().map(|w| w.text()).collect();
/// assert_eq!(left, ["truck"]);
/// ```
pub fn filter<'a, I>(population: I, store: &ConstraintStore) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    let excluded = store.excluded_letters();
    population
        .into_iter()
        .filter(|word| admits(word, store, &excluded))
        .collect()
}

/// Count the words consistent with `store`
pub fn count_consistent<'a, I>(population: I, store: &ConstraintStore) -> usize
where
    I: IntoIterator<Item = &'a Word>,
{
    let excluded = store.excluded_letters();
    population
        .into_iter()
        .filter(|word| admits(word, store, &excluded))
        .count()
}

/// Check a single word against `store`
#[must_use]
pub fn is_consistent(word: &Word, store: &ConstraintStore) -> bool {
    admits(word, store, &store.excluded_letters())
}

fn admits(word: &Word, store: &ConstraintStore, excluded: &[u8]) -> bool {
    let fixed_ok = store
        .fixed()
        .iter()
        .all(|&(letter, pos)| word.char_at(pos) == letter);
    if !fixed_ok {
        return false;
    }

    let misplaced_ok = store
        .misplaced()
        .iter()
        .all(|&(letter, pos)| word.char_at(pos) != letter && word.has_letter(letter));
    if !misplaced_ok {
        return false;
    }

    match store.mode() {
        FilterMode::Lenient => excluded.iter().all(|&letter| !word.has_letter(letter)),
        FilterMode::CountAware => within_counts(word, store),
    }
}

fn within_counts(word: &Word, store: &ConstraintStore) -> bool {
    let positions_ok = store
        .absent_positions()
        .iter()
        .all(|&(letter, pos)| word.char_at(pos) != letter);

    positions_ok
        && (b'a'..=b'z').all(|letter| {
            let count = word.count_of(letter);
            count >= usize::from(store.min_count(letter))
                && store
                    .max_count(letter)
                    .is_none_or(|max| count <= usize::from(max))
        })
}
