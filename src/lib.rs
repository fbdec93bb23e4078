//! Wordle Sieve
//!
//! A Wordle solver that turns per-letter feedback into positional and
//! exclusion constraints, filters a word list against them and guesses at
//! random from what is left.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_sieve::core::Word;
//! use wordle_sieve::solver::{OpeningPreset, SecretOracle, Session};
//! use wordle_sieve::wordlists::{WORDS, words_from_slice};
//!
//! let words = words_from_slice(WORDS);
//! let mut session =
//!     Session::new(&words, OpeningPreset::One.into(), StdRng::seed_from_u64(1)).unwrap();
//!
//! let mut oracle = SecretOracle::new(Word::new("truck").unwrap());
//! let state = session.play(&mut oracle).unwrap();
//! assert!(state.is_terminal());
//! ```

// Core domain types
pub mod core;

// Constraint store, filter and session
pub mod solver;

// Local secret-word game
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
