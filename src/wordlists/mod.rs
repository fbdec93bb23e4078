//! Word lists
//!
//! The embedded default list plus loaders for lists on disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{LoadError, load_from_file, words_from_slice};
