//! Embedded word list
//!
//! The default population, compiled in from `data/words.txt` at build time.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
