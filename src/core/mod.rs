//! Core domain types
//!
//! Words and guess scoring. Everything here is pure: no I/O, no randomness.

mod classification;
mod word;

pub use classification::{Classification, LetterClass};
pub use word::{WORD_LENGTH, Word, WordError};
