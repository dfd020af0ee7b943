//! Termo Clone
//!
//! A six-letter word guessing game in the style of Termo, with a terminal UI,
//! a line-based mode and persistent statistics.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use termo::core::{Classification, Word};
//! use termo::game::{Game, MemoryStore, WordList};
//! use termo::wordlists::{WORDS, loader::words_from_slice};
//!
//! // Score a guess directly
//! let secret = Word::new("garden").unwrap();
//! let guess = Word::new("planet").unwrap();
//! println!("{}", Classification::classify(&secret, &guess).to_emoji());
//!
//! // Or play a full game
//! let words = WordList::new(words_from_slice(WORDS)).unwrap();
//! let mut game = Game::load(&words, MemoryStore::new());
//! for c in "planta".chars() {
//!     game.type_letter(c).unwrap();
//! }
//! let outcome = game.submit();
//! ```

// Core domain types
pub mod core;

// Game rules, session state and persistence
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Runtime settings
pub mod config;
