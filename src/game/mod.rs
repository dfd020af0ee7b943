//! Game rules and state
//!
//! The session state machine, the statistics it feeds, and the ports it uses
//! for words and storage.

mod dictionary;
mod engine;
mod error;
mod keyboard;
mod messages;
mod persistence;
mod session;
mod stats;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

pub use dictionary::{Dictionary, DictionaryError, WordList};
pub use engine::Game;
pub use error::PlayError;
pub use keyboard::KeyboardHints;
pub use messages::{FALLBACK_WIN_MESSAGE, WIN_MESSAGES, win_message};
pub use persistence::{JsonFileStore, MemoryStore, PersistencePort, StoreError};
pub use session::{
    GameStatus, GuessRecord, Session, SessionSnapshot, SessionState, SnapshotError, SubmitOutcome,
};
pub use stats::{Statistics, StatisticsError};
