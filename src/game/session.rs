//! Session state machine
//!
//! A session owns the secret word, the guess history and the letters typed so
//! far. Every operation runs to completion synchronously and either succeeds
//! or leaves the state untouched.

use super::keyboard::KeyboardHints;
use super::{Dictionary, MAX_ATTEMPTS, PlayError, win_message};
use crate::core::{Classification, WORD_LENGTH, Word};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// True for `Won` and `Lost`
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One submitted guess with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    classification: Classification,
}

impl GuessRecord {
    /// Score `word` against `secret`
    #[must_use]
    pub fn score(secret: &Word, word: Word) -> Self {
        let classification = Classification::classify(secret, &word);
        Self {
            word,
            classification,
        }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn classification(&self) -> &Classification {
        &self.classification
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.classification.is_perfect()
    }
}

/// Everything a session needs to resume
///
/// Invariants (checked by [`SessionState::from_snapshot`]):
/// - at most `MAX_ATTEMPTS` guesses
/// - only the last guess may equal the secret, and then status is `Won`
/// - status is `Lost` exactly when all attempts are used without a win
/// - the buffer holds at most `WORD_LENGTH` lowercase letters, none once over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    secret: Word,
    history: Vec<GuessRecord>,
    buffer: String,
    status: GameStatus,
}

/// Serializable form of a session
///
/// Classifications are not stored; they are recomputed from the secret on
/// restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub secret: Word,
    pub guesses: Vec<Word>,
    pub buffer: String,
    pub status: GameStatus,
}

/// Why a snapshot cannot be restored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("Snapshot has {0} guesses, at most {MAX_ATTEMPTS} allowed")]
    TooManyGuesses(usize),

    #[error("Snapshot continues after the secret was found on attempt {attempt}")]
    GuessAfterWin { attempt: usize },

    #[error("Snapshot status {stored:?} does not match its history ({derived:?})")]
    StatusMismatch {
        stored: GameStatus,
        derived: GameStatus,
    },

    #[error("Snapshot of a finished game has typed letters")]
    BufferOnFinishedGame,

    #[error("Snapshot buffer {0:?} is not up to {WORD_LENGTH} lowercase letters")]
    InvalidBuffer(String),
}

impl SessionState {
    /// A fresh game around `secret`
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self {
            secret,
            history: Vec::new(),
            buffer: String::new(),
            status: GameStatus::InProgress,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Submitted guesses, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Letters typed for the next guess
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of guesses submitted so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.history.len())
    }

    /// Capture the state for persistence
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            secret: self.secret.clone(),
            guesses: self.history.iter().map(|r| r.word.clone()).collect(),
            buffer: self.buffer.clone(),
            status: self.status,
        }
    }

    /// Rebuild a state from a snapshot, rescoring every guess
    ///
    /// # Errors
    /// Returns `SnapshotError` if the snapshot violates any session invariant.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Result<Self, SnapshotError> {
        let SessionSnapshot {
            secret,
            guesses,
            buffer,
            status,
        } = snapshot;

        if guesses.len() > MAX_ATTEMPTS {
            return Err(SnapshotError::TooManyGuesses(guesses.len()));
        }

        if let Some(idx) = guesses.iter().position(|g| *g == secret)
            && idx + 1 != guesses.len()
        {
            return Err(SnapshotError::GuessAfterWin { attempt: idx + 1 });
        }

        let history: Vec<GuessRecord> = guesses
            .into_iter()
            .map(|word| GuessRecord::score(&secret, word))
            .collect();

        let derived = derive_status(&history);
        if derived != status {
            return Err(SnapshotError::StatusMismatch {
                stored: status,
                derived,
            });
        }

        if status.is_over() && !buffer.is_empty() {
            return Err(SnapshotError::BufferOnFinishedGame);
        }

        if buffer.len() > WORD_LENGTH || !buffer.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(SnapshotError::InvalidBuffer(buffer));
        }

        Ok(Self {
            secret,
            history,
            buffer,
            status,
        })
    }
}

/// Status implied by a scored history
fn derive_status(history: &[GuessRecord]) -> GameStatus {
    match history.last() {
        Some(last) if last.is_win() => GameStatus::Won,
        _ if history.len() >= MAX_ATTEMPTS => GameStatus::Lost,
        _ => GameStatus::InProgress,
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub record: GuessRecord,
    pub status: GameStatus,
    /// 1-indexed attempt number of this guess
    pub attempt: usize,
}

impl SubmitOutcome {
    /// Congratulation text, only for a winning guess
    #[must_use]
    pub fn win_message(&self) -> Option<&'static str> {
        (self.status == GameStatus::Won).then(|| win_message(self.attempt))
    }
}

/// A single game in play
pub struct Session<'a, D: Dictionary + ?Sized> {
    dictionary: &'a D,
    state: SessionState,
}

impl<'a, D: Dictionary + ?Sized> Session<'a, D> {
    /// Start a game with a random secret
    #[must_use]
    pub fn new(dictionary: &'a D) -> Self {
        Self::new_with(dictionary, &mut rand::rng())
    }

    /// Start a game drawing the secret from `rng`
    #[must_use]
    pub fn new_with(dictionary: &'a D, rng: &mut dyn RngCore) -> Self {
        let secret = dictionary.random_word(rng);
        Self::with_secret(dictionary, secret)
    }

    /// Start a game around a known secret
    #[must_use]
    pub const fn with_secret(dictionary: &'a D, secret: Word) -> Self {
        Self {
            dictionary,
            state: SessionState::new(secret),
        }
    }

    /// Resume a previously captured state
    #[must_use]
    pub const fn restore(dictionary: &'a D, state: SessionState) -> Self {
        Self { dictionary, state }
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a D {
        self.dictionary
    }

    /// Abandon the current game and draw a new secret
    pub fn start_new_game(&mut self) {
        self.start_new_game_with(&mut rand::rng());
    }

    pub fn start_new_game_with(&mut self, rng: &mut dyn RngCore) {
        let secret = self.dictionary.random_word(rng);
        debug!(secret = %secret, "New secret drawn");
        self.state = SessionState::new(secret);
    }

    /// Replace the whole state from a snapshot
    ///
    /// # Errors
    /// Returns `SnapshotError` if the snapshot is inconsistent; the current
    /// state is kept in that case.
    pub fn restore_from_snapshot(&mut self, snapshot: SessionSnapshot) -> Result<(), SnapshotError> {
        self.state = SessionState::from_snapshot(snapshot)?;
        Ok(())
    }

    /// Type one letter
    ///
    /// Uppercase letters are accepted and stored lowercase.
    ///
    /// # Errors
    /// - `PlayError::GameOver` once the game has ended
    /// - `PlayError::InvalidLetter` for anything but an ASCII letter
    /// - `PlayError::BufferFull` when `WORD_LENGTH` letters are already typed
    pub fn append_letter(&mut self, letter: char) -> Result<(), PlayError> {
        if self.state.status.is_over() {
            return Err(PlayError::GameOver);
        }
        if !letter.is_ascii_alphabetic() {
            return Err(PlayError::InvalidLetter(letter));
        }
        if self.state.buffer.len() >= WORD_LENGTH {
            return Err(PlayError::BufferFull);
        }

        self.state.buffer.push(letter.to_ascii_lowercase());
        Ok(())
    }

    /// Erase the last typed letter, returning it
    ///
    /// # Errors
    /// - `PlayError::GameOver` once the game has ended
    /// - `PlayError::BufferEmpty` when nothing is typed
    pub fn remove_letter(&mut self) -> Result<char, PlayError> {
        if self.state.status.is_over() {
            return Err(PlayError::GameOver);
        }
        self.state.buffer.pop().ok_or(PlayError::BufferEmpty)
    }

    /// Submit the typed letters as a guess
    ///
    /// On success the guess is scored, appended to the history, the buffer is
    /// cleared and the status advances.
    ///
    /// # Errors
    /// - `PlayError::GameOver` once the game has ended
    /// - `PlayError::IncompleteGuess` with fewer than `WORD_LENGTH` letters
    /// - `PlayError::NotInDictionary` for unknown words
    ///
    /// No turn is consumed on error.
    pub fn submit_guess(&mut self) -> Result<SubmitOutcome, PlayError> {
        if self.state.status.is_over() {
            return Err(PlayError::GameOver);
        }

        let len = self.state.buffer.len();
        if len != WORD_LENGTH {
            return Err(PlayError::IncompleteGuess { len });
        }

        let word = Word::new(self.state.buffer.as_str())
            .map_err(|_| PlayError::IncompleteGuess { len })?;
        if !self.dictionary.contains(&word) {
            return Err(PlayError::NotInDictionary {
                word: self.state.buffer.clone(),
            });
        }

        let record = GuessRecord::score(&self.state.secret, word);
        self.state.history.push(record.clone());
        self.state.buffer.clear();
        self.state.status = derive_status(&self.state.history);

        let attempt = self.state.history.len();
        debug!(
            guess = %record.word,
            feedback = %record.classification,
            attempt,
            "Guess accepted"
        );
        if self.state.status.is_over() {
            info!(status = ?self.state.status, attempt, "Game finished");
        }

        Ok(SubmitOutcome {
            record,
            status: self.state.status,
            attempt,
        })
    }

    /// Best verdict seen so far for each letter
    #[must_use]
    pub fn keyboard_hints(&self) -> KeyboardHints {
        KeyboardHints::from_history(&self.state.history)
    }
}
