//! Persistence port and its implementations
//!
//! The game decides when to save; a store only knows how.

use super::{SessionSnapshot, Statistics};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Stored data is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where sessions and statistics are kept between runs
///
/// `Ok(None)` means nothing was saved yet. Malformed data is an error; the
/// caller decides how to recover.
pub trait PersistencePort {
    /// # Errors
    /// Returns `StoreError` if stored data cannot be read or parsed.
    fn load_session(&self) -> Result<Option<SessionSnapshot>, StoreError>;

    /// # Errors
    /// Returns `StoreError` if the snapshot cannot be written.
    fn save_session(&mut self, snapshot: &SessionSnapshot) -> Result<(), StoreError>;

    /// # Errors
    /// Returns `StoreError` if stored data cannot be read or parsed.
    fn load_statistics(&self) -> Result<Option<Statistics>, StoreError>;

    /// # Errors
    /// Returns `StoreError` if the statistics cannot be written.
    fn save_statistics(&mut self, stats: &Statistics) -> Result<(), StoreError>;
}

/// Keeps serialized JSON in memory
///
/// Data goes through the same encoding as the file store, so round-trip
/// behaviour can be tested without touching disk.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    session: Option<String>,
    statistics: Option<String>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored session JSON
    #[must_use]
    pub fn session_json(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Raw stored statistics JSON
    #[must_use]
    pub fn statistics_json(&self) -> Option<&str> {
        self.statistics.as_deref()
    }

    /// Overwrite the stored session with arbitrary text
    pub fn set_session_json(&mut self, json: impl Into<String>) {
        self.session = Some(json.into());
    }

    /// Overwrite the stored statistics with arbitrary text
    pub fn set_statistics_json(&mut self, json: impl Into<String>) {
        self.statistics = Some(json.into());
    }

    /// Number of successful saves
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl PersistencePort for MemoryStore {
    fn load_session(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        decode(self.session.as_deref())
    }

    fn save_session(&mut self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        self.session = Some(serde_json::to_string(snapshot)?);
        self.writes += 1;
        Ok(())
    }

    fn load_statistics(&self) -> Result<Option<Statistics>, StoreError> {
        decode(self.statistics.as_deref())
    }

    fn save_statistics(&mut self, stats: &Statistics) -> Result<(), StoreError> {
        self.statistics = Some(serde_json::to_string(stats)?);
        self.writes += 1;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(raw: Option<&str>) -> Result<Option<T>, StoreError> {
    raw.map(serde_json::from_str::<T>).transpose().map_err(Into::into)
}

/// Stores `session.json` and `statistics.json` in a directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub const SESSION_FILE: &'static str = "session.json";
    pub const STATISTICS_FILE: &'static str = "statistics.json";

    /// Open a store in `dir`, creating the directory if needed
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, StoreError> {
        match fs::read_to_string(self.dir.join(name)) {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write through a temporary file so a crash never leaves half a file
    fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value)?;
        let target = self.dir.join(name);
        let tmp = self.dir.join(format!("{name}.tmp"));
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }
}

impl PersistencePort for JsonFileStore {
    fn load_session(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        self.read(Self::SESSION_FILE)
    }

    fn save_session(&mut self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        self.write(Self::SESSION_FILE, snapshot)
    }

    fn load_statistics(&self) -> Result<Option<Statistics>, StoreError> {
        self.read(Self::STATISTICS_FILE)
    }

    fn save_statistics(&mut self, stats: &Statistics) -> Result<(), StoreError> {
        self.write(Self::STATISTICS_FILE, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameStatus, SessionState};

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            secret: Word::new("garden").unwrap(),
            guesses: vec![Word::new("planet").unwrap()],
            buffer: "ga".to_string(),
            status: GameStatus::InProgress,
        }
    }

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryStore::new();
        assert!(store.load_session().unwrap().is_none());
        assert!(store.load_statistics().unwrap().is_none());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        let mut stats = Statistics::default();
        stats.record_win(2);

        store.save_session(&snapshot()).unwrap();
        store.save_statistics(&stats).unwrap();

        assert_eq!(store.load_session().unwrap(), Some(snapshot()));
        assert_eq!(store.load_statistics().unwrap(), Some(stats));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn memory_store_reports_garbage() {
        let mut store = MemoryStore::new();
        store.set_session_json("{not json");
        store.set_statistics_json(r#"{"games_played":"many"}"#);

        assert!(matches!(store.load_session(), Err(StoreError::Json(_))));
        assert!(matches!(store.load_statistics(), Err(StoreError::Json(_))));
    }

    #[test]
    fn file_store_missing_files_are_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        assert!(store.load_session().unwrap().is_none());
        assert!(store.load_statistics().unwrap().is_none());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("nested")).unwrap();
        let mut stats = Statistics::default();
        stats.record_loss();

        store.save_session(&snapshot()).unwrap();
        store.save_statistics(&stats).unwrap();

        let reopened = JsonFileStore::open(store.dir()).unwrap();
        let loaded = reopened.load_session().unwrap().unwrap();
        assert_eq!(loaded, snapshot());
        assert_eq!(reopened.load_statistics().unwrap(), Some(stats));

        // Restoring and re-serializing yields the same snapshot
        let state = SessionState::from_snapshot(loaded).unwrap();
        assert_eq!(state.snapshot(), snapshot());

        assert!(!store.dir().join("session.json.tmp").exists());
    }

    #[test]
    fn file_store_reports_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(JsonFileStore::SESSION_FILE), "garbage").unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();

        assert!(matches!(store.load_session(), Err(StoreError::Json(_))));
    }
}
