//! Runtime settings
//!
//! Defaults, then an optional `termo.toml`, then `TERMO_*` environment
//! variables. Command-line flags are applied last by the binary.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "termo.toml";

pub const ENV_DATA_DIR: &str = "TERMO_DATA_DIR";
pub const ENV_WORDLIST: &str = "TERMO_WORDLIST";
pub const ENV_LOG: &str = "TERMO_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory for the saved session, statistics and log file
    pub data_dir: PathBuf,
    /// Custom word list; the embedded list is used when unset
    pub wordlist: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `info` or `termo=debug`
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".termo"),
            wordlist: None,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("termo.log")
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    data_dir: Option<PathBuf>,
    wordlist: Option<PathBuf>,
    log_filter: Option<String>,
}

/// Resolve settings from file and environment
///
/// An explicit `config_path` must exist; the default `termo.toml` is optional.
///
/// # Errors
/// Returns an error if the config file cannot be read or is not valid TOML.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    let mut settings = Settings::default();

    let file = match config_path {
        Some(path) => Some(read_file_settings(path)?),
        None => match read_file_settings(Path::new(DEFAULT_CONFIG_FILE)) {
            Ok(file) => Some(file),
            Err(e) if is_not_found(&e) => None,
            Err(e) => return Err(e),
        },
    };
    if let Some(file) = file {
        apply_file(&mut settings, file);
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn read_file_settings(path: &Path) -> Result<FileSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config file '{}'", path.display()))
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

fn apply_file(settings: &mut Settings, file: FileSettings) {
    if let Some(dir) = file.data_dir {
        settings.data_dir = dir;
    }
    if let Some(path) = file.wordlist {
        settings.wordlist = Some(path);
    }
    if let Some(filter) = file.log_filter {
        settings.log_filter = filter;
    }
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup(ENV_DATA_DIR).filter(|v| !v.is_empty()) {
        settings.data_dir = PathBuf::from(v);
    }
    if let Some(v) = lookup(ENV_WORDLIST).filter(|v| !v.is_empty()) {
        settings.wordlist = Some(PathBuf::from(v));
    }
    if let Some(v) = lookup(ENV_LOG).filter(|v| !v.is_empty()) {
        settings.log_filter = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.data_dir, PathBuf::from(".termo"));
        assert_eq!(settings.wordlist, None);
        assert_eq!(settings.log_filter, "info");
        assert_eq!(settings.log_file(), PathBuf::from(".termo/termo.log"));
    }

    #[test]
    fn explicit_file_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "data_dir = \"/tmp/termo-data\"\nwordlist = \"palavras.txt\"\nlog_filter = \"debug\"\n",
        )
        .unwrap();

        let mut settings = Settings::default();
        apply_file(&mut settings, read_file_settings(&path).unwrap());
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/termo-data"));
        assert_eq!(settings.wordlist, Some(PathBuf::from("palavras.txt")));
        assert_eq!(settings.log_filter, "debug");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        fs::write(&path, "log_filter = \"warn\"\n").unwrap();

        let mut settings = Settings::default();
        apply_file(&mut settings, read_file_settings(&path).unwrap());
        assert_eq!(settings.data_dir, PathBuf::from(".termo"));
        assert_eq!(settings.log_filter, "warn");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(is_not_found(&err));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typo.toml");
        fs::write(&path, "data_dri = \"x\"\n").unwrap();

        assert!(read_file_settings(&path).is_err());
    }

    #[test]
    fn env_overrides_file() {
        let env: HashMap<&str, &str> = [
            (ENV_DATA_DIR, "/var/lib/termo"),
            (ENV_LOG, "termo=trace"),
            (ENV_WORDLIST, ""),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings {
            wordlist: Some(PathBuf::from("from-file.txt")),
            ..Settings::default()
        };
        apply_env(&mut settings, |key| env.get(key).map(ToString::to_string));

        assert_eq!(settings.data_dir, PathBuf::from("/var/lib/termo"));
        assert_eq!(settings.log_filter, "termo=trace");
        // empty values are ignored
        assert_eq!(settings.wordlist, Some(PathBuf::from("from-file.txt")));
    }
}
