// SPDX-License-Identifier: MPL-2.0
//! Persistence of the user's language choice.
//!
//! The store holds exactly one value: the language code last selected by the
//! user. On disk it lives in a `settings.toml` under the platform config
//! directory. Absent or unreadable content is treated as "not set" rather
//! than an error, so a corrupted file can never block startup; write
//! failures surface as [`Error::Io`]/[`Error::Store`] and are handled
//! best-effort by the caller.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LinguaWeave";

/// The seam between the session and whatever backs persistence. The page
/// session only ever reads and writes one code string through it.
pub trait LanguageStore {
    /// The persisted code, or `None` when nothing usable is stored.
    fn load_language(&self) -> Option<String>;

    /// Persists the code. May fail; callers treat failure as non-fatal.
    fn save_language(&mut self, code: &str) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Settings {
    language: Option<String>,
}

/// TOML-file-backed store in the platform config directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Option<PathBuf>,
}

impl FileStore {
    /// Store at the default platform location. On platforms without a config
    /// directory every operation degrades to a no-op.
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path.push(CONFIG_FILE);
                path
            }),
        }
    }

    /// Store at an explicit path, for tests and portable deployments.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn read_settings(path: &Path) -> Settings {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Settings::default(),
        }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageStore for FileStore {
    fn load_language(&self) -> Option<String> {
        let path = self.path.as_deref()?;
        Self::read_settings(path).language
    }

    fn save_language(&mut self, code: &str) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let settings = Settings {
            language: Some(code.to_string()),
        };
        let content = toml::to_string_pretty(&settings)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// In-memory store for tests and headless use. Can be told to fail writes,
/// which models the quota/availability failures of the real thing.
#[derive(Debug, Default)]
pub struct MemoryStore {
    language: Option<String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(code: &str) -> Self {
        Self {
            language: Some(code.to_string()),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            language: None,
            fail_writes: true,
        }
    }
}

impl LanguageStore for MemoryStore {
    fn load_language(&self) -> Option<String> {
        self.language.clone()
    }

    fn save_language(&mut self, code: &str) -> Result<()> {
        if self.fail_writes {
            return Err(crate::error::Error::Store(
                "write rejected by store".to_string(),
            ));
        }
        self.language = Some(code.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_language() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join("settings.toml");
        let mut store = FileStore::at_path(&path);

        store.save_language("fr").expect("failed to save language");
        assert_eq!(store.load_language().as_deref(), Some("fr"));
    }

    #[test]
    fn load_returns_none_for_missing_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let store = FileStore::at_path(dir.path().join("settings.toml"));
        assert_eq!(store.load_language(), None);
    }

    #[test]
    fn load_returns_none_for_invalid_toml() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "not = valid = toml").expect("failed to write invalid toml");

        let store = FileStore::at_path(&path);
        assert_eq!(store.load_language(), None);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("deep").join("path").join("settings.toml");
        let mut store = FileStore::at_path(&path);

        store.save_language("es").expect("save should create directories");
        assert!(path.exists());
    }

    #[test]
    fn saving_overwrites_the_previous_choice() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        let mut store = FileStore::at_path(&path);

        store.save_language("en").expect("first save");
        store.save_language("pt-BR").expect("second save");
        assert_eq!(store.load_language().as_deref(), Some("pt-BR"));
    }

    #[test]
    fn failing_memory_store_reports_write_errors() {
        let mut store = MemoryStore::failing();
        assert!(store.save_language("en").is_err());
        assert_eq!(store.load_language(), None);
    }
}
