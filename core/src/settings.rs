//! Persisted settings
//!
//! The theme preference survives restarts through a small key-value
//! store abstraction. Controllers and the surface go through the
//! [`Settings`] handle (get / set / subscribe) rather than reaching
//! into any ambient global; tests swap the file store for the in-memory
//! one and never touch the filesystem.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::CoreError;

const THEME_KEY: &str = "theme";

/// A tiny persisted string-to-string store.
pub trait SettingsStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// TOML-backed store at a fixed path. The whole map is rewritten on
/// every set; the file is tiny and the writes are rare (a theme toggle).
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store, loading existing values. A missing file is an
    /// empty store; a malformed one is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text).map_err(|source| CoreError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(CoreError::Read {
                    path: path.clone(),
                    source,
                })
            }
        };

        Ok(Self { path, values })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| CoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let text = toml::to_string(&self.values)?;
        fs::write(&self.path, text).map_err(|source| CoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// Light or dark page palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// The injected state holder: typed accessors over a store plus a watch
/// channel for observers.
pub struct Settings {
    store: Box<dyn SettingsStore>,
    theme_tx: watch::Sender<ThemeMode>,
}

impl Settings {
    /// Wrap a store, reading the persisted theme (default Light; an
    /// unrecognized persisted value also falls back to Light).
    #[must_use]
    pub fn new(store: Box<dyn SettingsStore>) -> Self {
        let theme = store
            .get(THEME_KEY)
            .and_then(|v| ThemeMode::parse(&v))
            .unwrap_or_default();
        let (theme_tx, _) = watch::channel(theme);
        Self { store, theme_tx }
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        *self.theme_tx.borrow()
    }

    /// Persist and broadcast a new theme.
    pub fn set_theme(&mut self, theme: ThemeMode) -> Result<(), CoreError> {
        self.store.set(THEME_KEY, theme.as_str())?;
        self.theme_tx.send_replace(theme);
        Ok(())
    }

    /// Flip between light and dark, returning the new mode.
    pub fn toggle_theme(&mut self) -> Result<ThemeMode, CoreError> {
        let next = self.theme().toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Observe theme changes.
    #[must_use]
    pub fn subscribe_theme(&self) -> watch::Receiver<ThemeMode> {
        self.theme_tx.subscribe()
    }
}
