//! Configuration
//!
//! One TOML file (`folio.toml` under the user config dir) tunes every
//! timing constant, the cube, the pitch policy and the page content.
//! A missing file means defaults; a malformed file is an error the
//! binary reports and exits on rather than guessing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::content::Content;
use crate::cube::CubeTuning;
use crate::error::CoreError;
use crate::intro::IntroTiming;
use crate::orientation::OrientationConfig;

const APP_DIR: &str = "folio";
const CONFIG_FILE: &str = "folio.toml";
const SETTINGS_FILE: &str = "settings.toml";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub intro: IntroTiming,
    pub orientation: OrientationConfig,
    pub cube: CubeTuning,
    pub content: Content,
}

impl Config {
    /// Load from the default location, falling back to defaults when no
    /// file exists.
    pub fn load() -> Result<Self, CoreError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config dir available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file absent, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(CoreError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = toml::from_str(&text).map_err(|source| CoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// `<config dir>/folio/folio.toml`, if the platform has a config dir.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Where persisted settings (the theme) live.
#[must_use]
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}
