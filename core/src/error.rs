//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the core (config loading, settings persistence).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode settings: {0}")]
    Encode(#[from] toml::ser::Error),
}
