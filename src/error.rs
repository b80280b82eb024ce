/*
 * Error Module
 *
 * Errors raised while loading configuration, persisting preferences and
 * acquiring the drawing surface. The particle field itself has no failure modes.
 */

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid preference file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration value for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("no drawing surface available")]
    MissingSurface,
    #[error("failed to create window: {0}")]
    Window(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig { field, reason: reason.into() }
    }
}
