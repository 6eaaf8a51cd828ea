//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config directory {0} does not exist")]
    MissingDirectory(PathBuf),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error("Failed to render configuration: {0}")]
    SerializeError(toml::ser::Error),

    #[error("XDG directory error: {0}")]
    XdgError(String),
}
