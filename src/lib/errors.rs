use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating a manifest file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the manifest file.
    #[error("Failed to read manifest file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into the raw manifest layout.
    #[error("Failed to parse manifest file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Manifest file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Manifest file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
    /// Manifest could not be rendered back to TOML.
    #[error("Failed to serialize manifest: {source}")]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }

    /// Name of the offending field, when the error points at one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. } | Self::InvalidField { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Errors raised while resolving the run profile (project root).
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Project root {path} is not a directory")]
    RootNotDirectory { path: PathBuf },
    #[error("Failed to obtain current directory: {source}")]
    CurrentDir {
        #[source]
        source: io::Error,
    },
}
