//! Load, validate and dump the TOML manifest file layout.
use std::{collections::HashSet, path::Path, path::PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::lib::{errors::ConfigError, paths::is_contained_relative};

use super::{FileStatus, LegacyFileEntry, Manifest, ManifestEntry, ManifestSource};

/// On-disk manifest layout (`[[files]]` and `[[legacy]]` tables).
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct ManifestDocument {
    /// Target files, reported in this order.
    #[serde(default)]
    pub files: Vec<FileRecord>,
    /// Files that should no longer exist.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legacy: Vec<LegacyRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct FileRecord {
    /// Project-root relative path, slash separated.
    pub path: String,
    /// Largest line count that still counts as compliant.
    pub max_lines: usize,
    #[serde(default)]
    pub status: FileStatus,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct LegacyRecord {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

impl Manifest {
    /// Load a manifest from a TOML file.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "refactor_progress::manifest",
            path = %path.display(),
            "Starting manifest load"
        );

        let builder = config::Config::builder()
            .add_source(config::File::from(path.clone()).format(config::FileFormat::Toml));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "refactor_progress::manifest",
                path = %path.display(),
                reason = %error,
                "Failed to read manifest file"
            );
            error
        })?;

        let raw: ManifestDocument = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "refactor_progress::manifest",
                path = %path.display(),
                reason = %error,
                "Failed to parse manifest file"
            );
            error
        })?;

        Self::from_document(raw, path.clone()).inspect_err(|err| {
            error!(
                target: "refactor_progress::manifest",
                path = %path.display(),
                reason = %err,
                "Failed to validate manifest file"
            );
        })
    }

    /// Validate a parsed document into a manifest sourced from `path`.
    pub fn from_document(raw: ManifestDocument, path: PathBuf) -> Result<Self, ConfigError> {
        if raw.files.is_empty() {
            return Err(ConfigError::MissingField {
                path,
                field: "files",
            });
        }

        let mut seen = HashSet::new();
        let mut files = Vec::with_capacity(raw.files.len());
        for record in raw.files {
            validate_path(&record.path, "files.path", &path)?;
            if record.max_lines == 0 {
                return Err(ConfigError::InvalidField {
                    path,
                    field: "files.max_lines",
                    message: format!("`{}` must allow at least one line", record.path),
                });
            }
            if !seen.insert(record.path.clone()) {
                return Err(ConfigError::InvalidField {
                    path,
                    field: "files.path",
                    message: format!("`{}` is listed more than once", record.path),
                });
            }
            files.push(ManifestEntry::new(
                record.path,
                record.max_lines,
                record.status,
            ));
        }

        let mut legacy = Vec::with_capacity(raw.legacy.len());
        for record in raw.legacy {
            validate_path(&record.path, "legacy.path", &path)?;
            legacy.push(LegacyFileEntry {
                path: record.path,
                replacement: record.replacement,
            });
        }

        Ok(Self {
            files,
            legacy,
            source: ManifestSource::File(path),
        })
    }

    /// Render this manifest in the on-disk TOML layout.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(&ManifestDocument::from(self))
            .map_err(|source| ConfigError::Serialize { source })
    }
}

impl From<&Manifest> for ManifestDocument {
    fn from(manifest: &Manifest) -> Self {
        Self {
            files: manifest
                .files
                .iter()
                .map(|entry| FileRecord {
                    path: entry.path.clone(),
                    max_lines: entry.max_lines,
                    status: entry.status,
                })
                .collect(),
            legacy: manifest
                .legacy
                .iter()
                .map(|entry| LegacyRecord {
                    path: entry.path.clone(),
                    replacement: entry.replacement.clone(),
                })
                .collect(),
        }
    }
}

/// JSON Schema describing the manifest file layout.
pub fn manifest_schema() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&schemars::schema_for!(ManifestDocument))
}

fn validate_path(value: &str, field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if is_contained_relative(value) {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field,
        message: format!("`{value}` must be a non-empty path relative to the project root"),
    })
}
