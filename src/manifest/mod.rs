//! Expected file layout of the refactor: target modules with line ceilings plus legacy files.
use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lib::errors::ConfigError;

mod builtin;
pub mod file;

pub use builtin::{BUILTIN_FILES, BUILTIN_LEGACY};
pub use file::{manifest_schema, ManifestDocument};

/// Refactor status recorded for a target file.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum FileStatus {
    /// Exists today and must shrink below its ceiling.
    ToRefactor,
    /// Not written yet.
    #[default]
    Pending,
}

impl FileStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FileStatus::ToRefactor => "to-refactor",
            FileStatus::Pending => "pending",
        }
    }
}

/// A file the refactor is expected to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// Project-root relative, slash separated.
    pub path: String,
    pub max_lines: usize,
    pub status: FileStatus,
}

impl ManifestEntry {
    pub fn new(path: impl Into<String>, max_lines: usize, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            max_lines,
            status,
        }
    }
}

/// A file expected to be gone once the refactor finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyFileEntry {
    pub path: String,
    /// Where the file's content is expected to live instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

impl LegacyFileEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            replacement: None,
        }
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }
}

/// Where a manifest came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    BuiltIn,
    File(PathBuf),
}

/// Read-only description of the target layout, iterated in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub files: Vec<ManifestEntry>,
    pub legacy: Vec<LegacyFileEntry>,
    pub source: ManifestSource,
}

impl Manifest {
    /// Construct a manifest that did not come from a file.
    pub fn new(files: Vec<ManifestEntry>, legacy: Vec<LegacyFileEntry>) -> Self {
        Self {
            files,
            legacy,
            source: ManifestSource::BuiltIn,
        }
    }

    /// The fixed manifest shipped with the binary.
    pub fn builtin() -> Self {
        let files = BUILTIN_FILES
            .iter()
            .map(|(path, max_lines, status)| ManifestEntry::new(*path, *max_lines, *status))
            .collect();
        let legacy = BUILTIN_LEGACY
            .iter()
            .map(|(path, replacement)| LegacyFileEntry::new(*path).with_replacement(*replacement))
            .collect();
        Self::new(files, legacy)
    }

    /// Load `path` when given, otherwise fall back to the built-in table.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn entry(&self, path: &str) -> Option<&ManifestEntry> {
        self.files.iter().find(|entry| entry.path == path)
    }
}
