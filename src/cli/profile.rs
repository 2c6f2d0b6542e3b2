//! RunProfile and project-root/manifest resolution.
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::lib::{errors::ProfileError, paths::find_repo_root};
use crate::report::OutputFormat;

pub const PROJECT_ROOT_ENV: &str = "REFACTOR_PROGRESS_ROOT";
pub const MANIFEST_ENV: &str = "REFACTOR_PROGRESS_MANIFEST";

/// Where the project root came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    Cli,
    Env,
    /// Nearest ancestor of the working directory containing `.git`.
    Repository,
    CurrentDir,
}

impl RootSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RootSource::Cli => "cli",
            RootSource::Env => "env",
            RootSource::Repository => "repository",
            RootSource::CurrentDir => "current_dir",
        }
    }
}

/// Resolved settings for one analysis run.
#[derive(Debug, Clone)]
pub struct RunProfile {
    pub project_root: PathBuf,
    pub root_source: RootSource,
    /// `None` selects the built-in manifest.
    pub manifest_path: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Resolve the project root in the order: CLI override → env var → repository root → cwd.
pub fn resolve_project_root(
    override_path: Option<PathBuf>,
) -> Result<(PathBuf, RootSource), ProfileError> {
    let cwd = current_dir()?;
    resolve_project_root_from(override_path, env::var_os(PROJECT_ROOT_ENV), &cwd)
}

/// Resolve the project root from explicit inputs (testable helper).
pub fn resolve_project_root_from(
    override_path: Option<PathBuf>,
    env_value: Option<OsString>,
    cwd: &Path,
) -> Result<(PathBuf, RootSource), ProfileError> {
    let explicit = override_path
        .map(|path| (path, RootSource::Cli))
        .or_else(|| non_empty(env_value).map(|path| (path, RootSource::Env)));

    if let Some((path, source)) = explicit {
        let path = absolutize(path, cwd);
        if !path.is_dir() {
            return Err(ProfileError::RootNotDirectory { path });
        }
        return Ok((path, source));
    }

    match find_repo_root(cwd) {
        Some(root) => Ok((root, RootSource::Repository)),
        None => Ok((cwd.to_path_buf(), RootSource::CurrentDir)),
    }
}

/// Resolve the manifest file in the order: CLI override → env var → built-in (`None`).
pub fn resolve_manifest_path(
    override_path: Option<PathBuf>,
) -> Result<Option<PathBuf>, ProfileError> {
    let cwd = current_dir()?;
    Ok(resolve_manifest_path_from(
        override_path,
        env::var_os(MANIFEST_ENV),
        &cwd,
    ))
}

pub fn resolve_manifest_path_from(
    override_path: Option<PathBuf>,
    env_value: Option<OsString>,
    cwd: &Path,
) -> Option<PathBuf> {
    override_path
        .or_else(|| non_empty(env_value))
        .map(|path| absolutize(path, cwd))
}

fn current_dir() -> Result<PathBuf, ProfileError> {
    env::current_dir().map_err(|source| ProfileError::CurrentDir { source })
}

fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
    value
        .filter(|v| !v.to_string_lossy().trim().is_empty())
        .map(PathBuf::from)
}

fn absolutize(path: PathBuf, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
