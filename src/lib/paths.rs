//! Project-root discovery and manifest path validation helpers.

use std::path::{Component, Path, PathBuf};

/// Nearest ancestor of `start` (inclusive) that contains a `.git` entry.
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Returns true if `path` is a non-empty, relative path that stays inside the project root.
pub fn is_contained_relative(path: &str) -> bool {
    if path.trim().is_empty() {
        return false;
    }
    let path = Path::new(path);
    if path.has_root() {
        return false;
    }
    path.components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
