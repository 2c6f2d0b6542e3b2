//! Read-only filesystem probe used by the progress analysis.
//!
//! Probing never fails: a path that cannot be inspected is reported as absent,
//! and a file that cannot be read as text is reported as having zero lines.
//! Callers classify entries from these values alone, so read errors are only
//! logged here and never returned.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::debug;

/// Existence and line count of a single manifest path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub exists: bool,
    /// Zero when the path is absent or unreadable.
    pub line_count: usize,
}

impl ProbeResult {
    pub const ABSENT: Self = Self {
        exists: false,
        line_count: 0,
    };
}

/// Abstraction for filesystem access during analysis.
///
/// Paths are project-root relative and slash separated, exactly as written in the manifest.
pub trait FileProbe {
    fn exists(&self, relative: &str) -> bool;
    fn count_lines(&self, relative: &str) -> usize;

    /// Check existence and count lines only when the path is present.
    fn probe(&self, relative: &str) -> ProbeResult {
        if !self.exists(relative) {
            return ProbeResult::ABSENT;
        }
        ProbeResult {
            exists: true,
            line_count: self.count_lines(relative),
        }
    }
}

/// Probe that operates against the real filesystem under a project root.
#[derive(Debug, Clone)]
pub struct SystemFileProbe {
    root: PathBuf,
}

impl SystemFileProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

impl FileProbe for SystemFileProbe {
    fn exists(&self, relative: &str) -> bool {
        let path = self.resolve(relative);
        match path.try_exists() {
            Ok(exists) => exists,
            Err(err) => {
                debug!(
                    target: "refactor_progress::probe",
                    path = %path.display(),
                    reason = %err,
                    "Failed to stat path; treating as missing"
                );
                false
            }
        }
    }

    fn count_lines(&self, relative: &str) -> usize {
        let path = self.resolve(relative);
        match fs::read_to_string(&path) {
            Ok(text) => count_segments(&text),
            Err(err) => {
                debug!(
                    target: "refactor_progress::probe",
                    path = %path.display(),
                    reason = %err,
                    "Failed to read file; counting as 0 lines"
                );
                0
            }
        }
    }
}

/// Number of segments produced by splitting `text` on `'\n'`.
///
/// A trailing newline yields a trailing empty segment, so `"a\n"` counts as 2
/// and an empty file counts as 1.
pub fn count_segments(text: &str) -> usize {
    text.bytes().filter(|byte| *byte == b'\n').count() + 1
}
