//! Single pass over the manifest that classifies entries and accumulates counters.
use serde::Serialize;

use crate::{
    lib::fs::FileProbe,
    manifest::{FileStatus, Manifest},
};

use super::Phase;

/// How an expected file compares against the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EntryClass {
    Missing,
    Compliant { lines: usize },
    Violation { lines: usize },
}

/// Classification of a single manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryOutcome {
    pub path: String,
    pub max_lines: usize,
    pub status: FileStatus,
    #[serde(flatten)]
    pub class: EntryClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyState {
    /// Still on disk; should be removed.
    Present,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyOutcome {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    pub state: LegacyState,
}

/// Invariant: `compliant_files <= existing_files <= total_files`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub total_files: usize,
    pub existing_files: usize,
    pub compliant_files: usize,
}

impl Counters {
    pub fn existing_percent(&self) -> u32 {
        percent(self.existing_files, self.total_files)
    }

    pub fn compliant_percent(&self) -> u32 {
        percent(self.compliant_files, self.total_files)
    }
}

/// An existing file over its line ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub file: String,
    pub actual: usize,
    pub expected: usize,
}

/// Everything one run learns about the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressReport {
    pub entries: Vec<EntryOutcome>,
    pub legacy: Vec<LegacyOutcome>,
    pub counters: Counters,
    pub violations: Vec<Violation>,
    pub phase: Phase,
}

/// Walk the manifest in order and classify each entry against `probe`.
pub fn analyze(manifest: &Manifest, probe: &dyn FileProbe) -> ProgressReport {
    let mut counters = Counters::default();
    let mut violations = Vec::new();
    let mut entries = Vec::with_capacity(manifest.files.len());

    for entry in &manifest.files {
        counters.total_files += 1;
        let result = probe.probe(&entry.path);

        let class = if !result.exists {
            EntryClass::Missing
        } else {
            counters.existing_files += 1;
            if result.line_count <= entry.max_lines {
                counters.compliant_files += 1;
                EntryClass::Compliant {
                    lines: result.line_count,
                }
            } else {
                violations.push(Violation {
                    file: entry.path.clone(),
                    actual: result.line_count,
                    expected: entry.max_lines,
                });
                EntryClass::Violation {
                    lines: result.line_count,
                }
            }
        };

        entries.push(EntryOutcome {
            path: entry.path.clone(),
            max_lines: entry.max_lines,
            status: entry.status,
            class,
        });
    }

    let legacy = manifest
        .legacy
        .iter()
        .map(|legacy| LegacyOutcome {
            path: legacy.path.clone(),
            replacement: legacy.replacement.clone(),
            state: if probe.exists(&legacy.path) {
                LegacyState::Present
            } else {
                LegacyState::Removed
            },
        })
        .collect();

    ProgressReport {
        entries,
        legacy,
        phase: Phase::classify(counters.existing_files, counters.total_files),
        counters,
        violations,
    }
}

/// `part / total` as a whole percentage, rounding halves up. Zero when `total` is zero.
pub fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let part = part as u128;
    let total = total as u128;
    ((part * 200 + total) / (total * 2)) as u32
}
