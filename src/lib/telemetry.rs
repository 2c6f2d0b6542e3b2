//! Telemetry initialization and structured log helpers.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    manifest::{Manifest, ManifestSource},
    report::ProgressReport,
};

/// Filter used when `RUST_LOG` is unset; stdout carries the report, so stay quiet by default.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs on stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Emit the manifest that is about to be analyzed.
pub fn emit_manifest_loaded(manifest: &Manifest) {
    let source = match &manifest.source {
        ManifestSource::BuiltIn => "built-in".to_string(),
        ManifestSource::File(path) => path.display().to_string(),
    };
    info!(
        target: "refactor_progress::manifest",
        source = %source,
        files = manifest.files.len(),
        legacy = manifest.legacy.len(),
        "Manifest ready"
    );
}

/// Emit the counters of a finished analysis.
pub fn emit_report_summary(report: &ProgressReport) {
    info!(
        target: "refactor_progress::report",
        total = report.counters.total_files,
        existing = report.counters.existing_files,
        compliant = report.counters.compliant_files,
        violations = report.violations.len(),
        phase = report.phase.label(),
        "Analysis complete"
    );
}
