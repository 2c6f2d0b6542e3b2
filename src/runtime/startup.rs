use std::process::ExitCode;

use anyhow::Error;
use tracing::debug;

use crate::{
    cli::RunProfile,
    lib::{fs::SystemFileProbe, telemetry},
    manifest::Manifest,
    report::{analyze, render},
};

/// Bundles a failure message with the exit code reported to the shell.
#[derive(Debug)]
pub struct RunExit {
    message: String,
    exit_code: ExitCode,
}

impl RunExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Load the manifest, probe the project tree and render the report.
///
/// Missing files and line-count violations are report content; only an unusable
/// manifest file fails the run.
pub fn run_analysis(profile: &RunProfile) -> Result<String, RunExit> {
    debug!(
        target: "refactor_progress::report",
        root = %profile.project_root.display(),
        root_source = profile.root_source.as_str(),
        format = profile.format.as_str(),
        "Resolved run profile"
    );

    let manifest = Manifest::load(profile.manifest_path.clone()).map_err(RunExit::from_error)?;
    telemetry::emit_manifest_loaded(&manifest);

    let probe = SystemFileProbe::new(&profile.project_root);
    let report = analyze(&manifest, &probe);
    telemetry::emit_report_summary(&report);

    render(&report, profile.format).map_err(RunExit::from_error)
}
