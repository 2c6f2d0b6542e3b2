//! CLI entrypoint module structure.
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::manifest::{manifest_schema, Manifest};

pub mod args;
pub mod profile;

pub use args::{CliCommand, ManifestArgs, ManifestCommand, ParsedCommand, ProgressArgs};
pub use profile::{
    resolve_manifest_path, resolve_project_root, RootSource, RunProfile, MANIFEST_ENV,
    PROJECT_ROOT_ENV,
};

/// Execute CLI command mode and return the text to print.
pub fn execute_cli_command(command: CliCommand, manifest_path: Option<PathBuf>) -> Result<String> {
    match command {
        CliCommand::Manifest(manifest) => match manifest.command {
            ManifestCommand::Show => {
                let manifest = Manifest::load(manifest_path)?;
                Ok(manifest.to_toml()?)
            }
            ManifestCommand::Schema => {
                manifest_schema().context("failed to serialize manifest schema")
            }
        },
    }
}
