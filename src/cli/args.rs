//! CLI argument definitions and `RunProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::{resolve_manifest_path, resolve_project_root, RunProfile};
use crate::report::OutputFormat;

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    Analyze(RunProfile),
    Cli {
        command: CliCommand,
        manifest_path: Option<PathBuf>,
    },
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Inspect the manifest used for analysis.
    #[command(about = "Inspect the manifest used for analysis (show/schema)")]
    Manifest(ManifestArgs),
}

/// `manifest` command container.
#[derive(Debug, Clone, Args)]
#[command(
    about = "Inspect the manifest used for analysis",
    after_help = "Hint: `refactor-progress manifest show > progress.toml` gives a starting point for `--manifest`."
)]
pub struct ManifestArgs {
    #[command(subcommand)]
    pub command: ManifestCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ManifestCommand {
    /// Print the active manifest as TOML.
    Show,
    /// Print the JSON Schema of the manifest file.
    Schema,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "refactor-progress",
    version,
    about = "Report refactor progress against the expected file manifest",
    long_about = None
)]
pub struct ProgressArgs {
    /// Project root (overrides REFACTOR_PROGRESS_ROOT; defaults to the enclosing git repository).
    #[arg(long = "root", global = true)]
    pub root_override: Option<PathBuf>,
    /// Manifest TOML file (overrides REFACTOR_PROGRESS_MANIFEST; defaults to the built-in table).
    #[arg(long = "manifest", global = true)]
    pub manifest_override: Option<PathBuf>,
    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl ProgressArgs {
    /// Build a `RunProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<RunProfile> {
        let (project_root, root_source) = resolve_project_root(self.root_override)?;
        let manifest_path = resolve_manifest_path(self.manifest_override)?;

        Ok(RunProfile {
            project_root,
            root_source,
            manifest_path,
            format: self.format,
        })
    }

    /// Parse CLI args into either analysis mode or utility command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        match self.command {
            Some(command) => Ok(ParsedCommand::Cli {
                command,
                manifest_path: resolve_manifest_path(self.manifest_override)?,
            }),
            None => Ok(ParsedCommand::Analyze(self.build()?)),
        }
    }
}
