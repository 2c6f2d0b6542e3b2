//! Entry point for refactor-progress.
use std::process::ExitCode;

use clap::Parser;
use refactor_progress::{
    cli::{execute_cli_command, CliCommand, ParsedCommand, ProgressArgs, RunProfile},
    lib::telemetry,
    runtime::{self, RunExit},
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), RunExit> {
    telemetry::init_tracing().map_err(RunExit::from_error)?;
    let args = ProgressArgs::parse();
    let command = args.into_command().map_err(RunExit::from_error)?;

    match command {
        ParsedCommand::Analyze(profile) => run_analysis(profile),
        ParsedCommand::Cli {
            command,
            manifest_path,
        } => handle_cli_command(command, manifest_path),
    }
}

fn run_analysis(profile: RunProfile) -> Result<(), RunExit> {
    let report = runtime::run_analysis(&profile)?;
    println!("{}", report.trim_end());
    Ok(())
}

fn handle_cli_command(
    command: CliCommand,
    manifest_path: Option<std::path::PathBuf>,
) -> Result<(), RunExit> {
    let output = execute_cli_command(command, manifest_path).map_err(RunExit::from_error)?;
    println!("{output}");
    Ok(())
}
