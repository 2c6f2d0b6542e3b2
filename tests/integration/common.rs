use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_refactor-progress");

/// Command for the binary with the profile environment cleared and `cwd` as working directory.
pub fn command_in(cwd: &Path) -> Command {
    let mut command = Command::new(BINARY_PATH);
    command
        .current_dir(cwd)
        .env_remove("REFACTOR_PROGRESS_ROOT")
        .env_remove("REFACTOR_PROGRESS_MANIFEST")
        .env_remove("RUST_LOG");
    command
}

pub fn run_in(cwd: &Path, args: &[&str]) -> Output {
    command_in(cwd)
        .args(args)
        .output()
        .expect("refactor-progress should run")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Write `lines` newline-joined lines to `root/relative`, creating parents.
pub fn write_lines(root: &Path, relative: &str, lines: usize) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("can create parent directories");
    }
    let body = vec!["x"; lines].join("\n");
    fs::write(&path, body).expect("can write fixture file");
}
