use std::fs;

use serde_json::Value;
use tempfile::tempdir;

use super::common::{run_in, stderr, stdout};

#[test]
fn help_lists_flags_and_manifest_command() {
    let temp = tempdir().expect("create temp dir");
    let output = run_in(temp.path(), &["--help"]);
    assert!(output.status.success(), "--help should succeed");

    let stdout = stdout(&output);
    for needle in ["--root", "--manifest", "--format", "manifest"] {
        assert!(
            stdout.contains(needle),
            "--help should list {needle}, got:\n{stdout}"
        );
    }
}

#[test]
fn manifest_show_output_can_be_fed_back() {
    let temp = tempdir().expect("create temp dir");
    let shown = run_in(temp.path(), &["manifest", "show"]);
    assert!(shown.status.success(), "stderr:\n{}", stderr(&shown));

    let path = temp.path().join("progress.toml");
    fs::write(&path, stdout(&shown)).expect("write dumped manifest");

    let output = run_in(
        temp.path(),
        &[
            "--manifest",
            path.to_string_lossy().as_ref(),
            "--root",
            temp.path().to_string_lossy().as_ref(),
        ],
    );
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert!(stdout(&output).contains("   Total expected files: 31"));
}

#[test]
fn manifest_schema_is_json() {
    let temp = tempdir().expect("create temp dir");
    let output = run_in(temp.path(), &["manifest", "schema"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));

    let value: Value = serde_json::from_str(&stdout(&output)).expect("schema is JSON");
    assert!(value["properties"]["files"].is_object(), "{value}");
}
