use std::fs;

use serde_json::Value;
use tempfile::tempdir;

use super::common::{command_in, fixture, run_in, stderr, stdout, write_lines};

#[test]
fn empty_repository_reports_every_file_missing() {
    let temp = tempdir().expect("create temp dir");
    fs::create_dir_all(temp.path().join(".git")).expect("create .git");

    let output = run_in(temp.path(), &[]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));

    let stdout = stdout(&output);
    assert_eq!(stdout.matches("(missing)").count(), 31, "{stdout}");
    assert!(stdout.contains("✅ src/graphql_client.py (removed)"), "{stdout}");
    assert!(stdout.contains("   Total expected files: 31"), "{stdout}");
    assert!(stdout.contains("   Files created: 0 (0%)"), "{stdout}");
    assert!(stdout.contains("   Files compliant: 0 (0%)"), "{stdout}");
    assert!(!stdout.contains("Line count violations"), "{stdout}");
    assert!(stdout.contains("Phase 1: Infrastructure Setup (not started)"));
}

#[test]
fn repository_root_is_found_from_a_subdirectory() {
    let temp = tempdir().expect("create temp dir");
    fs::create_dir_all(temp.path().join(".git")).expect("create .git");
    fs::create_dir_all(temp.path().join("scripts")).expect("create scripts");
    write_lines(temp.path(), "src/server.py", 473);
    write_lines(temp.path(), "src/auth.py", 17);

    let output = run_in(&temp.path().join("scripts"), &[]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));

    let stdout = stdout(&output);
    assert!(
        stdout.contains("⚠️  src/server.py (473 lines, exceeds 100)"),
        "{stdout}"
    );
    assert!(stdout.contains("⚠️  src/auth.py (should be in src/lib/)"), "{stdout}");
    assert!(stdout.contains("   Files created: 1 (3%)"), "{stdout}");
    assert!(stdout.contains("   Files compliant: 0 (0%)"), "{stdout}");
    assert!(stdout.contains("   src/server.py: 473 lines (max 100)"), "{stdout}");
    assert!(stdout.contains("Phase 2-4: GraphQL extraction and base setup"));
}

#[test]
fn root_flag_and_json_format() {
    let project = tempdir().expect("create project dir");
    let elsewhere = tempdir().expect("create working dir");
    write_lines(project.path(), "src/server.py", 80);
    write_lines(project.path(), "src/lib/auth.py", 60);

    let output = run_in(
        elsewhere.path(),
        &[
            "--root",
            project.path().to_string_lossy().as_ref(),
            "--format",
            "json",
        ],
    );
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));

    let value: Value = serde_json::from_str(&stdout(&output)).expect("stdout is JSON");
    assert_eq!(value["summary"]["total_files"], 31);
    assert_eq!(value["summary"]["existing_files"], 2);
    assert_eq!(value["summary"]["compliant_files"], 1);
    assert_eq!(value["summary"]["existing_percent"], 6);
    assert_eq!(value["summary"]["compliant_percent"], 3);
    assert_eq!(value["violations"][0]["file"], "src/lib/auth.py");
    assert_eq!(value["violations"][0]["actual"], 60);
    assert_eq!(value["violations"][0]["expected"], 50);
    assert_eq!(value["phase"]["id"], "base_setup");
}

#[test]
fn env_manifest_and_root_are_honoured() {
    let project = tempdir().expect("create project dir");
    write_lines(project.path(), "src/server.py", 100);
    write_lines(project.path(), "src/resources/__init__.py", 10);
    write_lines(project.path(), "src/lib/auth.py", 3);

    let output = command_in(project.path())
        .env("REFACTOR_PROGRESS_ROOT", project.path())
        .env(
            "REFACTOR_PROGRESS_MANIFEST",
            fixture("tests/fixtures/manifest_valid.toml"),
        )
        .output()
        .expect("refactor-progress should run");
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));

    let stdout = stdout(&output);
    assert!(stdout.contains("✅ src/server.py (100 lines)"), "{stdout}");
    assert!(stdout.contains("   Files created: 3 (100%)"), "{stdout}");
    assert!(stdout.contains("   Files compliant: 3 (100%)"), "{stdout}");
    assert!(stdout.contains("Phase 12: Complete! Ready for commit"), "{stdout}");
}

#[test]
fn invalid_manifest_fails_with_field_name() {
    let project = tempdir().expect("create project dir");

    let output = run_in(
        project.path(),
        &[
            "--manifest",
            fixture("tests/fixtures/manifest_zero_max_lines.toml")
                .to_string_lossy()
                .as_ref(),
        ],
    );

    assert!(!output.status.success(), "stdout:\n{}", stdout(&output));
    assert!(
        stderr(&output).contains("files.max_lines"),
        "stderr:\n{}",
        stderr(&output)
    );
    assert!(stdout(&output).is_empty());
}

#[test]
fn missing_root_directory_fails() {
    let temp = tempdir().expect("create temp dir");

    let output = run_in(temp.path(), &["--root", "does-not-exist"]);

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("is not a directory"),
        "stderr:\n{}",
        stderr(&output)
    );
}

#[test]
fn repeated_runs_print_identical_reports() {
    let temp = tempdir().expect("create temp dir");
    fs::create_dir_all(temp.path().join(".git")).expect("create .git");
    write_lines(temp.path(), "src/server.py", 150);
    write_lines(temp.path(), "src/graphql/__init__.py", 1);

    let first = stdout(&run_in(temp.path(), &[]));
    let second = stdout(&run_in(temp.path(), &[]));

    assert_eq!(first, second);
}
