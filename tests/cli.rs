//! End-to-end runs of the `resistor-pair` binary.
#![cfg(feature = "cli")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_resistor-pair"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn binary")
}

fn workspace(resistors: &str, targets: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("resistors.txt"), resistors).unwrap();
    fs::write(dir.path().join("targets.txt"), targets).unwrap();
    dir
}

#[test]
fn default_files_produce_a_table() {
    let dir = workspace("10\n20\n", "15\nabc\n1000\n");
    let out = run(dir.path(), &[]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Target Value"));
    assert_eq!(
        lines[2],
        "      15.000 |   10.00 |   10.00 |    Series |       Star |         20.000"
    );
    assert!(lines[3].ends_with("No match found"));
}

#[test]
fn missing_source_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("resistors.txt"), "10\n").unwrap();

    let out = run(dir.path(), &[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("targets.txt"));
}

#[test]
fn explicit_paths_and_distinct() {
    let dir = workspace("", "");
    fs::write(dir.path().join("inv"), "10\n20\n").unwrap();
    fs::write(dir.path().join("tgt"), "15\n").unwrap();

    let out = run(
        dir.path(),
        &["--resistors", "inv", "--targets", "tgt", "--distinct"],
    );
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout.lines().nth(2),
        Some("      15.000 |   10.00 |   20.00 |    Series |       Star |         30.000")
    );
}

#[test]
fn builtin_series_replaces_resistor_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("targets.txt"), "2\n").unwrap();

    let out = run(dir.path(), &["--series", "e3"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().nth(2).unwrap().ends_with("2.000"));
}

#[test]
fn unknown_series_fails() {
    let dir = workspace("10\n", "5\n");
    let out = run(dir.path(), &["--series", "E96"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("e24"));
}

#[test]
fn series_name_ignores_case() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("targets.txt"), "220\n").unwrap();

    let out = run(dir.path(), &["--series", "E24", "--notation", "engineering"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
    for line in stdout.lines().skip(2) {
        let cells: Vec<&str> = line.split(" | ").collect();
        assert_eq!(cells[1].len(), 7);
        assert_eq!(cells[2].len(), 7);
    }
}
