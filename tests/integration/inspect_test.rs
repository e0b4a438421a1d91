//! Integration tests for the inspect command

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{fixtures_dir, sortviz};

#[test]
fn inspect_prints_summary() {
    let home = TempDir::new().unwrap();
    sortviz(&home)
        .arg("inspect")
        .arg(fixtures_dir().join("bubblesort_output.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Frames"))
        .stdout(predicate::str::contains("7"))
        .stdout(predicate::str::contains("1..=8"))
        .stdout(predicate::str::contains("sorted"));
}

#[test]
fn inspect_json_is_parseable() {
    let home = TempDir::new().unwrap();
    let output = sortviz(&home)
        .arg("inspect")
        .arg(fixtures_dir().join("bubblesort_output.txt"))
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["frames"], 7);
    assert_eq!(json["width"], 5);
    assert_eq!(json["touched"], 5);
    assert_eq!(json["sorted"], true);
}

#[test]
fn inspect_trace_ends_with_complete_pass() {
    let home = TempDir::new().unwrap();
    sortviz(&home)
        .arg("inspect")
        .arg(fixtures_dir().join("quicksort_output.txt"))
        .arg("--trace")
        .assert()
        .success()
        .stdout(predicate::str::contains("    0 ....."))
        .stdout(predicate::str::contains(" done #####"));
}

#[test]
fn inspect_invalid_file_names_line() {
    let home = TempDir::new().unwrap();
    sortviz(&home)
        .arg("inspect")
        .arg(fixtures_dir().join("invalid.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: 'five'"));
}
