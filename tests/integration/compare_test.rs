//! Integration tests for the compare command

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{data_dir_with, fixtures_dir, sortviz};

#[test]
fn compare_headless_reports_both() {
    let home = TempDir::new().unwrap();
    let data = data_dir_with(&["bubblesort_output.txt", "quicksort_output.txt"]);
    sortviz(&home)
        .args([
            "compare",
            "bubblesort",
            "quicksort",
            "--headless",
            "--interval-ms",
            "1",
        ])
        .arg("--dir")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("bubblesort: Time complexity: O(n²)"))
        .stdout(predicate::str::contains("quicksort: Time complexity: O(n log n)"));
}

#[test]
fn shorter_run_finishes_first() {
    let home = TempDir::new().unwrap();
    let data = data_dir_with(&["bubblesort_output.txt", "quicksort_output.txt"]);
    let output = sortviz(&home)
        .args([
            "compare",
            "bubblesort",
            "quicksort",
            "--headless",
            "--interval-ms",
            "20",
        ])
        .arg("--dir")
        .arg(data.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    // 3 frames finish well before 7 at the same interval
    assert!(lines[0].starts_with("quicksort:"));
    assert!(lines[1].starts_with("bubblesort:"));
}

#[test]
fn compare_same_algorithm_is_rejected() {
    let home = TempDir::new().unwrap();
    sortviz(&home)
        .args(["compare", "mergesort", "mergesort", "--headless"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please choose two different algorithms.",
        ));
}

#[test]
fn compare_names_failing_file() {
    let home = TempDir::new().unwrap();
    sortviz(&home)
        .args(["compare", "bubblesort", "radixsort", "--headless"])
        .arg("--first-file")
        .arg(fixtures_dir().join("bubblesort_output.txt"))
        .arg("--second-file")
        .arg(fixtures_dir().join("invalid.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load radixsort data"))
        .stderr(predicate::str::contains("invalid.txt"));
}
