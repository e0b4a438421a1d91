//! Integration tests for headless playback

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{data_dir_with, sortviz, temp_fixture};

#[test]
fn play_headless_reports_completion() {
    let home = TempDir::new().unwrap();
    let data = data_dir_with(&["bubblesort_output.txt"]);
    sortviz(&home)
        .args(["play", "bubblesort", "--headless", "--interval-ms", "1"])
        .arg("--dir")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^bubblesort: Time complexity: O\(n²\) - \d+\.\d{2} seconds \(7 frames\)\n$",
        )
        .unwrap());
}

#[test]
fn play_headless_cooperative_mode() {
    let home = TempDir::new().unwrap();
    let data = data_dir_with(&["quicksort_output.txt"]);
    sortviz(&home)
        .args([
            "play",
            "quicksort",
            "--headless",
            "--interval-ms",
            "1",
            "--mode",
            "cooperative",
        ])
        .arg("--dir")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("quicksort: Time complexity: O(n log n)"));
}

#[test]
fn play_headless_with_explicit_file() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = temp_fixture("bubblesort_output.txt");
    sortviz(&home)
        .args(["play", "mergesort", "--headless", "--interval-ms", "1", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("mergesort: Time complexity: O(n log n)"));
}

#[test]
fn play_headless_missing_file_fails() {
    let home = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    sortviz(&home)
        .args(["play", "combsort", "--headless"])
        .arg("--dir")
        .arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("combsort_output.txt"));
}

#[test]
fn play_headless_requires_algorithm() {
    let home = TempDir::new().unwrap();
    sortviz(&home)
        .args(["play", "--headless"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--headless needs an ALGORITHM"));
}

#[test]
fn configured_data_dir_is_used() {
    let home = TempDir::new().unwrap();
    let data = data_dir_with(&["bubblesort_output.txt"]);
    std::fs::write(
        home.path().join("config.toml"),
        format!(
            "[playback]\nsingle_interval_ms = 1\n\n[data]\ndir = {:?}\n",
            data.path().display().to_string()
        ),
    )
    .unwrap();

    sortviz(&home)
        .args(["play", "bubblesort", "--headless"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(7 frames)"));
}
