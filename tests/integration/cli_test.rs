//! Integration tests for the command line surface

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::sortviz;

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    sortviz(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn version_shows_package_version() {
    let home = TempDir::new().unwrap();
    sortviz(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn algorithms_lists_complexity_table() {
    let home = TempDir::new().unwrap();
    sortviz(&home)
        .arg("algorithms")
        .assert()
        .success()
        .stdout(predicate::str::contains("bubblesort"))
        .stdout(predicate::str::contains("Radix Sort"))
        .stdout(predicate::str::contains("O(d(n + k))"))
        .stdout(predicate::str::contains("combsort_output.txt"));
}

#[test]
fn unknown_algorithm_is_usage_error() {
    let home = TempDir::new().unwrap();
    sortviz(&home)
        .args(["play", "bogosort", "--headless"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");

    sortviz(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(path.exists());

    sortviz(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    sortviz(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("single_interval_ms = 100"))
        .stdout(predicate::str::contains("compare_mode = \"cooperative\""));
}

#[test]
fn config_path_prints_override() {
    let home = TempDir::new().unwrap();
    sortviz(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn invalid_config_fails() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.toml"), "[playback\n").unwrap();
    sortviz(&home)
        .arg("algorithms")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn completions_generate_script() {
    let home = TempDir::new().unwrap();
    sortviz(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sortviz"));
}

#[test]
fn log_file_is_created() {
    let home = TempDir::new().unwrap();
    sortviz(&home).arg("algorithms").assert().success();
    assert!(home.path().join("sortviz.log").exists());
}
