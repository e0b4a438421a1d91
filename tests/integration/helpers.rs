//! Shared fixtures and command builders

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Directory holding the checked-in snapshot fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Copy one fixture into a fresh temp dir.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &path).expect("Failed to copy fixture");
    (dir, path)
}

/// Temp data dir containing the given fixtures under their own names.
pub fn data_dir_with(names: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for name in names {
        fs::copy(fixtures_dir().join(name), dir.path().join(name)).expect("Failed to copy fixture");
    }
    dir
}

/// `sortviz` with config and log file isolated in `home`.
pub fn sortviz(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sortviz"));
    cmd.arg("--config")
        .arg(home.path().join("config.toml"))
        .arg("--log-file")
        .arg(home.path().join("sortviz.log"))
        .env("NO_COLOR", "1")
        .env_remove("SORTVIZ_LOG");
    cmd
}
