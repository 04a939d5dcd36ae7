// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A command that always exits successfully.
pub fn passing_command() -> &'static str {
    if cfg!(target_os = "windows") {
        "cmd /C exit 0"
    } else {
        "true"
    }
}

/// A command that always exits non-zero.
pub fn failing_command() -> &'static str {
    if cfg!(target_os = "windows") {
        "cmd /C exit 1"
    } else {
        "false"
    }
}

/// A command that cannot be launched at all.
pub fn missing_command() -> &'static str {
    "this_command_definitely_does_not_exist_12345"
}

/// Writes a matrix configuration file into the temporary directory and
/// returns its path.
pub fn write_matrix_config(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, content).expect("Failed to write matrix config");
    path
}
