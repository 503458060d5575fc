#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub const POETRY_MANIFEST: &str = r#"[tool.poetry]
name = "demo"
version = "0.2.0"
description = "A demo project"
license = "MIT"
authors = ["Jane Doe <jane@example.com>"]

[tool.poetry.dependencies]
python = "^3.11"
"#;

pub const PEP621_MANIFEST: &str = r#"[project]
name = "demo"
version = "1.0.0"
requires-python = ">=3.12"
authors = [{ name = "A", email = "a@x.com" }, { name = "B" }]
"#;

/// Creates a temporary project directory, optionally with a pyproject.toml.
pub fn project(manifest: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(content) = manifest {
        std::fs::write(dir.path().join("pyproject.toml"), content).unwrap();
    }
    dir
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

/// Command for one of the crate's binaries with a clean conda environment.
pub fn command(bin: &str) -> Command {
    let mut cmd = Command::cargo_bin(bin).expect("Binary not found");
    cmd.env_remove("CONDA_PREFIX").env_remove("RUST_LOG");
    cmd
}
