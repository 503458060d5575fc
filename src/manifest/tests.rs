//! Tests for the manifest module

use std::path::PathBuf;

use crate::error::Error;
use crate::manifest::{Field, Manifest, Schema};

const POETRY: &str = r#"
[tool.poetry]
name = "demo"
version = "0.2.0"
description = """
A demo
project"""
license = "MIT"
authors = ["A <a@x.com>", "B"]

[tool.poetry.dependencies]
python = "^3.11"
"#;

const PEP621: &str = r#"
[project]
name = "demo"
version = "1.0.0"
description = "Modern layout"
license = { text = "Apache-2.0" }
authors = [{ name = "A", email = "a@x.com" }, { name = "B" }]
requires-python = ">=3.12"
"#;

fn parse(content: &str) -> Manifest {
    Manifest::parse(content, PathBuf::from("pyproject.toml")).unwrap()
}

#[test]
fn extracts_poetry_manifest() {
    let manifest = parse(POETRY);
    assert_eq!(manifest.schema(), Schema::Legacy);

    let extraction = manifest.extract("ignored");
    assert!(extraction.missing.is_empty());

    let values: Vec<_> = extraction.record.iter().map(|(_, value)| value).collect();
    assert_eq!(values, ["demo", "MIT", "A <a@x.com>, B", "0.2.0", "A demo project", "3.11"]);
}

#[test]
fn extracts_pep621_manifest() {
    let manifest = parse(PEP621);
    assert_eq!(manifest.schema(), Schema::Modern);

    let record = manifest.extract("ignored").record;
    assert_eq!(record.get(Field::License), "Apache-2.0");
    assert_eq!(record.get(Field::Authors), "A <a@x.com>, B");
    assert_eq!(record.get(Field::PythonVersion), "3.12");
}

#[test]
fn missing_license_falls_back_to_unlicense() {
    let manifest = parse("[tool.poetry]\nname = \"demo\"\nversion = \"0.1.0\"\n");
    let extraction = manifest.extract("demo");

    assert_eq!(extraction.record.get(Field::License), "Unlicense");
    assert!(extraction.missing.contains(&Field::License));
}

#[test]
fn missing_description_gets_reminder() {
    let manifest = parse("[project]\nname = \"demo\"\n");
    let extraction = manifest.extract("demo");

    assert_eq!(
        extraction.record.get(Field::Description),
        "Write your project description to pyproject.toml"
    );
}

#[test]
fn empty_table_still_yields_six_entries() {
    let manifest = parse("[project]\n");
    let extraction = manifest.extract("cli-name");

    assert_eq!(extraction.record.iter().count(), 6);
    assert_eq!(extraction.missing, Field::ALL.to_vec());
    assert_eq!(extraction.record.get(Field::Project), "cli-name");
}

#[test]
fn lookup_follows_nested_key_path() {
    let manifest = parse(POETRY);
    let python = manifest.lookup(Field::PythonVersion).and_then(|value| value.as_str());
    assert_eq!(python, Some("^3.11"));
}

#[test]
fn rejects_unknown_layout() {
    let err = Manifest::parse("[tool.black]\n", PathBuf::from("pyproject.toml")).unwrap_err();
    assert!(matches!(err, Error::UnrecognizedManifest { .. }));
}

#[test]
fn rejects_invalid_toml() {
    let err = Manifest::parse("[project\nname =", PathBuf::from("pyproject.toml")).unwrap_err();
    assert!(matches!(err, Error::ManifestParse(_)));
}

#[test]
fn load_reports_missing_directory_and_manifest() {
    let tmp = tempfile::tempdir().unwrap();

    let err = Manifest::load(tmp.path().join("nope")).unwrap_err();
    assert!(matches!(err, Error::MissingPath { .. }));

    let err = Manifest::load(tmp.path()).unwrap_err();
    assert!(matches!(err, Error::MissingManifest { .. }));
}
