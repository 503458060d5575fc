//! Schema variants and the fixed field set extracted from a manifest

use crate::constants::fallback;
use serde::Deserialize;
use std::fmt::Display;
use toml::{Table, Value};

/// Table layout of a `pyproject.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// Poetry layout, metadata under `[tool.poetry]`.
    Legacy,
    /// PEP 621 layout, metadata under `[project]`.
    Modern,
}

impl Schema {
    /// Detects the layout of a parsed manifest. `[tool.poetry]` wins when both
    /// tables are present, since Poetry projects may carry a partial `[project]`.
    pub fn detect(document: &Table) -> Option<Self> {
        let poetry = document.get("tool").and_then(|tool| tool.get("poetry"));
        if poetry.is_some_and(Value::is_table) {
            Some(Schema::Legacy)
        } else if document.get("project").is_some_and(Value::is_table) {
            Some(Schema::Modern)
        } else {
            None
        }
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Schema::Legacy => "tool.poetry",
            Schema::Modern => "project",
        };
        write!(f, "{s}")
    }
}

/// One of the six metadata values exported to the output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Project,
    License,
    Authors,
    Version,
    Description,
    PythonVersion,
}

impl Field {
    /// Every field, in output order.
    pub const ALL: [Field; 6] = [
        Field::Project,
        Field::License,
        Field::Authors,
        Field::Version,
        Field::Description,
        Field::PythonVersion,
    ];

    /// Key used on the `KEY="value"` output line.
    pub fn key(self) -> &'static str {
        match self {
            Field::Project => "PROJECT",
            Field::License => "LICENSE",
            Field::Authors => "AUTHORS",
            Field::Version => "PROJECT_VERSION",
            Field::Description => "PROJECT_DESCRIPTION",
            Field::PythonVersion => "PYTHON_VERSION",
        }
    }

    /// Dotted location of the field inside the manifest for `schema`.
    pub fn key_path(self, schema: Schema) -> &'static [&'static str] {
        match (schema, self) {
            (Schema::Legacy, Field::Project) => &["tool", "poetry", "name"],
            (Schema::Legacy, Field::License) => &["tool", "poetry", "license"],
            (Schema::Legacy, Field::Authors) => &["tool", "poetry", "authors"],
            (Schema::Legacy, Field::Version) => &["tool", "poetry", "version"],
            (Schema::Legacy, Field::Description) => &["tool", "poetry", "description"],
            (Schema::Legacy, Field::PythonVersion) => {
                &["tool", "poetry", "dependencies", "python"]
            }
            (Schema::Modern, Field::Project) => &["project", "name"],
            (Schema::Modern, Field::License) => &["project", "license"],
            (Schema::Modern, Field::Authors) => &["project", "authors"],
            (Schema::Modern, Field::Version) => &["project", "version"],
            (Schema::Modern, Field::Description) => &["project", "description"],
            (Schema::Modern, Field::PythonVersion) => &["project", "requires-python"],
        }
    }

    /// Value substituted when the field is absent. The project name falls
    /// back to the name given on the command line.
    pub fn fallback(self, project_name: &str) -> &str {
        match self {
            Field::Project => project_name,
            Field::License => fallback::LICENSE,
            Field::Authors => fallback::AUTHORS,
            Field::Version => fallback::VERSION,
            Field::Description => fallback::DESCRIPTION,
            Field::PythonVersion => fallback::PYTHON_VERSION,
        }
    }

    /// Notice printed when the field is absent and the fallback is used.
    pub fn missing_notice(self, project_name: &str) -> String {
        match self {
            Field::License => {
                format!("No license specified. Setting license to '{}'.", fallback::LICENSE)
            }
            Field::Description => "No description given, setting reminder.".to_string(),
            other => format!(
                "No {} specified. Setting {} to '{}'.",
                other.label(),
                other.label(),
                other.fallback(project_name)
            ),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Project => "project name",
            Field::License => "license",
            Field::Authors => "authors",
            Field::Version => "version",
            Field::Description => "description",
            Field::PythonVersion => "python version",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// An entry of the `authors` array.
///
/// Poetry writes `"Name <email>"` strings, PEP 621 writes `{ name, email }` tables.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Author {
    Plain(String),
    Record { name: Option<String>, email: Option<String> },
}

impl Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Author::Plain(author) => write!(f, "{author}"),
            Author::Record { name: Some(name), email: Some(email) } => {
                write!(f, "{name} <{email}>")
            }
            Author::Record { name: Some(name), email: None } => write!(f, "{name}"),
            Author::Record { name: None, email: Some(email) } => write!(f, "<{email}>"),
            Author::Record { name: None, email: None } => Ok(()),
        }
    }
}
