//! Collapses manifest values into the single-line strings written to the output record

use crate::constants::{LIST_SEPARATOR, VERSION_SPECIFIER_CHARS};
use crate::manifest::types::{Author, Field, Schema};
use toml::Value;

/// Comparison operators that may lead a PEP 440 `requires-python` clause.
const PEP440_OPERATORS: &[char] = &['>', '<', '~', '!'];

/// Renders the value found for `field` as one trimmed line.
pub fn normalize(field: Field, schema: Schema, value: &Value) -> String {
    let rendered = match (field, value) {
        (Field::Authors, Value::Array(entries)) => render_authors(entries),
        (Field::License, Value::Table(license)) => license
            .get("text")
            .or_else(|| license.get("file"))
            .map(render_value)
            .unwrap_or_else(|| render_value(value)),
        _ => render_value(value),
    };

    match field {
        Field::PythonVersion => python_version(&rendered, schema),
        _ => single_line(&rendered),
    }
}

/// Replaces line breaks with spaces and trims the result.
pub fn single_line(raw: &str) -> String {
    raw.replace("\r\n", " ").replace(|c: char| c == '\r' || c == '\n', " ").trim().to_string()
}

/// Removes `^ = * :` decoration from a required Python version.
///
/// A PEP 621 `requires-python` is additionally reduced to the version of its
/// first lower-bound or exact clause, so `<4,>=3.9` becomes `3.9`. Upper
/// bounds and exclusions are skipped; with nothing else left the result is empty.
pub fn python_version(raw: &str, schema: Schema) -> String {
    let raw = single_line(raw);
    let raw = match schema {
        Schema::Legacy => raw.as_str(),
        Schema::Modern => raw
            .split(',')
            .map(str::trim)
            .find(|clause| !clause.starts_with('<') && !clause.starts_with("!="))
            .unwrap_or_default(),
    };
    let stripped: String = raw
        .chars()
        .filter(|c| !VERSION_SPECIFIER_CHARS.contains(c))
        .filter(|c| schema == Schema::Legacy || !PEP440_OPERATORS.contains(c))
        .collect();
    stripped.trim().to_string()
}

fn render_authors(entries: &[Value]) -> String {
    let parsed: Result<Vec<Author>, _> =
        entries.iter().map(|entry| entry.clone().try_into::<Author>()).collect();
    match parsed {
        Ok(authors) => authors
            .iter()
            .map(|author| single_line(&author.to_string()))
            .filter(|author| !author.is_empty())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR),
        Err(e) => {
            log::debug!("authors are not strings or name/email tables ({e}), joining as-is");
            join(entries)
        }
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Datetime(dt) => dt.to_string(),
        Value::Array(items) => join(items),
        Value::Table(_) => value.to_string(),
    }
}

fn join(items: &[Value]) -> String {
    items.iter().map(render_value).collect::<Vec<_>>().join(LIST_SEPARATOR)
}
