use crate::constants::OUTPUT_FILE;
use crate::error::Result;
use crate::ioutils::write_file;
use crate::manifest::Field;
use std::path::{Path, PathBuf};

/// The ordered `KEY="value"` lines written to `tmp.txt`.
///
/// Always holds one entry per [`Field`], in [`Field::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    entries: [(Field, String); 6],
}

impl OutputRecord {
    /// Builds a record by asking `value_of` for each field in output order.
    pub fn new(mut value_of: impl FnMut(Field) -> String) -> Self {
        Self { entries: Field::ALL.map(|field| (field, value_of(field))) }
    }

    pub fn get(&self, field: Field) -> &str {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// Renders the record, one `KEY="value"` line per field.
    pub fn render(&self) -> String {
        self.iter()
            .map(|(field, value)| format!("{}=\"{}\"\n", field.key(), escape(value)))
            .collect()
    }

    /// Writes the record to `tmp.txt` in `project_root`, replacing any previous file.
    pub fn write<P: AsRef<Path>>(&self, project_root: P) -> Result<PathBuf> {
        let target = project_root.as_ref().join(OUTPUT_FILE);
        write_file(&self.render(), &target)?;
        Ok(target)
    }
}

/// Escapes characters that are special inside a double-quoted shell string.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OutputRecord {
        OutputRecord::new(|field| match field {
            Field::Project => "demo".to_string(),
            Field::License => "MIT".to_string(),
            Field::Authors => "A <a@x.com>, B".to_string(),
            Field::Version => "0.2.0".to_string(),
            Field::Description => "Say \"hi\" for $5".to_string(),
            Field::PythonVersion => "3.11".to_string(),
        })
    }

    #[test]
    fn renders_six_lines_in_order() {
        let expected = "PROJECT=\"demo\"\n\
                        LICENSE=\"MIT\"\n\
                        AUTHORS=\"A <a@x.com>, B\"\n\
                        PROJECT_VERSION=\"0.2.0\"\n\
                        PROJECT_DESCRIPTION=\"Say \\\"hi\\\" for \\$5\"\n\
                        PYTHON_VERSION=\"3.11\"\n";
        assert_eq!(sample().render(), expected);
    }

    #[test]
    fn get_returns_field_value() {
        let record = sample();
        assert_eq!(record.get(Field::Authors), "A <a@x.com>, B");
        assert_eq!(record.iter().count(), 6);
    }

    #[test]
    fn write_replaces_previous_output() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(OUTPUT_FILE), "STALE=1\n".repeat(20)).unwrap();

        let target = sample().write(tmp.path()).unwrap();
        assert_eq!(std::fs::read_to_string(target).unwrap(), sample().render());
    }
}
