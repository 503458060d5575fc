//! Manifest loading and key-path lookup

use crate::constants::MANIFEST_FILE;
use crate::error::{Error, Result};
use crate::ioutils::ensure_dir;
use crate::manifest::types::{Field, Schema};
use std::path::{Path, PathBuf};
use toml::{Table, Value};

/// A parsed `pyproject.toml` together with its detected layout.
#[derive(Debug)]
pub struct Manifest {
    path: PathBuf,
    schema: Schema,
    document: Table,
}

impl Manifest {
    /// Loads `pyproject.toml` from `project_root`.
    ///
    /// # Errors
    /// * `MissingPath` - `project_root` is not an existing directory
    /// * `MissingManifest` - the directory has no `pyproject.toml`
    /// * `ManifestParse` - the file is not valid TOML
    /// * `UnrecognizedManifest` - neither `[tool.poetry]` nor `[project]` is present
    pub fn load<P: AsRef<Path>>(project_root: P) -> Result<Self> {
        let project_root = project_root.as_ref();
        ensure_dir(project_root, |path| Error::MissingPath { path })?;

        let path = project_root.join(MANIFEST_FILE);
        if !path.is_file() {
            return Err(Error::MissingManifest { path: path.display().to_string() });
        }

        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content, path)
    }

    /// Parses manifest `content`; `path` is only used for reporting.
    pub fn parse(content: &str, path: PathBuf) -> Result<Self> {
        let document: Table = toml::from_str(content)?;
        let schema = Schema::detect(&document)
            .ok_or_else(|| Error::UnrecognizedManifest { path: path.display().to_string() })?;
        log::debug!("Loaded {} using the [{}] table", path.display(), schema);
        Ok(Self { path, schema, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    /// Looks up `field` by its schema-specific key path.
    pub fn lookup(&self, field: Field) -> Option<&Value> {
        let (first, rest) = field.key_path(self.schema).split_first()?;
        let value = rest
            .iter()
            .try_fold(self.document.get(*first)?, |value, key| value.get(*key));
        log::trace!("{} -> {:?}", field.key_path(self.schema).join("."), value);
        value
    }
}
