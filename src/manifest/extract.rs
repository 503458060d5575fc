//! Resolution of the six output fields, with fallback substitution

use crate::manifest::loader::Manifest;
use crate::manifest::normalize::{normalize, single_line};
use crate::manifest::types::Field;
use crate::record::OutputRecord;

/// Result of extracting the field set from a manifest.
#[derive(Debug)]
pub struct Extraction {
    pub record: OutputRecord,
    /// Fields absent from the manifest, replaced by their fallback.
    pub missing: Vec<Field>,
}

impl Manifest {
    /// Resolves every field, substituting fallbacks for absent ones.
    ///
    /// `project_name` is the name given on the command line; it stands in for
    /// a missing project name.
    pub fn extract(&self, project_name: &str) -> Extraction {
        let mut missing = Vec::new();
        let record = OutputRecord::new(|field| match self.lookup(field) {
            Some(value) => normalize(field, self.schema(), value),
            None => {
                log::debug!("{field} not found in {}, using fallback", self.path().display());
                missing.push(field);
                single_line(field.fallback(project_name))
            }
        });
        Extraction { record, missing }
    }
}
