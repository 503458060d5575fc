//! Project metadata extraction from `pyproject.toml`
//!
//! This module contains the manifest side of pyinit:
//! - `types`: schema variants, the field set and author entries
//! - `loader`: manifest loading, schema detection and key-path lookup
//! - `normalize`: collapsing TOML values into single-line strings
//! - `extract`: resolving the field set with fallbacks

pub mod extract;
pub mod loader;
pub mod normalize;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use extract::Extraction;
pub use loader::Manifest;
pub use types::{Author, Field, Schema};
