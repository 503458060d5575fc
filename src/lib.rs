/// Handles argument parsing and the two command entry points.
pub mod cli;

/// Shared constants: file names, fallbacks, exit codes.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for std types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Reading project metadata from pyproject.toml.
pub mod manifest;

/// Appending the pyright configuration block.
pub mod pyright;

/// The KEY="value" output record.
pub mod record;
