use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Ensures `path` is an existing directory.
///
/// The returned error names the offending path; callers choose between
/// `MissingPath` and `NotADirectory` through `on_missing`.
pub fn ensure_dir<P: AsRef<Path>>(path: P, on_missing: fn(String) -> Error) -> Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Err(on_missing(path.display().to_string()));
    }
    Ok(())
}

/// Writes `content` to `dest_path`, truncating whatever was there before.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    log::debug!("Writing {} bytes to {}", content.len(), dest_path.display());
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Appends `content` to an existing file. The file is never created or truncated.
pub fn append_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    log::debug!("Appending {} bytes to {}", content.len(), dest_path.display());
    let mut file = std::fs::OpenOptions::new().append(true).open(dest_path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
