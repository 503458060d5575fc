use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Extension trait for Path to provide string conversion and resolution helpers
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// This is a convenience method that's equivalent to `path.to_str().ok_or_else(...)` but with
    /// a descriptive error message.
    ///
    /// # Examples
    /// ```
    /// use pyinit::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Makes the path absolute and canonical without requiring it to exist.
    ///
    /// Relative paths are joined onto the current directory. The longest
    /// existing ancestor is canonicalized (symlinks followed) and the
    /// remaining components are appended lexically, folding `.` and `..`.
    ///
    /// # Examples
    /// ```
    /// use pyinit::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let resolved = Path::new("no/such/dir/../file").resolve().unwrap();
    /// assert!(resolved.is_absolute());
    /// assert!(resolved.ends_with("no/such/file"));
    /// ```
    fn resolve(&self) -> Result<PathBuf>;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn resolve(&self) -> Result<PathBuf> {
        let absolute = if self.is_absolute() {
            self.to_path_buf()
        } else {
            std::env::current_dir()?.join(self)
        };

        let components: Vec<Component> = absolute.components().collect();
        for split in (1..=components.len()).rev() {
            let head: PathBuf = components[..split].iter().collect();
            if let Ok(canonical) = head.canonicalize() {
                return Ok(push_lexically(canonical, &components[split..]));
            }
        }
        Ok(push_lexically(PathBuf::new(), &components))
    }
}

fn push_lexically(mut base: PathBuf, rest: &[Component]) -> PathBuf {
    for component in rest {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                base.pop();
            }
            other => base.push(other.as_os_str()),
        }
    }
    base
}

/// Expands a leading `~` to the user's home directory.
///
/// Anything else, including `~user` forms, is returned unchanged.
pub fn expand_home(raw: &str) -> PathBuf {
    let home = || dirs::home_dir().filter(|home| !home.as_os_str().is_empty());
    if raw == "~" {
        if let Some(home) = home() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        if let Some(home) = home() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}
