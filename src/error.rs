use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse manifest. Original error: {0}")]
    ManifestParse(#[from] toml::de::Error),

    #[error("Failed to serialize pyright config. Original error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Project path not found: '{path}'.")]
    MissingPath { path: String },

    #[error("PROJECT_PATH: {path} is not a valid path")]
    NotADirectory { path: String },

    #[error("pyproject.toml not found: '{path}'.")]
    MissingManifest { path: String },

    /// Neither a `[tool.poetry]` nor a `[project]` table is present.
    #[error("No [tool.poetry] or [project] table found in '{path}'.")]
    UnrecognizedManifest { path: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with pyinit's Error as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_directory_message_names_the_path() {
        let err = Error::NotADirectory { path: "/tmp/file.txt".into() };
        assert_eq!(err.to_string(), "PROJECT_PATH: /tmp/file.txt is not a valid path");
    }

    #[test]
    fn parse_errors_convert_from_toml() {
        let parse_err = toml::from_str::<toml::Table>("name = ").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::ManifestParse(_)));
        assert!(err.to_string().starts_with("Failed to parse manifest."));
    }
}
