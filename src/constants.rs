//! Constants used throughout pyinit

/// Manifest file looked up in the project root
pub const MANIFEST_FILE: &str = "pyproject.toml";

/// File the extractor writes the `KEY="value"` lines to
pub const OUTPUT_FILE: &str = "tmp.txt";

/// Environment variable holding the conda base prefix
pub const CONDA_PREFIX_ENV: &str = "CONDA_PREFIX";

/// Header of the table written by the pyright appender
pub const PYRIGHT_TABLE_HEADER: &str = "[tool.pyright]";

/// Characters stripped from the required Python version (`^3.11` -> `3.11`)
pub const VERSION_SPECIFIER_CHARS: &[char] = &['^', '=', '*', ':'];

/// Separator used when a sequence (e.g. authors) collapses to one line
pub const LIST_SEPARATOR: &str = ", ";

/// Fallback values for fields absent from the manifest
pub mod fallback {
    pub const LICENSE: &str = "Unlicense";
    pub const DESCRIPTION: &str = "Write your project description to pyproject.toml";
    pub const VERSION: &str = "0.1.0";
    pub const AUTHORS: &str = "";
    pub const PYTHON_VERSION: &str = "";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
