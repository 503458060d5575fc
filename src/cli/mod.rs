pub mod args;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbose, ExtractArgs, PyrightArgs};
pub use runner::{append_pyright_config, extract_metadata, run_extract, run_pyright};
