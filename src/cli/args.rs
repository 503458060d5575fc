use crate::constants::{exit_codes, verbosity, CONDA_PREFIX_ENV};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Export pyproject.toml metadata as KEY="value" lines in tmp.txt.
#[derive(Parser, Debug, Clone)]
#[command(name = "pyinit-extract", author, version, about, long_about = None)]
pub struct ExtractArgs {
    /// Project name, used when the manifest does not declare one.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Append a [tool.pyright] block pointing at the project's conda environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "pyinit-pyright", author, version, about, long_about = None)]
pub struct PyrightArgs {
    /// Name of the project and of its conda environment.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Python version of the environment, e.g. `3.11`.
    #[arg(value_name = "PYTHON_VERSION")]
    pub python_version: String,

    /// Project root containing pyproject.toml.
    #[arg(value_name = "PROJECT_PATH")]
    pub project_path: PathBuf,

    /// Conda base prefix the environment lives under.
    #[arg(long, env = CONDA_PREFIX_ENV, default_value = "", hide_env_values = true)]
    pub conda_prefix: String,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args<T: Parser>() -> T {
    T::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = T::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
