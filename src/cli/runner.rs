use crate::{
    cli::{ExtractArgs, PyrightArgs},
    error::Result,
    manifest::Manifest,
    pyright::{append_config, site_packages_path, AppendOutcome, AppendSettings, PyrightConfig},
};
use std::path::{Path, PathBuf};

/// Extracts the field set from `project_root/pyproject.toml` and writes `tmp.txt`.
///
/// A notice is printed for every field that fell back to its default.
/// Nothing is written unless every field resolved.
pub fn extract_metadata(project_root: &Path, project_name: &str) -> Result<PathBuf> {
    let manifest = Manifest::load(project_root)?;
    let extraction = manifest.extract(project_name);

    for field in &extraction.missing {
        println!("{}", field.missing_notice(project_name));
    }

    let output = extraction.record.write(project_root)?;
    log::info!("Wrote {} from {}", output.display(), manifest.path().display());
    Ok(output)
}

/// Entry point of `pyinit-extract`; works on the current directory.
pub fn run_extract(args: ExtractArgs) -> Result<()> {
    let project_root = std::env::current_dir()?;
    extract_metadata(&project_root, &args.project_name)?;
    Ok(())
}

/// Builds the pyright block for `args` and appends it to the project's manifest.
pub fn append_pyright_config(args: &PyrightArgs, settings: &AppendSettings) -> Result<AppendOutcome> {
    let extra_path = site_packages_path(settings, &args.project_name, &args.python_version)?;
    let config = PyrightConfig::new(args.python_version.as_str(), &extra_path)?;

    let outcome = append_config(&args.project_path, &config)?;
    match &outcome {
        AppendOutcome::Appended(manifest) => {
            log::info!("Appended [tool.pyright] to {}", manifest.display());
        }
        AppendOutcome::SkippedNoManifest(project_path) => {
            println!("pyproject.toml does not exist at {}...", project_path.display());
            println!("Skipping config appending step...");
        }
        AppendOutcome::AlreadyConfigured { manifest, extra_paths } => {
            println!("{} already has a [tool.pyright] table...", manifest.display());
            println!("Existing extraPaths: [{}]", extra_paths.join(", "));
            println!("Skipping config appending step...");
        }
    }
    Ok(outcome)
}

/// Entry point of `pyinit-pyright`.
pub fn run_pyright(args: PyrightArgs) -> Result<()> {
    let settings = AppendSettings::new(args.conda_prefix.as_str());
    append_pyright_config(&args, &settings)?;
    Ok(())
}
