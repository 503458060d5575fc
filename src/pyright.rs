use crate::constants::{MANIFEST_FILE, PYRIGHT_TABLE_HEADER};
use crate::error::{Error, Result};
use crate::ext::{expand_home, PathExt};
use crate::ioutils::{append_file, ensure_dir};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Operating system family, which decides the conda environment layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// Site-packages directory of the `project_name` environment under `base`.
    pub fn site_packages(self, base: &str, project_name: &str, python_version: &str) -> String {
        match self {
            Platform::Windows => format!("{base}\\envs\\{project_name}\\Lib\\site-packages"),
            Platform::Posix => {
                format!("{base}/envs/{project_name}/lib/python{python_version}/site-packages")
            }
        }
    }
}

/// Settings the appender takes from the environment.
#[derive(Debug, Clone, Default)]
pub struct AppendSettings {
    /// Conda base prefix; may start with `~`. Empty when unset.
    pub conda_prefix: String,
    pub platform: Option<Platform>,
}

impl AppendSettings {
    pub fn new(conda_prefix: impl Into<String>) -> Self {
        Self { conda_prefix: conda_prefix.into(), platform: None }
    }

    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }
}

/// Absolute site-packages path of the project's conda environment.
pub fn site_packages_path(
    settings: &AppendSettings,
    project_name: &str,
    python_version: &str,
) -> Result<PathBuf> {
    let base = expand_home(&settings.conda_prefix);
    let raw = settings.platform().site_packages(
        base.to_str_checked()?,
        project_name,
        python_version,
    );
    let resolved = Path::new(&raw).resolve()?;
    log::debug!("Resolved site-packages {raw} -> {}", resolved.display());
    Ok(resolved)
}

/// The `[tool.pyright]` table appended to the manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PyrightConfig {
    pub python_version: String,
    pub extra_paths: Vec<String>,
}

impl PyrightConfig {
    pub fn new(python_version: impl Into<String>, extra_path: &Path) -> Result<Self> {
        Ok(Self {
            python_version: python_version.into(),
            extra_paths: vec![extra_path.to_str_checked()?.to_string()],
        })
    }

    /// Renders the block exactly as appended: a blank line, the table header, then the keys.
    pub fn to_block(&self) -> Result<String> {
        let body = toml::to_string(self)?;
        Ok(format!("\n{PYRIGHT_TABLE_HEADER}\n{body}"))
    }
}

/// What [`append_config`] did to the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The block was appended to this manifest.
    Appended(PathBuf),
    /// The directory has no manifest; nothing was written.
    SkippedNoManifest(PathBuf),
    /// The manifest already has a `[tool.pyright]` table; nothing was written.
    /// Carries the `extraPaths` found in that table.
    AlreadyConfigured { manifest: PathBuf, extra_paths: Vec<String> },
}

/// Appends `config` to the manifest in `project_path`.
///
/// # Errors
/// * `NotADirectory` - `project_path` does not name an existing directory
pub fn append_config<P: AsRef<Path>>(project_path: P, config: &PyrightConfig) -> Result<AppendOutcome> {
    let project_path = project_path.as_ref().resolve()?;
    ensure_dir(&project_path, |path| Error::NotADirectory { path })?;

    let manifest = project_path.join(MANIFEST_FILE);
    if !manifest.is_file() {
        return Ok(AppendOutcome::SkippedNoManifest(project_path));
    }

    let existing = std::fs::read_to_string(&manifest)?;
    if let Some(extra_paths) = existing_extra_paths(&existing) {
        return Ok(AppendOutcome::AlreadyConfigured { manifest, extra_paths });
    }

    append_file(&config.to_block()?, &manifest)?;
    Ok(AppendOutcome::Appended(manifest))
}

/// `extraPaths` of an existing `[tool.pyright]` table, or `None` when there is no such table.
fn existing_extra_paths(content: &str) -> Option<Vec<String>> {
    match toml::from_str::<toml::Table>(content) {
        Ok(document) => {
            let pyright = document.get("tool")?.get("pyright")?;
            let extra_paths = pyright
                .get("extraPaths")
                .and_then(toml::Value::as_array)
                .map(|paths| {
                    paths.iter().filter_map(toml::Value::as_str).map(str::to_string).collect()
                })
                .unwrap_or_default();
            Some(extra_paths)
        }
        Err(e) => {
            log::debug!("Manifest is not valid TOML ({e}), scanning for the table header");
            content
                .lines()
                .any(|line| line.trim() == PYRIGHT_TABLE_HEADER)
                .then(Vec::new)
        }
    }
}
