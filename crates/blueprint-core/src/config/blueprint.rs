//! Blueprint configuration: which packages get installed and where files go
//!
//! Every field has a default matching what ember-electron expects, so the
//! config file is optional. A project can still override single fields
//! through `ember-electron.yaml` in its root, or a file passed explicitly.

use super::package_spec::PackageSpec;
use crate::error::{InstallError, InstallResult};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Config file looked up in the project root when none is given explicitly
pub const PROJECT_CONFIG_FILE: &str = "ember-electron.yaml";

/// File name of the extracted forge config inside `electron_dir`
pub const FORGE_CONFIG_FILE: &str = "electron-forge-config.js";

/// Packages installed by the tooling step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageSet {
    /// Installed before the forge import. Pinned on purpose: newer electron
    /// majors break the electron-forge 5 toolchain.
    pub electron: PackageSpec,

    /// Installed as development dependencies after the import
    pub dev: Vec<PackageSpec>,

    /// Installed as production dependencies after the dev ones
    pub runtime: Vec<PackageSpec>,
}

impl Default for PackageSet {
    fn default() -> Self {
        Self {
            electron: spec("electron@2.0.7"),
            dev: vec![spec("devtron@^1.4.0")],
            runtime: vec![spec("electron-protocol-serve@^1.3.0")],
        }
    }
}

fn spec(s: &str) -> PackageSpec {
    s.parse()
        .unwrap_or_else(|e| panic!("built-in package spec is invalid: {}", e))
}

/// Options handed to `electron-forge import`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportSettings {
    pub update_scripts: bool,
    pub out_dir: String,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            update_scripts: false,
            out_dir: "electron-out".to_string(),
        }
    }
}

/// Full blueprint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlueprintConfig {
    pub packages: PackageSet,

    pub import: ImportSettings,

    /// Directory (relative to the project root) holding the electron sources
    pub electron_dir: String,

    /// Resource directories created under `electron_dir`, each with a `.gitkeep`
    pub resource_dirs: Vec<String>,

    /// Where the extracted forge config lives; also the value written to
    /// `config.forge` in package.json. Defaults to a file inside `electron_dir`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forge_config_path: Option<String>,
}

impl Default for BlueprintConfig {
    fn default() -> Self {
        Self {
            packages: PackageSet::default(),
            import: ImportSettings::default(),
            electron_dir: "ember-electron".to_string(),
            resource_dirs: vec![
                "resources".to_string(),
                "resources-darwin".to_string(),
                "resources-linux".to_string(),
                "resources-win32".to_string(),
            ],
            forge_config_path: None,
        }
    }
}

impl BlueprintConfig {
    /// Parse and validate YAML config text
    pub fn from_yaml(content: &str) -> InstallResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| InstallError::Config(format!("failed to parse YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config for a project.
    ///
    /// An explicit path must exist. Without one, `ember-electron.yaml` in the
    /// project root is used if present, defaults otherwise.
    pub fn load(explicit: Option<&Path>, project_root: &Path) -> InstallResult<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = project_root.join(PROJECT_CONFIG_FILE);
                if !candidate.exists() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content =
            std::fs::read_to_string(&path).map_err(|e| InstallError::fs(path.clone(), e))?;
        Self::from_yaml(&content)
            .map_err(|e| InstallError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Reject paths that would escape the project root
    pub fn validate(&self) -> InstallResult<()> {
        if self.resource_dirs.is_empty() {
            return Err(InstallError::Config(
                "resource_dirs must not be empty".to_string(),
            ));
        }

        ensure_relative("electron_dir", &self.electron_dir)?;
        ensure_relative("import.out_dir", &self.import.out_dir)?;
        if let Some(path) = &self.forge_config_path {
            ensure_relative("forge_config_path", path)?;
        }
        for dir in &self.resource_dirs {
            ensure_relative("resource_dirs", dir)?;
            if Path::new(dir).components().count() != 1 {
                return Err(InstallError::Config(format!(
                    "resource_dirs entry '{}' must be a single directory name",
                    dir
                )));
            }
        }

        Ok(())
    }

    /// Absolute marker file paths for every resource directory
    pub fn marker_paths(&self, project_root: &Path) -> Vec<PathBuf> {
        let electron_dir = project_root.join(&self.electron_dir);
        self.resource_dirs
            .iter()
            .map(|dir| electron_dir.join(dir).join(".gitkeep"))
            .collect()
    }

    /// Project-relative forge config path, as written to `config.forge`
    pub fn forge_config_path(&self) -> String {
        match &self.forge_config_path {
            Some(path) => path.clone(),
            None => format!("./{}/{}", self.electron_dir, FORGE_CONFIG_FILE),
        }
    }

    /// Absolute location of the extracted forge config
    pub fn forge_config_file(&self, project_root: &Path) -> PathBuf {
        let path = self.forge_config_path();
        let relative = path.strip_prefix("./").unwrap_or(&path);
        project_root.join(relative)
    }
}

fn ensure_relative(field: &str, value: &str) -> InstallResult<()> {
    let path = Path::new(value);
    let escapes = path.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });

    if value.is_empty() || escapes {
        return Err(InstallError::Config(format!(
            "{} must be a relative path inside the project, got '{}'",
            field, value
        )));
    }
    Ok(())
}
