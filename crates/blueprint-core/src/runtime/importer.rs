//! electron-forge import
//!
//! The import routine lives in the electron-forge package installed into the
//! project, so it is driven through `node` from the project root. Its only
//! effect this crate cares about is the `config.forge` object it writes into
//! package.json.

use super::package_manager::PackageManager;
use super::process::{self, CommandSpec};
use crate::config::ImportSettings;
use crate::error::{InstallError, InstallResult};
use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Module path of the import API inside the electron-forge package
const IMPORT_MODULE: &str = "electron-forge/dist/api/import";

/// Options passed to the import routine
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOptions {
    /// Whether the routine may rewrite package.json scripts
    pub update_scripts: bool,
    /// Output directory for packaged builds
    pub out_dir: String,
}

impl From<&ImportSettings> for ImportOptions {
    fn from(settings: &ImportSettings) -> Self {
        Self {
            update_scripts: settings.update_scripts,
            out_dir: settings.out_dir.clone(),
        }
    }
}

/// Bootstraps forge configuration into a project
#[async_trait]
pub trait ForgeImporter: Send + Sync {
    async fn import(&self, options: &ImportOptions) -> InstallResult<()>;
}

/// Runs electron-forge's import API with `node -e`
#[derive(Debug, Clone)]
pub struct NodeForgeImporter {
    project_root: PathBuf,
    package_manager: PackageManager,
    verbose: bool,
}

/// Full argument object handed to the import API
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImportCall<'a> {
    dir: &'a Path,
    interactive: bool,
    #[serde(flatten)]
    options: &'a ImportOptions,
}

impl NodeForgeImporter {
    pub fn new(
        project_root: impl Into<PathBuf>,
        package_manager: PackageManager,
        verbose: bool,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            package_manager,
            verbose,
        }
    }

    /// JavaScript snippet calling the import API with the given options
    pub fn script(&self, options: &ImportOptions) -> InstallResult<String> {
        let call = ImportCall {
            dir: &self.project_root,
            interactive: false,
            options,
        };
        let args = serde_json::to_string(&call).map_err(|e| {
            InstallError::Config(format!("cannot encode import options: {}", e))
        })?;

        Ok(format!(
            "require({module:?}).default({args})\
             .catch(function (err) {{ console.error((err && err.stack) || err); process.exit(1); }});",
            module = IMPORT_MODULE,
            args = args,
        ))
    }

    pub fn command_for(&self, options: &ImportOptions) -> InstallResult<CommandSpec> {
        let program = if cfg!(windows) { "node.exe" } else { "node" };
        let mut cmd = CommandSpec::new(program, &self.project_root)
            .arg("-e")
            .arg(self.script(options)?);
        for (key, value) in self.package_manager.forge_env() {
            cmd = cmd.env(key, value);
        }
        Ok(cmd)
    }
}

#[async_trait]
impl ForgeImporter for NodeForgeImporter {
    async fn import(&self, options: &ImportOptions) -> InstallResult<()> {
        let cmd = self.command_for(options)?;
        process::run(&cmd, self.verbose).await
    }
}
