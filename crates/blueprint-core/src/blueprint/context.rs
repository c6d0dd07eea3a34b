//! Inputs and outputs of an install run

use crate::config::BlueprintConfig;
use crate::fs::FileSystem;
use crate::logger::Logger;
use crate::runtime::{DependencyInstaller, ForgeImporter, PackageManager};
use std::path::PathBuf;

/// The project the blueprint is installed into, and how it was invoked
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Project root (the directory holding package.json)
    pub root: PathBuf,
    /// Package manager the project uses
    pub package_manager: PackageManager,
    /// Show output of the external tools
    pub verbose: bool,
    pub config: BlueprintConfig,
}

impl ProjectContext {
    pub fn new(root: impl Into<PathBuf>, package_manager: PackageManager) -> Self {
        Self {
            root: root.into(),
            package_manager,
            verbose: false,
            config: BlueprintConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BlueprintConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Everything with side effects outside this crate
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub installer: &'a dyn DependencyInstaller,
    pub importer: &'a dyn ForgeImporter,
    pub fs: &'a dyn FileSystem,
    pub logger: &'a dyn Logger,
}

/// What happened to the forge config during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForgeConfigOutcome {
    /// The project had a forge config before the run; it was left alone
    Preserved,
    /// `config.forge` already pointed at a file after the import
    AlreadyExternal(String),
    /// The imported config was written to this file
    Extracted(PathBuf),
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub had_forge_config: bool,
    pub package_manager: PackageManager,
    /// Marker files created by this run (existing ones are not listed)
    pub created_markers: Vec<PathBuf>,
    pub forge_config: ForgeConfigOutcome,
}

impl InstallReport {
    /// What the user should do after a successful run
    pub fn next_steps(&self, config: &BlueprintConfig) -> Vec<String> {
        let mut steps = Vec::new();

        match &self.forge_config {
            ForgeConfigOutcome::Extracted(_) => steps.push(format!(
                "Review the electron-forge config in {}",
                config.forge_config_path()
            )),
            ForgeConfigOutcome::Preserved => steps.push(
                "Your existing forge config was kept; compare it with what electron-forge import generates"
                    .to_string(),
            ),
            ForgeConfigOutcome::AlreadyExternal(path) => {
                steps.push(format!("Check the forge config referenced by package.json: {}", path))
            }
        }

        steps.push(format!(
            "Put app resources in {}/{{{}}}",
            config.electron_dir,
            config.resource_dirs.join(", ")
        ));
        steps.push("ember electron".to_string());
        steps.push("ember electron:package".to_string());
        steps.push("ember electron:make".to_string());

        steps
    }
}
