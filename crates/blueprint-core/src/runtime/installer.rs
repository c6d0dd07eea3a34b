//! Dependency installation through the project's package manager

use super::package_manager::PackageManager;
use super::process::{self, CommandSpec};
use crate::config::PackageSpec;
use crate::error::InstallResult;
use async_trait::async_trait;
use std::path::PathBuf;

/// One call to the package manager
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstallRequest {
    /// Record as a production dependency
    pub save: bool,
    /// Record as a development dependency
    pub save_dev: bool,
    /// Show the package manager's output
    pub verbose: bool,
    /// Packages in the order they were asked for
    pub packages: Vec<PackageSpec>,
}

impl InstallRequest {
    pub fn production(packages: Vec<PackageSpec>, verbose: bool) -> Self {
        Self {
            save: true,
            verbose,
            packages,
            ..Self::default()
        }
    }

    pub fn development(packages: Vec<PackageSpec>, verbose: bool) -> Self {
        Self {
            save_dev: true,
            verbose,
            packages,
            ..Self::default()
        }
    }
}

/// Something that can add packages to the project
#[async_trait]
pub trait DependencyInstaller: Send + Sync {
    async fn install(&self, request: &InstallRequest) -> InstallResult<()>;
}

/// Installs by spawning npm or yarn in the project root
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    project_root: PathBuf,
    package_manager: PackageManager,
}

impl CommandInstaller {
    pub fn new(project_root: impl Into<PathBuf>, package_manager: PackageManager) -> Self {
        Self {
            project_root: project_root.into(),
            package_manager,
        }
    }

    /// Build the command line for a request
    pub fn command_for(&self, request: &InstallRequest) -> CommandSpec {
        let mut args: Vec<&str> = Vec::new();

        match self.package_manager {
            PackageManager::Npm => {
                args.push("install");
                if request.save_dev {
                    args.push("--save-dev");
                } else if request.save {
                    args.push("--save");
                }
                if !request.verbose {
                    args.extend(["--loglevel", "error"]);
                }
            }
            PackageManager::Yarn => {
                // yarn add saves to dependencies unless told otherwise
                args.extend(["add", "--non-interactive"]);
                if request.save_dev {
                    args.push("--dev");
                }
                if !request.verbose {
                    args.push("--silent");
                }
            }
        }

        CommandSpec::new(self.package_manager.program(), &self.project_root)
            .args(args)
            .args(request.packages.iter().map(|p| p.to_string()))
    }
}

#[async_trait]
impl DependencyInstaller for CommandInstaller {
    async fn install(&self, request: &InstallRequest) -> InstallResult<()> {
        if request.packages.is_empty() {
            return Ok(());
        }
        let cmd = self.command_for(request);
        process::run(&cmd, request.verbose).await
    }
}
