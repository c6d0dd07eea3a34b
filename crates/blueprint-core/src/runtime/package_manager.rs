//! Package manager detection (npm or yarn)

use crate::fs::FileSystem;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Lockfile whose presence marks a yarn project
pub const YARN_LOCKFILE: &str = "yarn.lock";

/// Environment variable electron-forge reads to pick its installer
pub const FORGE_INSTALLER_ENV: &str = "NODE_INSTALLER";

/// Package managers the blueprint can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
}

impl PackageManager {
    /// Detect the package manager a project uses: yarn if it has a `yarn.lock`, npm otherwise
    pub async fn detect(fs: &dyn FileSystem, project_root: &Path) -> Self {
        if fs.exists(&project_root.join(YARN_LOCKFILE)).await {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }

    /// An explicit choice wins over detection
    pub async fn resolve(
        explicit: Option<PackageManager>,
        fs: &dyn FileSystem,
        project_root: &Path,
    ) -> Self {
        match explicit {
            Some(pm) => pm,
            None => Self::detect(fs, project_root).await,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Executable to spawn (`.cmd` shims on Windows)
    pub fn program(&self) -> &'static str {
        match (self, cfg!(windows)) {
            (PackageManager::Npm, false) => "npm",
            (PackageManager::Npm, true) => "npm.cmd",
            (PackageManager::Yarn, false) => "yarn",
            (PackageManager::Yarn, true) => "yarn.cmd",
        }
    }

    /// Whether this is not npm, i.e. downstream tooling has to be told explicitly
    pub fn is_alternate(&self) -> bool {
        *self != PackageManager::Npm
    }

    /// Environment electron-forge needs to install with the same package manager
    pub fn forge_env(&self) -> [(&'static str, &'static str); 1] {
        [(FORGE_INSTALLER_ENV, self.name())]
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            other => Err(format!(
                "unknown package manager '{}' (expected npm or yarn)",
                other
            )),
        }
    }
}
