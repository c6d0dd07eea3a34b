//! External tooling the blueprint drives
//!
//! This module provides:
//! - Package manager detection (npm, yarn)
//! - Dependency installation and the electron-forge import, behind traits
//! - Preflight checks for the binaries they spawn

pub mod check;
pub mod importer;
pub mod installer;
pub mod package_manager;
pub mod process;

pub use check::{preflight, RuntimeInfo};
pub use importer::{ForgeImporter, ImportOptions, NodeForgeImporter};
pub use installer::{CommandInstaller, DependencyInstaller, InstallRequest};
pub use package_manager::PackageManager;
