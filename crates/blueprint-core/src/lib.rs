//! Blueprint Core - install ember-electron into an ember project
//!
//! This library implements the post-install hook that runs once ember-electron
//! has been added to a project: it installs the electron toolchain, imports
//! electron-forge, creates the resource directories and moves the generated
//! forge config out of package.json into its own module.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Collaborators** - package manager, forge import, filesystem and
//!   logger, each behind a trait so the steps can run against mocks
//! - **Layer 2: Install sequence** - the four steps and `after_install`, which
//!   runs them in order against a `ProjectContext`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based flow (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts and spinner logger
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use blueprint_core::{after_install, Collaborators, ProjectContext};
//! use blueprint_core::fs::LocalFileSystem;
//! use blueprint_core::logger::ConsoleLogger;
//! use blueprint_core::runtime::{CommandInstaller, NodeForgeImporter, PackageManager};
//!
//! let root = std::env::current_dir()?;
//! let pm = PackageManager::detect(&LocalFileSystem, &root).await;
//! let installer = CommandInstaller::new(&root, pm);
//! let importer = NodeForgeImporter::new(&root, pm, false);
//!
//! let report = after_install(
//!     &ProjectContext::new(&root, pm),
//!     Collaborators {
//!         installer: &installer,
//!         importer: &importer,
//!         fs: &LocalFileSystem,
//!         logger: &ConsoleLogger,
//!     },
//! )
//! .await?;
//! ```

pub mod blueprint;
pub mod config;
pub mod error;
pub mod fs;
pub mod logger;
pub mod manifest;
pub mod runtime;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use blueprint::{
    after_install, Collaborators, ForgeConfigOutcome, InstallReport, ProjectContext,
};
pub use config::{BlueprintConfig, PackageSpec};
pub use error::{InstallError, InstallResult};
pub use runtime::PackageManager;

#[cfg(feature = "tui")]
pub use tui::{run, InstallArgs};
