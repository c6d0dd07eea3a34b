//! Blueprint configuration and package specifiers

pub mod blueprint;
pub mod package_spec;

pub use blueprint::{BlueprintConfig, ImportSettings, PackageSet, PROJECT_CONFIG_FILE};
pub use package_spec::{PackageSpec, PackageVersion};
