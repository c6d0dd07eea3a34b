//! Preflight checks for the tools the install shells out to

use super::package_manager::PackageManager;
use crate::error::{InstallError, InstallResult};
use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Run `<program> --version` and report what came back
pub fn check_tool(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    check_tool("Node.js", if cfg!(windows) { "node.exe" } else { "node" })
}

/// Check if the project's package manager is available
pub fn check_package_manager(package_manager: PackageManager) -> RuntimeInfo {
    let name = match package_manager {
        PackageManager::Npm => "npm",
        PackageManager::Yarn => "Yarn",
    };
    check_tool(name, package_manager.program())
}

fn install_hint(package_manager: PackageManager) -> &'static str {
    match package_manager {
        PackageManager::Npm => "npm (ships with Node.js, https://nodejs.org)",
        PackageManager::Yarn => "Yarn (install from https://yarnpkg.com)",
    }
}

/// Make sure node and the package manager can be spawned before touching the project
pub fn preflight(package_manager: PackageManager) -> InstallResult<Vec<RuntimeInfo>> {
    let results = vec![check_node(), check_package_manager(package_manager)];
    verify(results, package_manager)
}

fn verify(
    results: Vec<RuntimeInfo>,
    package_manager: PackageManager,
) -> InstallResult<Vec<RuntimeInfo>> {
    let missing: Vec<&str> = results
        .iter()
        .filter(|r| !r.available)
        .map(|r| match r.name {
            "Node.js" => "Node.js (install from https://nodejs.org)",
            _ => install_hint(package_manager),
        })
        .collect();

    if !missing.is_empty() {
        return Err(InstallError::MissingTools(
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n"),
        ));
    }

    Ok(results)
}
