//! Moving the imported forge config out of package.json
//!
//! `electron-forge import` writes its config inline under `config.forge`.
//! ember-electron keeps it in its own module instead and points
//! `config.forge` at that file.

use super::context::{Collaborators, ForgeConfigOutcome, ProjectContext};
use crate::error::{InstallError, InstallResult};
use crate::manifest::{ForgeConfig, PackageManifest};
use crate::runtime::PackageManager;
use serde_json::{Map, Value};
use std::path::Path;

/// Extract the forge config into its own file, unless the project had one
/// before the run (it may be customized, so it is never touched).
pub async fn ensure_forge_config(
    ctx: &ProjectContext,
    deps: Collaborators<'_>,
    had_forge_config: bool,
) -> InstallResult<ForgeConfigOutcome> {
    if had_forge_config {
        return Ok(ForgeConfigOutcome::Preserved);
    }

    deps.logger
        .start_progress("Extracting ember-electron forge config");

    let mut manifest = PackageManifest::load(deps.fs, &ctx.root).await?;

    let mut forge = match manifest.forge_config() {
        ForgeConfig::Path(existing) => {
            deps.logger.warning(&format!(
                "config.forge already points to {}, leaving it as is",
                existing
            ));
            return Ok(ForgeConfigOutcome::AlreadyExternal(existing.to_string()));
        }
        ForgeConfig::Inline(value) if !value.is_null() => value.clone(),
        _ => {
            return Err(InstallError::MissingForgeConfig {
                path: manifest.path().to_path_buf(),
            })
        }
    };

    if ctx.package_manager.is_alternate() {
        pin_package_manager(&mut forge, ctx.package_manager)
            .map_err(|reason| InstallError::ManifestShape {
                path: manifest.path().to_path_buf(),
                reason,
            })?;
    }

    let target = ctx.config.forge_config_file(&ctx.root);
    write_forge_module(deps, &target, &forge).await?;

    // Only point package.json at the file once it exists
    manifest.set_forge_config(Value::String(ctx.config.forge_config_path()))?;
    manifest.save(deps.fs).await?;

    deps.logger.message("Extracted ember-electron forge config");

    Ok(ForgeConfigOutcome::Extracted(target))
}

/// Make electron-packager install with the project's package manager
fn pin_package_manager(forge: &mut Value, package_manager: PackageManager) -> Result<(), String> {
    let forge = forge
        .as_object_mut()
        .ok_or_else(|| "config.forge is not an object".to_string())?;

    let packager = forge
        .entry("electronPackagerConfig")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| "config.forge.electronPackagerConfig is not an object".to_string())?;

    packager.insert(
        "packageManager".to_string(),
        Value::String(package_manager.name().to_string()),
    );
    Ok(())
}

/// Module source exporting the config
pub fn render_forge_module(forge: &Value, target: &Path) -> InstallResult<String> {
    let json = serde_json::to_string_pretty(forge).map_err(|source| InstallError::ManifestJson {
        path: target.to_path_buf(),
        source,
    })?;
    Ok(format!("module.exports = {};", json))
}

async fn write_forge_module(
    deps: Collaborators<'_>,
    target: &Path,
    forge: &Value,
) -> InstallResult<()> {
    let source = render_forge_module(forge, target)?;
    deps.fs
        .ensure_file(target)
        .await
        .map_err(|e| InstallError::fs(target, e))?;
    deps.fs
        .write(target, source.as_bytes())
        .await
        .map_err(|e| InstallError::fs(target, e))
}
