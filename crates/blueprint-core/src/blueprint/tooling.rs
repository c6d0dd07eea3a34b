//! Installing electron and the forge toolchain

use super::context::{Collaborators, ProjectContext};
use crate::error::InstallResult;
use crate::runtime::{ImportOptions, InstallRequest};

/// Install electron, import electron-forge, then the remaining dependencies.
///
/// Strictly in that order; the first failure aborts and nothing is undone.
pub async fn install_electron_tooling(
    ctx: &ProjectContext,
    deps: Collaborators<'_>,
) -> InstallResult<()> {
    let packages = &ctx.config.packages;

    deps.logger.start_progress("Installing electron build tools");

    // electron goes in first so the import doesn't pull in an incompatible latest
    deps.installer
        .install(&InstallRequest::production(
            vec![packages.electron.clone()],
            ctx.verbose,
        ))
        .await?;

    deps.importer
        .import(&ImportOptions::from(&ctx.config.import))
        .await?;

    if !packages.dev.is_empty() {
        deps.installer
            .install(&InstallRequest::development(
                packages.dev.clone(),
                ctx.verbose,
            ))
            .await?;
    }

    if !packages.runtime.is_empty() {
        deps.installer
            .install(&InstallRequest::production(
                packages.runtime.clone(),
                ctx.verbose,
            ))
            .await?;
    }

    deps.logger.message("Installed electron build tools");

    Ok(())
}
