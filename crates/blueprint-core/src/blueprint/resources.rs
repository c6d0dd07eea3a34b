//! Resource directories under the electron directory

use super::context::{Collaborators, ProjectContext};
use crate::error::{InstallError, InstallResult};
use futures_util::future::try_join_all;
use std::path::PathBuf;

/// Make sure every resource directory has a `.gitkeep`, so git keeps it.
///
/// The markers are created concurrently; existing ones are left as they are.
/// Returns the markers this call created.
pub async fn create_resource_dirs(
    ctx: &ProjectContext,
    deps: Collaborators<'_>,
) -> InstallResult<Vec<PathBuf>> {
    deps.logger
        .start_progress("Creating ember-electron resource dirs");

    let fs = deps.fs;
    let markers = ctx.config.marker_paths(&ctx.root);
    let results = try_join_all(markers.into_iter().map(|path| async move {
        match fs.ensure_file(&path).await {
            Ok(created) => Ok((path, created)),
            Err(e) => Err(InstallError::fs(path, e)),
        }
    }))
    .await?;

    deps.logger.message("Created ember-electron resource dirs");

    Ok(results
        .into_iter()
        .filter_map(|(path, created)| created.then_some(path))
        .collect())
}
