//! The ember-electron install blueprint
//!
//! Runs once after ember-electron has been added to a project:
//!
//! 1. Probe package.json for an existing forge config
//! 2. Install electron, import electron-forge, install the remaining dependencies
//! 3. Create the resource directories
//! 4. Extract the imported forge config into its own file (fresh projects only)
//!
//! Each step starts only after the previous one finished. Any error aborts the
//! run and leaves the project as the failing step left it; re-running after
//! fixing the cause is safe, since a config extracted by an earlier run is
//! detected by the probe and kept.

pub mod context;
pub mod forge_config;
pub mod probe;
pub mod resources;
pub mod tooling;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{Collaborators, ForgeConfigOutcome, InstallReport, ProjectContext};

use crate::error::InstallResult;

/// Run the whole install sequence against a project
pub async fn after_install(
    ctx: &ProjectContext,
    deps: Collaborators<'_>,
) -> InstallResult<InstallReport> {
    let had_forge_config = probe::check_forge_config(ctx, deps).await;
    tooling::install_electron_tooling(ctx, deps).await?;
    let created_markers = resources::create_resource_dirs(ctx, deps).await?;
    let forge_config = forge_config::ensure_forge_config(ctx, deps, had_forge_config).await?;

    Ok(InstallReport {
        had_forge_config,
        package_manager: ctx.package_manager,
        created_markers,
        forge_config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::PackageManager;
    use serde_json::json;
    use super::testing::{Harness, RecordingInstaller};

    const FORGE_FILE: &str = "ember-electron/electron-forge-config.js";
    const FORGE_PATH: &str = "./ember-electron/electron-forge-config.js";

    #[tokio::test]
    async fn test_fresh_project_end_to_end() {
        let h = Harness::new(
            r#"{"name":"x"}"#,
            Some(json!({"electronPackagerConfig": {}})),
        );

        let report = after_install(&h.context(), h.collaborators()).await.unwrap();

        assert!(!report.had_forge_config);
        assert_eq!(report.package_manager, PackageManager::Npm);
        assert_eq!(report.created_markers.len(), 4);
        assert_eq!(
            report.forge_config,
            ForgeConfigOutcome::Extracted(h.root().join(FORGE_FILE))
        );

        assert_eq!(h.manifest()["config"]["forge"], json!(FORGE_PATH));
        assert_eq!(
            h.read(FORGE_FILE),
            "module.exports = {\n  \"electronPackagerConfig\": {}\n};"
        );
        for dir in ["resources", "resources-darwin", "resources-linux", "resources-win32"] {
            assert!(h
                .root()
                .join("ember-electron")
                .join(dir)
                .join(".gitkeep")
                .is_file());
        }

        assert_eq!(
            h.logger.lines(),
            vec![
                "message: Project needs forge config",
                "progress: Installing electron build tools",
                "message: Installed electron build tools",
                "progress: Creating ember-electron resource dirs",
                "message: Created ember-electron resource dirs",
                "progress: Extracting ember-electron forge config",
                "message: Extracted ember-electron forge config",
            ]
        );
    }

    #[tokio::test]
    async fn test_rerun_keeps_extracted_config() {
        let h = Harness::new(
            r#"{"name":"x"}"#,
            Some(json!({"electronPackagerConfig": {}})),
        );
        after_install(&h.context(), h.collaborators()).await.unwrap();

        // User customizes the extracted file between runs
        let customized = "module.exports = { custom: true };";
        std::fs::write(h.root().join(FORGE_FILE), customized).unwrap();

        let report = after_install(&h.context(), h.collaborators()).await.unwrap();

        assert!(report.had_forge_config);
        assert_eq!(report.forge_config, ForgeConfigOutcome::Preserved);
        assert!(report.created_markers.is_empty());
        assert_eq!(h.read(FORGE_FILE), customized);
    }

    #[tokio::test]
    async fn test_existing_inline_config_is_preserved() {
        let h = Harness::new(
            r#"{"name":"x","config":{"forge":{"custom":true}}}"#,
            None,
        );

        let report = after_install(&h.context(), h.collaborators()).await.unwrap();

        assert_eq!(report.forge_config, ForgeConfigOutcome::Preserved);
        assert_eq!(h.manifest()["config"]["forge"], json!({"custom": true}));
        assert!(!h.root().join(FORGE_FILE).exists());
    }

    #[tokio::test]
    async fn test_yarn_project_end_to_end() {
        let h = Harness::new(
            r#"{"name":"x"}"#,
            Some(json!({"electronPackagerConfig": {}})),
        );
        let ctx = ProjectContext::new(h.root(), PackageManager::Yarn);

        let report = after_install(&ctx, h.collaborators()).await.unwrap();

        assert_eq!(report.package_manager, PackageManager::Yarn);
        assert_eq!(
            h.read(FORGE_FILE),
            "module.exports = {\n  \"electronPackagerConfig\": {\n    \"packageManager\": \"yarn\"\n  }\n};"
        );
    }

    #[tokio::test]
    async fn test_install_failure_short_circuits() {
        let h = Harness::new(r#"{"name":"x"}"#, Some(json!({})));
        let h = Harness {
            installer: RecordingInstaller {
                fail_on_call: Some(1),
                ..Default::default()
            },
            ..h
        };

        assert!(after_install(&h.context(), h.collaborators()).await.is_err());
        assert!(!h.root().join("ember-electron").exists());
        assert_eq!(h.read("package.json"), r#"{"name":"x"}"#);
    }
}
