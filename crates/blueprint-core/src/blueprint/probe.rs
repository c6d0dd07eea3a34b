//! Does the project already carry a forge config?

use super::context::{Collaborators, ProjectContext};
use crate::manifest::PackageManifest;

/// Record whether `config.forge` exists before anything is installed.
///
/// Never fails: a manifest that can't be read or parsed counts as having no
/// forge config, and the reason is reported as a warning.
pub async fn check_forge_config(ctx: &ProjectContext, deps: Collaborators<'_>) -> bool {
    let has_forge_config = match PackageManifest::load(deps.fs, &ctx.root).await {
        Ok(manifest) => manifest.has_forge_config(),
        Err(e) => {
            deps.logger
                .warning(&format!("Could not inspect project manifest: {}", e));
            false
        }
    };

    deps.logger.message(&format!(
        "Project {} forge config",
        if has_forge_config { "has" } else { "needs" }
    ));

    has_forge_config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprint::testing::Harness;

    #[tokio::test]
    async fn test_manifest_without_config() {
        let h = Harness::new(r#"{"name":"x"}"#, None);

        assert!(!check_forge_config(&h.context(), h.collaborators()).await);
        assert_eq!(h.logger.lines(), vec!["message: Project needs forge config"]);
    }

    #[tokio::test]
    async fn test_config_without_forge() {
        let h = Harness::new(r#"{"name":"x","config":{"port":4200}}"#, None);
        assert!(!check_forge_config(&h.context(), h.collaborators()).await);
    }

    #[tokio::test]
    async fn test_existing_forge_config() {
        let h = Harness::new(r#"{"config":{"forge":"./forge.js"}}"#, None);

        assert!(check_forge_config(&h.context(), h.collaborators()).await);
        assert_eq!(h.logger.lines(), vec!["message: Project has forge config"]);
    }

    #[tokio::test]
    async fn test_unparseable_manifest_counts_as_absent() {
        let h = Harness::new("{ not json", None);

        assert!(!check_forge_config(&h.context(), h.collaborators()).await);
        let lines = h.logger.lines();
        assert!(lines[0].starts_with("warning: Could not inspect project manifest"));
        assert_eq!(lines[1], "message: Project needs forge config");
    }

    #[tokio::test]
    async fn test_missing_manifest_counts_as_absent() {
        let h = Harness::new("{}", None);
        std::fs::remove_file(h.root().join("package.json")).unwrap();

        assert!(!check_forge_config(&h.context(), h.collaborators()).await);
    }
}
