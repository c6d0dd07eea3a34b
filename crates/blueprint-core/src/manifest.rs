//! Project manifest (`package.json`) access

use crate::error::{InstallError, InstallResult};
use crate::fs::FileSystem;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// File name of the project manifest
pub const MANIFEST_FILE: &str = "package.json";

/// Where a `config.forge` entry stands in the manifest
#[derive(Debug, Clone, PartialEq)]
pub enum ForgeConfig<'a> {
    /// No `config` mapping, or no `forge` key in it
    Absent,
    /// Already externalized: the value is a path to a config file
    Path(&'a str),
    /// Inline config written by `electron-forge import` (or by hand)
    Inline(&'a Value),
}

/// A parsed `package.json`, remembering where it was loaded from
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    root: Map<String, Value>,
}

impl PackageManifest {
    /// Path of the manifest inside a project root
    pub fn path_in(project_root: &Path) -> PathBuf {
        project_root.join(MANIFEST_FILE)
    }

    /// Parse manifest text. The top level must be a JSON object.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> InstallResult<Self> {
        let path = path.into();
        let value: Value =
            serde_json::from_str(content).map_err(|source| InstallError::ManifestJson {
                path: path.clone(),
                source,
            })?;

        match value {
            Value::Object(root) => Ok(Self { path, root }),
            _ => Err(InstallError::ManifestShape {
                path,
                reason: "top level is not an object".to_string(),
            }),
        }
    }

    /// Read and parse the manifest of a project
    pub async fn load(fs: &dyn FileSystem, project_root: &Path) -> InstallResult<Self> {
        let path = Self::path_in(project_root);
        let content = fs
            .read_to_string(&path)
            .await
            .map_err(|source| InstallError::ManifestRead {
                path: path.clone(),
                source,
            })?;
        Self::parse(path, &content)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up `config.forge` without assuming either level exists
    pub fn forge_config(&self) -> ForgeConfig<'_> {
        match self.root.get("config").and_then(|config| config.get("forge")) {
            None => ForgeConfig::Absent,
            Some(Value::String(path)) => ForgeConfig::Path(path),
            Some(value) => ForgeConfig::Inline(value),
        }
    }

    /// Whether a `config.forge` key is present at all (any value, `null` included)
    pub fn has_forge_config(&self) -> bool {
        !matches!(self.forge_config(), ForgeConfig::Absent)
    }

    /// Set `config.forge`, creating the `config` mapping if needed
    pub fn set_forge_config(&mut self, value: Value) -> InstallResult<()> {
        let config = self
            .root
            .entry("config")
            .or_insert_with(|| Value::Object(Map::new()));

        match config {
            Value::Object(config) => {
                config.insert("forge".to_string(), value);
                Ok(())
            }
            _ => Err(InstallError::ManifestShape {
                path: self.path.clone(),
                reason: "`config` is not an object".to_string(),
            }),
        }
    }

    /// Serialize with 2-space indentation and a trailing newline, keeping key order
    pub fn to_pretty_string(&self) -> InstallResult<String> {
        let mut out = serde_json::to_string_pretty(&self.root).map_err(|source| {
            InstallError::ManifestJson {
                path: self.path.clone(),
                source,
            }
        })?;
        out.push('\n');
        Ok(out)
    }

    /// Write the manifest back to where it was loaded from
    pub async fn save(&self, fs: &dyn FileSystem) -> InstallResult<()> {
        let content = self.to_pretty_string()?;
        fs.write(&self.path, content.as_bytes())
            .await
            .map_err(|e| InstallError::fs(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(content: &str) -> PackageManifest {
        PackageManifest::parse("package.json", content).unwrap()
    }

    #[test]
    fn test_forge_config_absent_without_config() {
        let manifest = parse(r#"{"name":"x"}"#);
        assert_eq!(manifest.forge_config(), ForgeConfig::Absent);
        assert!(!manifest.has_forge_config());
    }

    #[test]
    fn test_forge_config_absent_when_config_is_not_object() {
        let manifest = parse(r#"{"name":"x","config":"nope"}"#);
        assert_eq!(manifest.forge_config(), ForgeConfig::Absent);
    }

    #[test]
    fn test_forge_config_path_and_inline() {
        let manifest = parse(r#"{"config":{"forge":"./forge.js"}}"#);
        assert_eq!(manifest.forge_config(), ForgeConfig::Path("./forge.js"));

        let manifest = parse(r#"{"config":{"forge":{"make_targets":{}}}}"#);
        assert_eq!(
            manifest.forge_config(),
            ForgeConfig::Inline(&json!({"make_targets": {}}))
        );
    }

    #[test]
    fn test_null_forge_counts_as_present() {
        let manifest = parse(r#"{"config":{"forge":null}}"#);
        assert!(manifest.has_forge_config());
    }

    #[test]
    fn test_rejects_non_object_manifest() {
        let err = PackageManifest::parse("package.json", "[]").unwrap_err();
        assert!(matches!(err, InstallError::ManifestShape { .. }));
    }

    #[test]
    fn test_set_forge_config_creates_config() {
        let mut manifest = parse(r#"{"name":"x"}"#);
        manifest.set_forge_config(json!("./a.js")).unwrap();
        assert_eq!(manifest.forge_config(), ForgeConfig::Path("./a.js"));
    }

    #[test]
    fn test_set_forge_config_rejects_scalar_config() {
        let mut manifest = parse(r#"{"config":3}"#);
        assert!(manifest.set_forge_config(json!("./a.js")).is_err());
    }

    #[test]
    fn test_pretty_string_keeps_key_order() {
        let manifest = parse(r#"{"name":"x","version":"1.0.0","config":{"b":1,"a":2}}"#);
        assert_eq!(
            manifest.to_pretty_string().unwrap(),
            "{\n  \"name\": \"x\",\n  \"version\": \"1.0.0\",\n  \"config\": {\n    \"b\": 1,\n    \"a\": 2\n  }\n}\n"
        );
    }
}
