//! Error types for the install sequence

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the install steps
pub type InstallResult<T> = std::result::Result<T, InstallError>;

/// Failures that abort an install run
///
/// Nothing is rolled back when one of these surfaces: the project is left in
/// whatever state the failing step produced and re-running is the recovery path.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Failed to read {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    ManifestJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected shape in {}: {reason}", path.display())]
    ManifestShape { path: PathBuf, reason: String },

    #[error("No config.forge entry in {} after importing electron-forge", path.display())]
    MissingForgeConfig { path: PathBuf },

    #[error("Failed to run `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with exit code {code}{}", stderr_suffix(stderr))]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Missing required tools:\n{0}")]
    MissingTools(String),

    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid blueprint config: {0}")]
    Config(String),
}

impl InstallError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InstallError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

fn stderr_suffix(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr)
    }
}
