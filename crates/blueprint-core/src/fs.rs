//! Filesystem abstraction used by the install steps
//!
//! The steps only ever touch the project manifest, the extracted forge config
//! and the resource marker files, so the surface is intentionally small.

use async_trait::async_trait;
use std::io;
use std::path::Path;
use tokio::fs;

/// Abstraction over file system operations for testability
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Read file contents as string
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write (create or truncate) a file
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Check if a path exists
    async fn exists(&self, path: &Path) -> bool;

    /// Make sure a file exists, creating parent directories as needed.
    /// An existing file is never modified. Returns `true` if the file was created.
    async fn ensure_file(&self, path: &Path) -> io::Result<bool>;
}

/// `FileSystem` backed by the real disk through `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path).await
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents).await
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    async fn ensure_file(&self, path: &Path) -> io::Result<bool> {
        if fs::try_exists(path).await? {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        // create_new so a file that appeared in the meantime is kept as is
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e),
        }
    }
}
