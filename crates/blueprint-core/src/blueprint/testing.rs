//! Mock collaborators for exercising the install steps without npm or node

use super::context::{Collaborators, ProjectContext};
use crate::error::{InstallError, InstallResult};
use crate::fs::LocalFileSystem;
use crate::logger::testing::RecordingLogger;
use crate::runtime::{DependencyInstaller, ForgeImporter, ImportOptions, InstallRequest};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Records requests instead of installing; optionally fails the n-th call
#[derive(Debug, Default)]
pub struct RecordingInstaller {
    pub requests: Mutex<Vec<InstallRequest>>,
    pub fail_on_call: Option<usize>,
}

impl RecordingInstaller {
    pub fn requests(&self) -> Vec<InstallRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Package specifiers per call, e.g. `[["electron@2.0.7"], ...]`
    pub fn package_lists(&self) -> Vec<Vec<String>> {
        self.requests()
            .iter()
            .map(|r| r.packages.iter().map(|p| p.to_string()).collect())
            .collect()
    }
}

#[async_trait]
impl DependencyInstaller for RecordingInstaller {
    async fn install(&self, request: &InstallRequest) -> InstallResult<()> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(request.clone());
        if self.fail_on_call == Some(requests.len()) {
            return Err(InstallError::CommandFailed {
                command: "npm install".to_string(),
                code: 1,
                stderr: "network down".to_string(),
            });
        }
        Ok(())
    }
}

/// Stands in for `electron-forge import`: writes `config.forge` into package.json
#[derive(Debug)]
pub struct ManifestWritingImporter {
    pub manifest_path: PathBuf,
    /// Value written to `config.forge`; `None` leaves the manifest untouched
    pub forge: Option<Value>,
    pub calls: Mutex<Vec<ImportOptions>>,
}

impl ManifestWritingImporter {
    pub fn new(project_root: &Path, forge: Option<Value>) -> Self {
        Self {
            manifest_path: project_root.join("package.json"),
            forge,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ImportOptions> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ForgeImporter for ManifestWritingImporter {
    async fn import(&self, options: &ImportOptions) -> InstallResult<()> {
        self.calls.lock().unwrap().push(options.clone());

        let Some(forge) = &self.forge else {
            return Ok(());
        };

        let content = std::fs::read_to_string(&self.manifest_path).unwrap();
        let mut manifest: Value = serde_json::from_str(&content).unwrap();
        let root = manifest.as_object_mut().unwrap();
        let config = root
            .entry("config")
            .or_insert_with(|| Value::Object(Default::default()));
        config
            .as_object_mut()
            .unwrap()
            .insert("forge".to_string(), forge.clone());
        std::fs::write(
            &self.manifest_path,
            serde_json::to_string_pretty(&manifest).unwrap(),
        )
        .unwrap();
        Ok(())
    }
}

/// Mocks plus a temp project, wired together
pub struct Harness {
    pub dir: tempfile::TempDir,
    pub installer: RecordingInstaller,
    pub importer: ManifestWritingImporter,
    pub fs: LocalFileSystem,
    pub logger: RecordingLogger,
}

impl Harness {
    /// Temp project with the given package.json; the importer will write `forge`
    pub fn new(package_json: &str, forge: Option<Value>) -> Self {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("package.json"), package_json).unwrap();
        let importer = ManifestWritingImporter::new(dir.path(), forge);
        Self {
            dir,
            installer: RecordingInstaller::default(),
            importer,
            fs: LocalFileSystem,
            logger: RecordingLogger::default(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn context(&self) -> ProjectContext {
        ProjectContext::new(self.root(), Default::default())
    }

    pub fn collaborators(&self) -> Collaborators<'_> {
        Collaborators {
            installer: &self.installer,
            importer: &self.importer,
            fs: &self.fs,
            logger: &self.logger,
        }
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.root().join(relative)).unwrap()
    }

    pub fn manifest(&self) -> Value {
        serde_json::from_str(&self.read("package.json")).unwrap()
    }
}
