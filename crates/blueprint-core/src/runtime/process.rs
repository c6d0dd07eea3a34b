//! Running external commands (package managers, node)

use crate::error::{InstallError, InstallResult};
use colored::Colorize;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// A fully described command invocation
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub envs: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            envs: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Human-readable command line, used in messages and errors
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .current_dir(&self.cwd)
            .envs(self.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null());
        cmd
    }
}

/// Run a command to completion.
///
/// Verbose runs stream the child's output line by line; quiet runs capture it
/// and only surface stderr when the command fails.
pub async fn run(spec: &CommandSpec, verbose: bool) -> InstallResult<()> {
    if verbose {
        run_streaming(spec).await
    } else {
        run_captured(spec).await
    }
}

async fn run_captured(spec: &CommandSpec) -> InstallResult<()> {
    let mut cmd = spec.command();
    let output = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| InstallError::CommandSpawn {
            command: spec.display(),
            source,
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(InstallError::CommandFailed {
            command: spec.display(),
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

async fn run_streaming(spec: &CommandSpec) -> InstallResult<()> {
    println!("{} {}", "Running:".dimmed(), spec.display().yellow());

    let mut cmd = spec.command();
    let mut child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| InstallError::CommandSpawn {
            command: spec.display(),
            source,
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let stdout_task = async move {
        if let Some(stdout) = stdout {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                println!("  {}", line);
            }
        }
    };
    let stderr_task = async move {
        if let Some(stderr) = stderr {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                eprintln!("  {}", line.yellow());
            }
        }
    };
    tokio::join!(stdout_task, stderr_task);

    let status = child
        .wait()
        .await
        .map_err(|source| InstallError::CommandSpawn {
            command: spec.display(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(InstallError::CommandFailed {
            command: spec.display(),
            code: status.code().unwrap_or(-1),
            stderr: String::new(),
        })
    }
}
