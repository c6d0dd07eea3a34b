//! Charm-style CLI flow around the install blueprint

use super::logger::SpinnerLogger;
use crate::blueprint::{self, Collaborators, InstallReport, ProjectContext};
use crate::config::BlueprintConfig;
use crate::fs::LocalFileSystem;
use crate::logger::{ConsoleLogger, Logger};
use crate::manifest::PackageManifest;
use crate::runtime::{check, CommandInstaller, NodeForgeImporter, PackageManager};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI arguments for an install run
#[derive(Debug, Clone, Default)]
pub struct InstallArgs {
    /// Project root; defaults to the current directory
    pub project_root: Option<PathBuf>,

    /// Blueprint config file (YAML)
    pub config: Option<PathBuf>,

    /// Package manager override; detected from the project otherwise
    pub package_manager: Option<PackageManager>,

    /// Stream package manager and node output
    pub verbose: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,

    /// Skip checking that node and the package manager are installed
    pub skip_preflight: bool,
}

/// Install ember-electron into a project, with interactive prompts
pub async fn run(args: InstallArgs) -> Result<InstallReport> {
    cliclack::intro("ember-electron")?;

    let project_root = resolve_project_root(&args)?;
    let config = BlueprintConfig::load(args.config.as_deref(), &project_root)
        .context("Failed to load blueprint config")?;

    let fs = LocalFileSystem;
    let package_manager = PackageManager::resolve(args.package_manager, &fs, &project_root).await;
    cliclack::log::info(format!("Package manager: {}", package_manager))?;

    if args.skip_preflight {
        cliclack::log::info("Skipping tool check")?;
    } else {
        preflight(package_manager)?;
    }

    if !args.yes {
        let confirm: bool = cliclack::confirm(format!(
            "Install ember-electron into {}?",
            project_root.display()
        ))
        .initial_value(true)
        .interact()?;

        if !confirm {
            anyhow::bail!("Setup cancelled.");
        }
    }

    let ctx = ProjectContext::new(&project_root, package_manager)
        .with_config(config)
        .with_verbose(args.verbose);

    let installer = CommandInstaller::new(&project_root, package_manager);
    let importer = NodeForgeImporter::new(&project_root, package_manager, args.verbose);
    // Streamed tool output and spinners don't mix
    let logger: Box<dyn Logger> = if args.verbose {
        Box::new(ConsoleLogger)
    } else {
        Box::new(SpinnerLogger::default())
    };

    let deps = Collaborators {
        installer: &installer,
        importer: &importer,
        fs: &fs,
        logger: logger.as_ref(),
    };

    let report = match blueprint::after_install(&ctx, deps).await {
        Ok(report) => report,
        Err(e) => {
            logger.error("Installing ember-electron failed");
            let _ = console::Term::stderr().show_cursor();
            return Err(e.into());
        }
    };

    print_next_steps(&report, &ctx.config)?;

    Ok(report)
}

fn resolve_project_root(args: &InstallArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = match &args.project_root {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    ensure_project(&path)?;
    cliclack::log::info(format!("Project: {}", path.display()))?;

    Ok(path)
}

/// The blueprint only runs inside an existing project
fn ensure_project(path: &Path) -> Result<()> {
    if !path.is_dir() {
        anyhow::bail!("Project directory does not exist: {}", path.display());
    }
    let manifest = PackageManifest::path_in(path);
    if !manifest.is_file() {
        anyhow::bail!(
            "No package.json in {}. Run this from an ember project.",
            path.display()
        );
    }
    Ok(())
}

fn preflight(package_manager: PackageManager) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking tools...");

    match check::preflight(package_manager) {
        Ok(tools) => {
            let info: Vec<String> = tools
                .iter()
                .map(|t| format!("{} ({})", t.name, t.version.as_deref().unwrap_or("unknown")))
                .collect();
            spinner.stop(format!("Detected tools: {}", info.join(", ")));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Missing tools");
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Please install the missing tools and try again.");
        }
    }
}

fn print_next_steps(report: &InstallReport, config: &BlueprintConfig) -> Result<()> {
    let steps = report.next_steps(config);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("ember-electron is installed")?;

    Ok(())
}
