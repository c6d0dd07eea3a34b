//! ember-electron installer - set up electron tooling in an ember project

use anyhow::Result;
use blueprint_core::{InstallArgs, PackageManager};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ember-electron-install")]
#[command(about = "Install ember-electron in the project")]
#[command(version)]
pub struct Args {
    /// Project root (defaults to the current directory)
    pub project_root: Option<PathBuf>,

    /// Blueprint config file (YAML); defaults to ember-electron.yaml in the project root
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Package manager to use (npm or yarn); detected from yarn.lock otherwise
    #[arg(long = "package-manager", env = "EMBER_ELECTRON_PACKAGE_MANAGER")]
    pub package_manager: Option<PackageManager>,

    /// Show package manager and electron-forge output
    #[arg(short, long)]
    pub verbose: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Skip checking that node and the package manager are installed
    #[arg(long = "skip-preflight")]
    pub skip_preflight: bool,
}

impl From<Args> for InstallArgs {
    fn from(args: Args) -> Self {
        InstallArgs {
            project_root: args.project_root,
            config: args.config,
            package_manager: args.package_manager,
            verbose: args.verbose,
            yes: args.yes,
            skip_preflight: args.skip_preflight,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result = blueprint_core::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result.map(|_| ())
}
