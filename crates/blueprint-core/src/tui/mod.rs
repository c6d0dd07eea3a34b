//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod install;
#[cfg(feature = "tui")]
mod logger;

#[cfg(feature = "tui")]
pub use install::{run, InstallArgs};
#[cfg(feature = "tui")]
pub use logger::SpinnerLogger;
