//! Progress reporting for the install steps

use colored::Colorize;

/// Where the install steps report progress
///
/// `start_progress` opens a step, `message` closes it with a result line.
pub trait Logger: Send + Sync {
    fn start_progress(&self, message: &str);

    fn message(&self, message: &str);

    fn warning(&self, message: &str);

    fn error(&self, message: &str);
}

/// Plain colored output on stdout/stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn start_progress(&self, message: &str) {
        println!("  {} {}", "->".blue(), message.dimmed());
    }

    fn message(&self, message: &str) {
        println!("  {} {}", "✓".green(), message);
    }

    fn warning(&self, message: &str) {
        eprintln!("  {} {}", "Warning:".yellow(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("  {} {}", "Error:".red().bold(), message);
    }
}
