//! Logger backed by cliclack spinners

use crate::logger::Logger;
use std::sync::{Mutex, MutexGuard};

/// Shows each step as a spinner that resolves into its result line
#[derive(Default)]
pub struct SpinnerLogger {
    active: Mutex<Option<cliclack::ProgressBar>>,
}

impl SpinnerLogger {
    fn active(&self) -> MutexGuard<'_, Option<cliclack::ProgressBar>> {
        self.active.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Logger for SpinnerLogger {
    fn start_progress(&self, message: &str) {
        let mut active = self.active();
        if let Some(previous) = active.take() {
            previous.stop("");
        }
        let spinner = cliclack::spinner();
        spinner.start(message);
        *active = Some(spinner);
    }

    fn message(&self, message: &str) {
        match self.active().take() {
            Some(spinner) => spinner.stop(message),
            None => {
                let _ = cliclack::log::success(message);
            }
        }
    }

    fn warning(&self, message: &str) {
        // The step ends here, so the warning doesn't race the spinner line
        if let Some(spinner) = self.active().take() {
            spinner.clear();
        }
        let _ = cliclack::log::warning(message);
    }

    fn error(&self, message: &str) {
        match self.active().take() {
            Some(spinner) => spinner.error(message),
            None => {
                let _ = cliclack::log::error(message);
            }
        }
    }
}
