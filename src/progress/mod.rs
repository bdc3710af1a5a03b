//! Scrape progress reporting.
//!
//! Reporting is strictly observational: the pipeline produces identical
//! output whichever implementation is plugged in, including the silent
//! one.

use indicatif::{ProgressBar, ProgressStyle};

use crate::models::Role;

/// Observer for pipeline progress. All methods default to no-ops.
pub trait Progress: Send {
    /// Called once with the total page count before the first fetch.
    fn start(&mut self, _total: u64) {}

    /// Called before each page fetch with the cumulative step count
    /// (1-based) and the champion/role about to be fetched.
    fn update(&mut self, _current: u64, _champion: &str, _role: Role) {}

    /// Called once after the last page fetch.
    fn stop(&mut self) {}
}

/// Reporter that swallows everything. Used by tests and `--quiet`.
pub struct NullProgress;

impl Progress for NullProgress {}

/// Terminal bar reporter.
#[derive(Default)]
pub struct BarProgress {
    bar: Option<ProgressBar>,
}

impl BarProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Progress for BarProgress {
    fn start(&mut self, total: u64) {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template("Progress |{bar:40}| {percent}% | {pos}/{len} ({msg})")
                .unwrap()
                .progress_chars("█░"),
        );
        self.bar = Some(bar);
    }

    fn update(&mut self, current: u64, champion: &str, role: Role) {
        if let Some(bar) = &self.bar {
            bar.set_position(current);
            bar.set_message(format!("{} - {}", champion, role.short_code()));
        }
    }

    fn stop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_progress_accepts_all_calls() {
        let mut progress = NullProgress;
        progress.start(10);
        progress.update(1, "aatrox", Role::Top);
        progress.stop();
    }

    #[test]
    fn test_bar_progress_lifecycle() {
        let mut progress = BarProgress::new();
        progress.start(5);
        progress.update(1, "ahri", Role::Mid);
        progress.update(2, "ahri", Role::Bot);
        progress.stop();
        assert!(progress.bar.is_none());
    }

    #[test]
    fn test_bar_progress_update_before_start_is_harmless() {
        let mut progress = BarProgress::new();
        progress.update(3, "jinx", Role::Bot);
        progress.stop();
    }
}
