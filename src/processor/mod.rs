//! Driver that applies the header to each path in turn.

mod process;

use std::path::PathBuf;

pub use self::process::{Outcome, Processor};

/// Summary of one run over a list of paths.
#[derive(Debug, Default)]
pub struct ProcessResult {
    pub inserted: usize,
    pub replaced: usize,
    pub unchanged: usize,
    pub skipped: usize,
    /// Paths that could not be processed, with the error message.
    pub failures: Vec<(PathBuf, String)>,
}

impl ProcessResult {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Inserted => self.inserted += 1,
            Outcome::Replaced => self.replaced += 1,
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }

    pub fn modified(&self) -> usize {
        self.inserted + self.replaced
    }

    pub fn total(&self) -> usize {
        self.modified() + self.unchanged + self.skipped + self.failures.len()
    }
}
