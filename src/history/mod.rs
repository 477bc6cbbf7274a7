//! Per-file version-control metadata.
//!
//! The header needs two facts about every file: who has touched it and when
//! it last changed. Both come from a [`History`] implementation; the default
//! is [`GitHistory`], which shells out to `git log`.
//!
//! Lookups never fail. A file without history (new, untracked, or outside a
//! repository) yields an empty [`AuthorSet`] and no year, and callers fall
//! back to the current calendar year.

mod git;

use std::path::Path;

use chrono::{Datelike, Local};

use crate::models::{AuthorSet, Year};

pub use git::GitHistory;

/// Source of author and date metadata for a path.
pub trait History {
    /// Everyone who has committed to `path`, following renames.
    fn authors(&self, path: &Path) -> AuthorSet;

    /// Year of the most recent commit touching `path`, if any.
    fn latest_year(&self, path: &Path) -> Option<Year>;

    /// Like [`History::latest_year`], falling back to the current year.
    fn latest_year_or_current(&self, path: &Path) -> Year {
        self.latest_year(path).unwrap_or_else(current_year)
    }
}

pub fn current_year() -> Year {
    Local::now().year()
}

/// Parses `git log --format=%aN <%aE>` output, one author per line.
pub fn parse_authors(log_output: &str) -> AuthorSet {
    log_output.lines().collect()
}

/// Parses the output of `git log -1 --date=format:%Y`.
///
/// Returns `None` for empty or non-numeric output.
pub fn parse_year(log_output: &str) -> Option<Year> {
    let line = log_output.lines().map(str::trim).find(|l| !l.is_empty())?;
    line.parse().ok()
}
