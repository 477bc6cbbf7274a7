use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use super::{History, parse_authors, parse_year};
use crate::models::{AuthorSet, Year};

/// [`History`] backed by the `git` binary.
///
/// Each query spawns one `git log` process. A missing binary, a path
/// outside a repository, or any non-zero exit is reported as empty output.
#[derive(Debug, Clone, Default)]
pub struct GitHistory {
    repo_dir: Option<PathBuf>,
}

impl GitHistory {
    /// Queries the repository containing the current working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queries the repository at `repo_dir`. Relative paths passed to the
    /// lookups are resolved against it.
    pub fn with_repo(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: Some(repo_dir.into()),
        }
    }

    fn git_log<I, S>(&self, args: I, path: &Path) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new("git");
        if let Some(dir) = &self.repo_dir {
            command.arg("-C").arg(dir);
        }
        command.arg("log").args(args).arg("--").arg(path);

        let output = match command.output() {
            Ok(output) => output,
            Err(e) => {
                debug!("Failed to run git log for {}: {}", path.display(), e);
                return String::new();
            }
        };

        if !output.status.success() {
            debug!(
                "git log for {} exited with {}: {}",
                path.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return String::new();
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}

impl History for GitHistory {
    fn authors(&self, path: &Path) -> AuthorSet {
        let output = self.git_log(["--follow", "--format=%aN <%aE>"], path);
        let authors = parse_authors(&output);
        if authors.is_empty() {
            debug!("No author history for {}", path.display());
        }
        authors
    }

    fn latest_year(&self, path: &Path) -> Option<Year> {
        let output = self.git_log(["-1", "--format=%ad", "--date=format:%Y"], path);
        let year = parse_year(&output);
        if year.is_none() {
            debug!("No commit year for {}", path.display());
        }
        year
    }
}
