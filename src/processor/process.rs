use std::path::Path;

use anyhow::Result;
use log::{debug, error, info, warn};

use crate::header::{DEFAULT_HOLDER, HeaderFields, HeaderState, render_header, splice_header};
use crate::history::History;
use crate::models::LicenseLabel;
use crate::processor::ProcessResult;
use crate::utils::file::{UTF8_BOM, detect_line_ending, read_text, split_lines, write_file};

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file had no header and one was added.
    Inserted,
    /// An existing header was replaced with a different one.
    Replaced,
    /// The file already carried the exact header; nothing was written.
    Unchanged,
    /// Binary or non-UTF-8 content, left alone.
    Skipped,
}

/// Rewrites files so that they start with an up-to-date header.
///
/// The license label is fixed for the whole run; authors and year are
/// looked up per file through `history`.
pub struct Processor<H: History> {
    history: H,
    license: LicenseLabel,
    holder: String,
}

impl<H: History> Processor<H> {
    pub fn new(history: H, license: LicenseLabel) -> Self {
        Self {
            history,
            license,
            holder: DEFAULT_HOLDER.to_string(),
        }
    }

    pub fn holder(mut self, holder: impl Into<String>) -> Self {
        self.holder = holder.into();
        self
    }

    /// Renders the header `path` should carry.
    pub fn header_for(&self, path: &Path) -> Vec<String> {
        let authors = self.history.authors(path);
        let year = self.history.latest_year_or_current(path);
        debug!("{}: authors [{}], year {}", path.display(), authors, year);
        render_header(&HeaderFields {
            authors: &authors,
            year,
            holder: &self.holder,
            license: self.license,
        })
    }

    /// Inserts or refreshes the header of one file.
    ///
    /// Read and write failures are returned; the file is only replaced once
    /// the new content is fully written.
    pub fn process_file(&self, path: &Path) -> Result<Outcome> {
        let Some(text) = read_text(path)? else {
            warn!("Skipping {}: binary or not valid UTF-8", path.display());
            return Ok(Outcome::Skipped);
        };

        // A byte order mark stays at the very start, ahead of the header.
        let (bom, body) = match text.strip_prefix(UTF8_BOM) {
            Some(rest) => (UTF8_BOM.to_string(), rest),
            None => (String::new(), text.as_str()),
        };

        let header = self.header_for(path);
        let spliced = splice_header(split_lines(body), &header, detect_line_ending(body));
        let content = bom + &spliced.content;

        if content == text {
            return Ok(Outcome::Unchanged);
        }

        write_file(path, &content)?;

        Ok(match spliced.previous {
            HeaderState::Found => Outcome::Replaced,
            HeaderState::Missing => Outcome::Inserted,
        })
    }

    /// Processes every path in order. A failing path is logged and recorded
    /// without stopping the run.
    pub fn process<P: AsRef<Path>>(&self, paths: &[P]) -> ProcessResult {
        let mut result = ProcessResult::default();

        for path in paths {
            let path = path.as_ref();
            match self.process_file(path) {
                Ok(outcome) => {
                    info!("{}: {:?}", path.display(), outcome);
                    result.record(outcome);
                }
                Err(e) => {
                    error!("{}: {:#}", path.display(), e);
                    result.failures.push((path.to_path_buf(), format!("{:#}", e)));
                }
            }
        }

        result
    }
}
