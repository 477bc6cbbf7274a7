//! Copyright header synthesis and replacement.
//!
//! A header block is a run of lines opened and closed by the same sentinel
//! line. [`template`] renders a fresh block; [`locator`] finds and
//! strips the block a previous run wrote. Both rely on [`SENTINEL`] being
//! byte-for-byte identical, which is what makes reruns idempotent.

pub mod locator;
pub mod template;

pub use locator::{
    HEADER_SCAN_LINES, HeaderBlock, MAX_HEADER_LINES, locate_header, strip_existing_header,
};
pub use template::{DEFAULT_HOLDER, HeaderFields, render_header};

/// Line comment prefix of every header line.
pub const COMMENT_PREFIX: &str = "#";

/// An empty comment line inside the header.
pub const BLANK_COMMENT: &str = "#";

/// Opening and closing delimiter of a header block: the comment prefix, a
/// space, and 65 `=` characters.
pub const SENTINEL: &str =
    "# =================================================================";

/// Whether the original content carried a header that was replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Missing,
    Found,
}

/// Result of splicing a new header into existing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    pub content: String,
    pub previous: HeaderState,
}

/// Joins `header`, one empty separator line, and `remainder` into file
/// content. Every line, the separator included, ends with `line_ending`.
pub fn compose<H, R>(header: &[H], remainder: &[R], line_ending: &str) -> String
where
    H: AsRef<str>,
    R: AsRef<str>,
{
    let mut out = String::new();
    for line in header {
        out.push_str(line.as_ref());
        out.push_str(line_ending);
    }
    out.push_str(line_ending);
    for line in remainder {
        out.push_str(line.as_ref());
        out.push_str(line_ending);
    }
    out
}

/// Replaces the header of `lines` (if any) with `header`, terminating every
/// line with `line_ending`.
pub fn splice_header(lines: Vec<String>, header: &[String], line_ending: &str) -> Spliced {
    let (remainder, had_header) = strip_existing_header(lines);
    Spliced {
        content: compose(header, &remainder, line_ending),
        previous: if had_header {
            HeaderState::Found
        } else {
            HeaderState::Missing
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthorSet, LicenseLabel};

    fn header() -> Vec<String> {
        let authors: AuthorSet = ["Jane Doe <jane@x.org>"].into_iter().collect();
        render_header(&HeaderFields {
            authors: &authors,
            year: 2023,
            holder: DEFAULT_HOLDER,
            license: LicenseLabel::Mit,
        })
    }

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_compose_with_remainder() {
        let out = compose(&["# a", "# b"], &["x", "y"], "\n");
        assert_eq!(out, "# a\n# b\n\nx\ny\n");
    }

    #[test]
    fn test_compose_without_remainder() {
        let out = compose(&["# a"], &[] as &[&str], "\n");
        assert_eq!(out, "# a\n\n");
    }

    #[test]
    fn test_splice_into_headerless_file() {
        let original = "import os\n\nprint(os.name)\n";
        let spliced = splice_header(lines(original), &header(), "\n");
        assert_eq!(spliced.previous, HeaderState::Missing);
        assert_eq!(
            spliced.content,
            format!("{}\n\n{}", header().join("\n"), original)
        );
    }

    #[test]
    fn test_splice_replaces_existing_header() {
        let old = "\
# =================================================================
#
# Authors: Old Person <old@x.org>
#
# Copyright (c) 2019 Lincoln Institute of Land Policy
#
# Licensed under the BSD License.
#
# =================================================================

import os
";
        let spliced = splice_header(lines(old), &header(), "\n");
        assert_eq!(spliced.previous, HeaderState::Found);
        assert_eq!(
            spliced.content,
            format!("{}\n\nimport os\n", header().join("\n"))
        );
        assert!(!spliced.content.contains("Old Person"));
        assert_eq!(spliced.content.matches(SENTINEL).count(), 2);
    }

    #[test]
    fn test_splice_keeps_content_after_single_sentinel() {
        let broken = "# =================================================================\n#\nimport os\n";
        let spliced = splice_header(lines(broken), &header(), "\n");
        assert_eq!(spliced.previous, HeaderState::Missing);
        assert!(spliced.content.ends_with(&format!("\n\n{broken}")));
        assert_eq!(spliced.content.matches(SENTINEL).count(), 3);
    }

    #[test]
    fn test_splice_is_idempotent() {
        let original = "\n\nimport os\n";
        let once = splice_header(lines(original), &header(), "\n").content;
        let twice = splice_header(lines(&once), &header(), "\n").content;
        assert_eq!(once, twice);
    }

    #[test]
    fn test_splice_empty_file_is_idempotent() {
        let once = splice_header(Vec::new(), &header(), "\n").content;
        assert_eq!(once, format!("{}\n\n", header().join("\n")));
        let twice = splice_header(lines(&once), &header(), "\n").content;
        assert_eq!(once, twice);
    }

    #[test]
    fn test_compose_with_crlf() {
        let out = compose(&["# a"], &["x", "y"], "\r\n");
        assert_eq!(out, "# a\r\n\r\nx\r\ny\r\n");
    }

    #[test]
    fn test_splice_keeps_crlf_line_endings() {
        let original = "import os\r\nx = 1\r\n";
        let once = splice_header(lines(original), &header(), "\r\n").content;
        assert!(once.ends_with("\r\n\r\nimport os\r\nx = 1\r\n"));
        assert!(!once.replace("\r\n", "").contains('\n'));

        let twice = splice_header(lines(&once), &header(), "\r\n").content;
        assert_eq!(once, twice);
    }

    #[test]
    fn test_splice_replaces_header_with_blank_line_inside() {
        let edited = format!("{SENTINEL}\n#\n# Authors: Old <o@x>\n\n{SENTINEL}\nimport os\n");
        let spliced = splice_header(lines(&edited), &header(), "\n");
        assert_eq!(spliced.previous, HeaderState::Found);
        assert!(!spliced.content.contains("Old <o@x>"));
        assert_eq!(spliced.content.matches(SENTINEL).count(), 2);
        assert!(spliced.content.ends_with("\n\nimport os\n"));
    }
}
