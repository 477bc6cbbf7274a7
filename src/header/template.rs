use crate::models::{AuthorSet, LicenseLabel, Year};

use super::{BLANK_COMMENT, COMMENT_PREFIX, SENTINEL};

/// Default copyright holder named in the header.
pub const DEFAULT_HOLDER: &str = "Lincoln Institute of Land Policy";

/// Everything that varies between two rendered headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields<'a> {
    pub authors: &'a AuthorSet,
    pub year: Year,
    pub holder: &'a str,
    pub license: LicenseLabel,
}

/// Renders the header block, sentinel to sentinel.
///
/// ```text
/// # =================================================================
/// #
/// # Authors: Jane Doe <jane@x.org>
/// #
/// # Copyright (c) 2023 Lincoln Institute of Land Policy
/// #
/// # Licensed under the MIT License.
/// #
/// # =================================================================
/// ```
pub fn render_header(fields: &HeaderFields<'_>) -> Vec<String> {
    let mut lines = Vec::with_capacity(8 + fields.authors.len());
    lines.push(SENTINEL.to_string());
    lines.push(BLANK_COMMENT.to_string());
    lines.extend(
        fields
            .authors
            .iter()
            .map(|author| format!("{COMMENT_PREFIX} Authors: {author}")),
    );
    lines.push(BLANK_COMMENT.to_string());
    lines.push(format!(
        "{COMMENT_PREFIX} Copyright (c) {} {}",
        fields.year, fields.holder
    ));
    lines.push(BLANK_COMMENT.to_string());
    lines.push(format!(
        "{COMMENT_PREFIX} Licensed under the {}.",
        fields.license.display_name()
    ));
    lines.push(BLANK_COMMENT.to_string());
    lines.push(SENTINEL.to_string());
    lines
}
