//! License classification for the repository being processed.
//!
//! This is a keyword match over the license file, not license detection in
//! any legal sense. The lower-cased text is checked for a handful of
//! distinctive titles in priority order and the first hit wins.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::models::LicenseLabel;

/// File names checked, in order, when no license file is given explicitly.
pub const LICENSE_FILE_NAMES: &[&str] = &["LICENSE", "LICENSE.md", "LICENSE.txt", "COPYING"];

/// Title keywords in priority order. Matching is done on lower-cased text.
const LICENSE_KEYWORDS: &[(&str, LicenseLabel)] = &[
    ("mit license", LicenseLabel::Mit),
    ("apache license", LicenseLabel::Apache2),
    ("gnu general public license", LicenseLabel::Gpl),
    ("bsd license", LicenseLabel::Bsd),
];

/// Maps license text to a label. Text matching none of the keywords is
/// [`LicenseLabel::Unknown`].
pub fn classify_text(text: &str) -> LicenseLabel {
    let lowered = text.to_lowercase();
    LICENSE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(*keyword))
        .map_or(LicenseLabel::Unknown, |&(_, label)| label)
}

/// Finds the first conventionally named license file in `dir`.
pub fn find_license_file(dir: &Path) -> Option<PathBuf> {
    LICENSE_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Classifies the license file at `path`.
///
/// A missing file yields the default label. An unreadable one is logged and
/// treated the same way.
pub fn classify_license_file(path: &Path) -> LicenseLabel {
    if !path.is_file() {
        info!(
            "No license file at {}, defaulting to {}",
            path.display(),
            LicenseLabel::default()
        );
        return LicenseLabel::default();
    }

    match fs::read(path) {
        Ok(bytes) => {
            let label = classify_text(&String::from_utf8_lossy(&bytes));
            info!("Classified {} as {}", path.display(), label);
            label
        }
        Err(e) => {
            warn!("Failed to read license file {}: {}", path.display(), e);
            LicenseLabel::default()
        }
    }
}

/// Classifies the license of the repository rooted at `dir`.
pub fn classify_license(dir: &Path) -> LicenseLabel {
    match find_license_file(dir) {
        Some(path) => classify_license_file(&path),
        None => {
            info!(
                "No license file in {}, defaulting to {}",
                dir.display(),
                LicenseLabel::default()
            );
            LicenseLabel::default()
        }
    }
}
