//! License labels produced by the license classifier.
//!
//! Each variant names one of the license families the classifier can
//! recognize. The label carries two spellings: a short identifier used in
//! logs and on the command line, and the long name rendered into the header
//! block (`Licensed under the <name>.`).

use std::fmt;
use std::str::FromStr;

use strum::EnumIter;

/// Classified license of the repository.
///
/// # Examples
///
/// ```
/// use add_header::models::LicenseLabel;
///
/// let label = LicenseLabel::Apache2;
/// assert_eq!(label.as_str(), "Apache-2.0");
/// assert_eq!(label.display_name(), "Apache License 2.0");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter)]
pub enum LicenseLabel {
    /// Also the fallback when the repository has no license file.
    #[default]
    Mit,
    Apache2,
    Gpl,
    Bsd,
    Unknown,
}

impl LicenseLabel {
    /// Returns the short identifier of this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mit => "MIT",
            Self::Apache2 => "Apache-2.0",
            Self::Gpl => "GPL",
            Self::Bsd => "BSD",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns the name written into the `Licensed under the ...` header line.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Mit => "MIT License",
            Self::Apache2 => "Apache License 2.0",
            Self::Gpl => "GNU General Public License",
            Self::Bsd => "BSD License",
            Self::Unknown => "Unknown License",
        }
    }
}

impl AsRef<str> for LicenseLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LicenseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseLabel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mit" => Ok(Self::Mit),
            "apache-2.0" | "apache" => Ok(Self::Apache2),
            "gpl" => Ok(Self::Gpl),
            "bsd" => Ok(Self::Bsd),
            "unknown" => Ok(Self::Unknown),
            other => Err(anyhow::anyhow!("unrecognized license label: {other}")),
        }
    }
}
