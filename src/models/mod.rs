//! Value types shared by the history, license, and header modules.

mod author_set;
mod license_label;

pub use author_set::AuthorSet;
pub use license_label::LicenseLabel;

/// Calendar year of a commit.
pub type Year = i32;
