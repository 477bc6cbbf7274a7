pub mod cli;
pub mod header;
pub mod history;
pub mod license;
pub mod models;
pub mod processor;
pub mod utils;

pub use history::{GitHistory, History};
pub use models::{AuthorSet, LicenseLabel, Year};
pub use processor::{Outcome, ProcessResult, Processor};
