use std::path::PathBuf;

use clap::Parser;

use crate::header::DEFAULT_HOLDER;
use crate::models::LicenseLabel;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files to add or refresh the copyright header in
    pub files: Vec<PathBuf>,

    /// License file to classify (default: first of LICENSE, LICENSE.md, LICENSE.txt, COPYING)
    #[arg(long)]
    pub license_file: Option<PathBuf>,

    /// Use this license instead of classifying a license file (MIT, Apache-2.0, GPL, BSD, Unknown)
    #[arg(long, conflicts_with = "license_file")]
    pub license: Option<LicenseLabel>,

    /// Copyright holder named in the header
    #[arg(long, default_value = DEFAULT_HOLDER)]
    pub holder: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
