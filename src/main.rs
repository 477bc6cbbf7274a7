use std::env;
use std::error::Error;

use clap::Parser;
use log::{LevelFilter, info};

use add_header::cli::Cli;
use add_header::history::GitHistory;
use add_header::license::{classify_license, classify_license_file};
use add_header::models::LicenseLabel;
use add_header::processor::Processor;

fn main() -> std::io::Result<()> {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let license = resolve_license(&cli)?;
    let processor = Processor::new(GitHistory::new(), license).holder(cli.holder);

    let result = processor.process(&cli.files);
    info!(
        "{} files: {} inserted, {} replaced, {} unchanged, {} skipped, {} failed",
        result.total(),
        result.inserted,
        result.replaced,
        result.unchanged,
        result.skipped,
        result.failures.len()
    );

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn resolve_license(cli: &Cli) -> Result<LicenseLabel, Box<dyn Error>> {
    if let Some(label) = cli.license {
        return Ok(label);
    }
    Ok(match &cli.license_file {
        Some(path) => classify_license_file(path),
        None => classify_license(&env::current_dir()?),
    })
}
