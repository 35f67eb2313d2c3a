//! changed-packages - find the packages touched on a branch
//!
//! Diffs the working tree against its merge-base with a base branch and
//! prints the directories holding changed source files as `dir/...`
//! patterns, so CI can limit builds and tests to affected packages.

mod cli;
mod config;
mod error;
mod export;
mod finder;
mod git;
mod packages;

use clap::Parser;
use cli::Cli;
use config::Config;
use error::{FinderError, Result};
use export::create_exporter;
use finder::ChangedPackageFinder;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Convert to config
    let config = match cli.into_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

/// Resolve the report fully, then print it; nothing reaches stdout on failure
fn run(config: &Config) -> Result<()> {
    let report = ChangedPackageFinder::new(config).run()?;

    let exporter = create_exporter(config.output_format);
    let mut stdout = io::stdout().lock();
    exporter.export(&report, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn exit_code_for(err: &FinderError) -> ExitCode {
    if err.is_version_control() {
        ExitCode::from(1)
    } else {
        ExitCode::from(2)
    }
}

/// Logs go to stderr; stdout carries only the package list.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("changed_packages=debug")
        } else {
            EnvFilter::new("changed_packages=warn")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
