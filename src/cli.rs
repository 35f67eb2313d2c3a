//! CLI argument parsing using clap

use crate::config::{Config, OutputFormat, DEFAULT_BASE};
use crate::error::{FinderError, Result};
use clap::Parser;
use std::path::PathBuf;

/// List packages changed since the merge-base with a base branch
#[derive(Parser, Debug)]
#[command(name = "changed-packages")]
#[command(version)]
#[command(
    about = "Print the packages changed since the merge-base with a base branch",
    long_about = None
)]
pub struct Cli {
    /// Base ref to compute the merge-base against
    #[arg(
        short = 'b',
        long = "base",
        value_name = "REF",
        env = "CHANGED_PACKAGES_BASE",
        default_value = DEFAULT_BASE
    )]
    pub base: String,

    /// Ref compared with the base ref
    #[arg(long = "head", value_name = "REF", default_value = "HEAD")]
    pub head: String,

    /// Suffix a changed file must end with to count as source
    #[arg(short = 's', long = "suffix", value_name = "SUFFIX", default_value = ".go")]
    pub suffix: String,

    /// Paths starting with this text are ignored
    #[arg(long = "vendor-prefix", value_name = "PREFIX", default_value = "vendor")]
    pub vendor_prefix: String,

    /// Run git in this directory instead of the current one
    #[arg(short = 'C', long = "repo", value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long = "json")]
    pub json: bool,

    /// Log progress to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments into a Config
    pub fn into_config(self) -> Result<Config> {
        if self.base.trim().is_empty() {
            return Err(FinderError::InvalidConfig(
                "--base must not be empty".to_string(),
            ));
        }
        if self.head.trim().is_empty() {
            return Err(FinderError::InvalidConfig(
                "--head must not be empty".to_string(),
            ));
        }
        if self.suffix.is_empty() {
            return Err(FinderError::InvalidConfig(
                "--suffix must not be empty".to_string(),
            ));
        }
        // An empty prefix would match every path
        if self.vendor_prefix.is_empty() {
            return Err(FinderError::InvalidConfig(
                "--vendor-prefix must not be empty".to_string(),
            ));
        }

        let output_format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        };

        Ok(Config {
            base_ref: self.base,
            head_ref: self.head,
            source_suffix: self.suffix,
            vendor_prefix: self.vendor_prefix,
            repo_dir: self.repo,
            output_format,
        })
    }
}
