//! Configuration types for changed-packages

use std::path::PathBuf;

/// Base ref the merge-base is computed against when none is given
pub const DEFAULT_BASE: &str = "origin/master";

/// Output format for the package list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Space-separated `dir/...` wildcards on one line
    #[default]
    Plain,
    /// JSON object with the merge-base, changed files and packages
    Json,
}

/// Configuration options for a single run
#[derive(Debug, Clone)]
pub struct Config {
    /// Ref compared against HEAD to find the merge-base (default: origin/master)
    pub base_ref: String,

    /// Second ref given to `git merge-base` (default: HEAD)
    pub head_ref: String,

    /// Suffix a changed path must end with to count as source (default: .go)
    pub source_suffix: String,

    /// Literal text prefix that excludes a path (default: vendor)
    /// Matched against the whole path, not per path segment
    pub vendor_prefix: String,

    /// Directory git runs in. None means the process working directory.
    pub repo_dir: Option<PathBuf>,

    /// Output format (plain or json)
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_ref: String::from(DEFAULT_BASE),
            head_ref: String::from("HEAD"),
            source_suffix: String::from(".go"),
            vendor_prefix: String::from("vendor"),
            repo_dir: None,
            output_format: OutputFormat::Plain,
        }
    }
}
