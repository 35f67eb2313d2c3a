//! Error types for changed-packages

use thiserror::Error;

/// Result type alias for changed-packages operations
pub type Result<T> = std::result::Result<T, FinderError>;

/// Error types for changed-packages operations
#[derive(Error, Debug)]
pub enum FinderError {
    /// Git ran but exited with a non-zero status.
    /// `stderr` holds git's own diagnostic, already trimmed.
    #[error("`{command}` failed ({}): {stderr}", exit_description(.code))]
    GitFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Git could not be started at all
    #[error("Failed to run `{command}`: {source}")]
    GitSpawn {
        command: String,
        source: std::io::Error,
    },

    /// Git printed output that is not valid UTF-8
    #[error("`{command}` printed non-UTF-8 output: {source}")]
    GitOutput {
        command: String,
        source: std::string::FromUtf8Error,
    },

    /// Invalid configuration provided
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FinderError {
    /// True for failures of the underlying version-control tool
    pub fn is_version_control(&self) -> bool {
        matches!(
            self,
            FinderError::GitFailed { .. }
                | FinderError::GitSpawn { .. }
                | FinderError::GitOutput { .. }
        )
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}
