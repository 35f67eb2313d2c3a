//! Thin wrapper around the external `git` executable

use crate::error::{FinderError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// A git invocation with captured output
pub struct GitCommand<'a> {
    args: Vec<&'a str>,
    repo_dir: Option<&'a Path>,
}

impl<'a> GitCommand<'a> {
    /// Create a command for `git <args...>`
    pub fn new(args: &[&'a str]) -> Self {
        Self {
            args: args.to_vec(),
            repo_dir: None,
        }
    }

    /// Run git in `dir` instead of the process working directory
    pub fn current_dir(mut self, dir: Option<&'a Path>) -> Self {
        self.repo_dir = dir;
        self
    }

    /// Human-readable form used in log lines and error messages
    pub fn display(&self) -> String {
        format!("git {}", self.args.join(" "))
    }

    /// Run to completion and return stdout as text.
    ///
    /// A non-zero exit becomes [`FinderError::GitFailed`] carrying git's
    /// stderr; a failure to start git at all becomes [`FinderError::GitSpawn`].
    /// Stdout must be valid UTF-8, otherwise [`FinderError::GitOutput`].
    pub fn stdout(&self) -> Result<String> {
        let mut command = Command::new("git");
        command.args(&self.args);
        if let Some(dir) = self.repo_dir {
            command.current_dir(dir);
        }

        debug!("Running {}", self.display());
        let output = command.output().map_err(|source| FinderError::GitSpawn {
            command: self.display(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FinderError::GitFailed {
                command: self.display(),
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        self.decode(output.stdout)
    }

    fn decode(&self, stdout: Vec<u8>) -> Result<String> {
        String::from_utf8(stdout).map_err(|source| FinderError::GitOutput {
            command: self.display(),
            source,
        })
    }
}
