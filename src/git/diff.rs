//! Merge-base and name-status queries

use super::GitCommand;
use crate::error::Result;
use std::path::Path;
use tracing::info;

/// Find the merge-base of `base` and `head`, trimmed of trailing whitespace
pub fn merge_base(repo_dir: Option<&Path>, base: &str, head: &str) -> Result<String> {
    let stdout = GitCommand::new(&["merge-base", base, head])
        .current_dir(repo_dir)
        .stdout()?;

    let commit = stdout.trim().to_string();
    info!("Merge-base of {} and {} is {}", base, head, commit);
    Ok(commit)
}

/// Raw `git diff --name-status <commit>` output for the working tree
pub fn diff_name_status(repo_dir: Option<&Path>, commit: &str) -> Result<String> {
    GitCommand::new(&["diff", "--name-status", commit])
        .current_dir(repo_dir)
        .stdout()
}
