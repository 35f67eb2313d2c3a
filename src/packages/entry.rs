//! Parsing of `git diff --name-status` lines

use serde::Serialize;

/// One changed path from a name-status listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffEntry {
    /// Change status code as printed by git (M, A, D, R100, ...)
    pub status: String,
    /// Current path of the file, i.e. the last column of the line
    pub path: String,
}

impl DiffEntry {
    /// Parse a single line; None for blank lines.
    ///
    /// The path is the last whitespace-separated token, so rename and copy
    /// lines (`R100 old new`) resolve to the new path.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let status = tokens.next()?;
        let path = tokens.last().unwrap_or(status);

        Some(Self {
            status: status.to_string(),
            path: path.to_string(),
        })
    }
}

/// Parse the full output of `git diff --name-status`
pub fn parse_name_status(output: &str) -> Vec<DiffEntry> {
    output.lines().filter_map(DiffEntry::parse).collect()
}
