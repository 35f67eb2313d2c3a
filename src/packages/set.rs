//! Source-file filtering and the derived package set

use super::DiffEntry;
use crate::config::Config;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Rules deciding which changed paths count as package sources
#[derive(Debug, Clone)]
pub struct PackageFilter {
    source_suffix: String,
    vendor_prefix: String,
}

impl PackageFilter {
    pub fn new(source_suffix: impl Into<String>, vendor_prefix: impl Into<String>) -> Self {
        Self {
            source_suffix: source_suffix.into(),
            vendor_prefix: vendor_prefix.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.source_suffix, &config.vendor_prefix)
    }

    /// Whether `path` is a non-vendored source file.
    ///
    /// The vendor check is a plain text prefix: `vendored.go` at the
    /// repository root is excluded just like `vendor/lib/x.go`.
    pub fn accepts(&self, path: &str) -> bool {
        if path.starts_with(&self.vendor_prefix) {
            debug!("Skipping vendored path {}", path);
            return false;
        }
        if !path.ends_with(&self.source_suffix) {
            debug!("Skipping non-source path {}", path);
            return false;
        }
        true
    }
}

/// Keep the entries whose path passes `filter`, in diff order
pub fn select_source_files(entries: Vec<DiffEntry>, filter: &PackageFilter) -> Vec<DiffEntry> {
    entries
        .into_iter()
        .filter(|e| filter.accepts(&e.path))
        .collect()
}

/// Unique set of package directories, kept sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackageSet {
    dirs: BTreeSet<String>,
}

impl PackageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from changed file paths
    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::new();
        for path in paths {
            set.insert_file(path);
        }
        set
    }

    /// Record the directory containing `path`.
    /// Returns false when the file sits at the repository root and maps to no package.
    pub fn insert_file(&mut self, path: &str) -> bool {
        match parent_dir(path) {
            Some(dir) => {
                self.dirs.insert(dir.to_string());
                true
            }
            None => {
                debug!("Skipping root-level file {}", path);
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }

    /// Package patterns in `dir/...` form
    pub fn wildcards(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(|dir| format!("{}/...", dir))
    }
}

/// Path with its final segment removed; None when that leaves nothing
fn parent_dir(path: &str) -> Option<&str> {
    match path.rsplit_once('/') {
        Some((dir, _)) if !dir.is_empty() => Some(dir),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn go_filter() -> PackageFilter {
        PackageFilter::from_config(&Config::default())
    }

    fn dirs(set: &PackageSet) -> Vec<&str> {
        set.iter().collect()
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir("cmd/foo/main.go"), Some("cmd/foo"));
        assert_eq!(parent_dir("pkg/x.go"), Some("pkg"));
        assert_eq!(parent_dir("main.go"), None);
    }

    #[test]
    fn test_filter_accepts_source_files() {
        let filter = go_filter();
        assert!(filter.accepts("cmd/foo/main.go"));
        assert!(filter.accepts("main.go"));
    }

    #[test]
    fn test_filter_rejects_vendor() {
        let filter = go_filter();
        assert!(!filter.accepts("vendor/lib/pkg/file.go"));
    }

    #[test]
    fn test_filter_vendor_is_plain_prefix() {
        let filter = go_filter();
        assert!(!filter.accepts("vendored.go"));
        assert!(!filter.accepts("vendor_tools/gen.go"));
        // Only the start of the path is checked
        assert!(filter.accepts("pkg/vendor/x.go"));
    }

    #[test]
    fn test_filter_rejects_other_suffixes() {
        let filter = go_filter();
        assert!(!filter.accepts("README.md"));
        assert!(!filter.accepts("docs/guide/README.md"));
        assert!(!filter.accepts("pkg/a/x.go.orig"));
    }

    #[test]
    fn test_filter_custom_rules() {
        let filter = PackageFilter::new(".rs", "third_party");
        assert!(filter.accepts("src/lib.rs"));
        assert!(!filter.accepts("third_party/x/lib.rs"));
        assert!(!filter.accepts("cmd/foo/main.go"));
    }

    #[test]
    fn test_select_source_files_keeps_order() {
        let entries = vec![
            DiffEntry::parse("M\tz/b.go").unwrap(),
            DiffEntry::parse("M\tREADME.md").unwrap(),
            DiffEntry::parse("A\ta/a.go").unwrap(),
        ];

        let selected: Vec<_> = select_source_files(entries, &go_filter())
            .into_iter()
            .map(|e| e.path)
            .collect();

        assert_eq!(selected, vec!["z/b.go", "a/a.go"]);
    }

    #[test]
    fn test_single_file_package() {
        let set = PackageSet::from_paths(["cmd/foo/main.go"]);
        assert_eq!(dirs(&set), vec!["cmd/foo"]);
    }

    #[test]
    fn test_root_file_contributes_nothing() {
        let mut set = PackageSet::new();
        assert!(!set.insert_file("main.go"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_shared_directory_collapses() {
        let mut set = PackageSet::from_paths(["pkg/a/x.go", "pkg/a/y.go"]);
        assert_eq!(set.len(), 1);

        set.insert_file("pkg/a/z.go");
        assert_eq!(dirs(&set), vec!["pkg/a"]);
    }

    #[test]
    fn test_nested_directories_are_distinct() {
        let set = PackageSet::from_paths(["pkg/a/x.go", "pkg/a/b/y.go", "pkg/z.go"]);
        assert_eq!(dirs(&set), vec!["pkg", "pkg/a", "pkg/a/b"]);
    }

    #[test]
    fn test_wildcards() {
        let set = PackageSet::from_paths(["cmd/foo/main.go", "pkg/a/x.go"]);
        let wildcards: Vec<String> = set.wildcards().collect();
        assert_eq!(wildcards, vec!["cmd/foo/...", "pkg/a/..."]);
    }
}
