//! The changed-package pipeline
//!
//! merge-base lookup -> name-status diff -> filter -> package set.
//! Any git failure aborts the run before anything is printed.

use crate::config::Config;
use crate::error::Result;
use crate::git;
use crate::packages::{
    parse_name_status, select_source_files, DiffEntry, PackageFilter, PackageSet,
};
use serde::Serialize;
use tracing::info;

/// Everything a run learned, ready for export
#[derive(Debug, Clone, Serialize)]
pub struct FinderReport {
    /// Ref the merge-base was computed against
    pub base: String,
    /// Commit the diff was taken from
    pub merge_base: String,
    /// Source files that survived filtering, in diff order
    pub changed_files: Vec<DiffEntry>,
    /// Directories containing those files
    pub packages: PackageSet,
}

/// Finds the packages changed since the merge-base with the base ref
pub struct ChangedPackageFinder<'a> {
    config: &'a Config,
    filter: PackageFilter,
}

impl<'a> ChangedPackageFinder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            filter: PackageFilter::from_config(config),
        }
    }

    /// Run the git queries and derive the package set
    pub fn run(&self) -> Result<FinderReport> {
        let repo_dir = self.config.repo_dir.as_deref();

        let merge_base = git::merge_base(repo_dir, &self.config.base_ref, &self.config.head_ref)?;
        let diff = git::diff_name_status(repo_dir, &merge_base)?;

        Ok(self.report_from_diff(merge_base, &diff))
    }

    /// Derive the report from already captured name-status output
    pub fn report_from_diff(&self, merge_base: String, diff: &str) -> FinderReport {
        let entries = parse_name_status(diff);
        info!("{} paths changed since {}", entries.len(), merge_base);

        let changed_files = select_source_files(entries, &self.filter);
        let packages = PackageSet::from_paths(changed_files.iter().map(|e| e.path.as_str()));
        info!(
            "{} source files changed across {} packages",
            changed_files.len(),
            packages.len()
        );
        if packages.is_empty() {
            info!("No packages changed since {}", merge_base);
        }

        FinderReport {
            base: self.config.base_ref.clone(),
            merge_base,
            changed_files,
            packages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn packages_for(diff: &str) -> Vec<String> {
        let config = Config::default();
        let report = ChangedPackageFinder::new(&config).report_from_diff("abc".to_string(), diff);
        report.packages.wildcards().collect()
    }

    #[test]
    fn test_empty_diff() {
        assert!(packages_for("").is_empty());
    }

    #[test]
    fn test_mixed_diff() {
        let diff = "\
M\tcmd/foo/main.go
A\tmain.go
M\tvendor/lib/pkg/file.go
M\tdocs/README.md
A\tpkg/a/x.go
M\tpkg/a/y.go
R087\tpkg/old/z.go\tpkg/new/z.go
D\tinternal/gone/gone.go
";

        assert_eq!(
            packages_for(diff),
            vec![
                "cmd/foo/...",
                "internal/gone/...",
                "pkg/a/...",
                "pkg/new/...",
            ]
        );
    }

    #[test]
    fn test_report_keeps_filtered_entries() {
        let config = Config::default();
        let report = ChangedPackageFinder::new(&config)
            .report_from_diff("abc".to_string(), "M\tmain.go\nM\tREADME.md\n");

        assert_eq!(report.base, "origin/master");
        assert_eq!(report.merge_base, "abc");
        assert_eq!(report.changed_files.len(), 1);
        assert_eq!(report.changed_files[0].path, "main.go");
        assert!(report.packages.is_empty());
    }
}
