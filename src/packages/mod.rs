//! Package derivation from name-status diff output

mod entry;
mod set;

pub use entry::{parse_name_status, DiffEntry};
pub use set::{select_source_files, PackageFilter, PackageSet};
