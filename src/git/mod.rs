//! Git integration module
//!
//! Runs the read-only inspection commands the package finder needs:
//! the merge-base lookup and the name-status diff against it.

mod command;
mod diff;

pub use command::GitCommand;
pub use diff::{diff_name_status, merge_base};
