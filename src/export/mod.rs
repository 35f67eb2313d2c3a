//! Export system for the changed-package report

mod json;
mod plain;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::finder::FinderReport;
use std::io::Write;

pub use json::JsonExporter;
pub use plain::PlainExporter;

/// Trait for output formatting
pub trait Exporter {
    /// Write the complete output for the given report
    fn export(&self, report: &FinderReport, writer: &mut dyn Write) -> Result<()>;
}

/// Create an appropriate exporter based on configuration
pub fn create_exporter(format: OutputFormat) -> Box<dyn Exporter> {
    match format {
        OutputFormat::Plain => Box::new(PlainExporter),
        OutputFormat::Json => Box::new(JsonExporter),
    }
}
