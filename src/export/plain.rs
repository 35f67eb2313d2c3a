//! Plain exporter: one line of `dir/...` patterns for build and test tools

use crate::error::Result;
use crate::export::Exporter;
use crate::finder::FinderReport;
use std::io::Write;

/// Space-separated package wildcard exporter
pub struct PlainExporter;

impl Exporter for PlainExporter {
    fn export(&self, report: &FinderReport, writer: &mut dyn Write) -> Result<()> {
        let line = report.packages.wildcards().collect::<Vec<_>>().join(" ");
        // An empty set still prints the (blank) line
        writeln!(writer, "{}", line)?;
        Ok(())
    }
}
