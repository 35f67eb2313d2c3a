//! JSON exporter

use crate::error::Result;
use crate::export::Exporter;
use crate::finder::FinderReport;
use std::io::Write;

/// JSON output exporter
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn export(&self, report: &FinderReport, writer: &mut dyn Write) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
