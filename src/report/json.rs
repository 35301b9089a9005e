//! JSON output formatter.
//!
//! Formats scan results as machine-readable JSON for the host plugin's
//! report panel and other tooling.

use super::ReportFormatter;
use crate::scanner::{ClassificationReport, ReportEntry};
use serde::Serialize;
use std::io::Write;

/// Formats scan output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    compatible: &'a [ReportEntry],
    incompatible: &'a [ReportEntry],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    compatible: usize,
    incompatible: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        report: &ClassificationReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let output = JsonOutput {
            compatible: &report.compatible,
            incompatible: &report.incompatible,
            summary: JsonSummary {
                total: report.total(),
                compatible: report.compatible.len(),
                incompatible: report.incompatible.len(),
            },
        };

        serde_json::to_writer_pretty(writer, &output).map_err(std::io::Error::other)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::{Layer, LayerKind};
    use crate::scanner::ProjectScanner;

    fn format(report: &ClassificationReport) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(report, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_entries_and_summary() {
        let report = ProjectScanner::default().analyze(&[
            Layer::new("A", LayerKind::Vector, "qgishub"),
            Layer::new("D", LayerKind::Raster, "wms").with_source("https://x/wms?LAYERS=a"),
        ]);

        let parsed = format(&report);

        assert_eq!(parsed["compatible"][0]["label"], "A (qgishub)");
        assert!(parsed["compatible"][0].get("reason").is_none());
        assert_eq!(parsed["incompatible"][0]["label"], "D (wms)");
        assert_eq!(parsed["incompatible"][0]["kind"], "raster");
        assert_eq!(
            parsed["incompatible"][0]["reason"],
            "only XYZ type WMS supported"
        );
        assert_eq!(parsed["summary"]["total"], 2);
        assert_eq!(parsed["summary"]["compatible"], 1);
        assert_eq!(parsed["summary"]["incompatible"], 1);
    }

    #[test]
    fn empty_report_has_empty_arrays() {
        let parsed = format(&ClassificationReport::new());
        assert_eq!(parsed["compatible"], serde_json::json!([]));
        assert_eq!(parsed["incompatible"], serde_json::json!([]));
    }

    #[test]
    fn default_impl_works() {
        let mut output = Vec::new();
        JsonFormatter
            .format(&ClassificationReport::new(), &mut output)
            .unwrap();
        assert!(!output.is_empty());
    }
}
