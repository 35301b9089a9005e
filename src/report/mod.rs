//! Report formatters.
//!
//! This module renders a [`ClassificationReport`] for people (terminal) or
//! for tooling (JSON).

pub mod human;
pub mod json;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

use crate::scanner::ClassificationReport;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Output format for scan results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting scan output.
pub trait ReportFormatter {
    /// Format a report to the given writer.
    fn format<W: Write>(&self, report: &ClassificationReport, writer: &mut W)
        -> std::io::Result<()>;
}

/// Render a report in `format` into a string.
pub fn render(report: &ClassificationReport, format: ReportFormat, use_color: bool) -> String {
    let mut output = Vec::new();
    let result = match format {
        ReportFormat::Human => HumanFormatter::new(use_color).format(report, &mut output),
        ReportFormat::Json => JsonFormatter::new().format(report, &mut output),
    };
    if let Err(e) = result {
        tracing::warn!("Failed to render report: {}", e);
    }
    String::from_utf8(output).unwrap_or_default()
}
