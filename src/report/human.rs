//! Human-readable output formatter.

use super::ReportFormatter;
use crate::scanner::{ClassificationReport, ReportEntry};
use console::Style;
use std::io::Write;

/// Formats scan output for terminal display.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn style(&self, style: Style) -> Style {
        if self.use_color {
            style
        } else {
            Style::new()
        }
    }

    fn section<W: Write>(
        &self,
        writer: &mut W,
        title: &str,
        icon: &str,
        icon_style: Style,
        entries: &[ReportEntry],
    ) -> std::io::Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        writeln!(
            writer,
            "{} ({})",
            self.style(Style::new().bold()).apply_to(title),
            entries.len()
        )?;
        for entry in entries {
            if entry.reason.is_empty() {
                writeln!(writer, "  {} {}", icon_style.apply_to(icon), entry.label)?;
            } else {
                writeln!(
                    writer,
                    "  {} {}: {}",
                    icon_style.apply_to(icon),
                    entry.label,
                    self.style(Style::new().dim()).apply_to(&entry.reason)
                )?;
            }
        }
        writeln!(writer)
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        report: &ClassificationReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        if report.is_empty() {
            return writeln!(writer, "No layers found");
        }

        self.section(
            writer,
            "Compatible layers",
            "✓",
            self.style(Style::new().green()),
            &report.compatible,
        )?;
        self.section(
            writer,
            "Incompatible layers",
            "✗",
            self.style(Style::new().red()),
            &report.incompatible,
        )?;

        writeln!(
            writer,
            "{} of {} layer(s) compatible",
            report.compatible.len(),
            report.total()
        )
    }
}
