//! Classification report types.

use serde::Serialize;

use crate::compat::CompatibilityVerdict;
use crate::layer::{Layer, LayerKind};

/// One layer's line in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// Display string, `"<name> (<provider>)"`.
    pub label: String,

    /// Kind the layer was classified as.
    pub kind: LayerKind,

    /// Why the layer is incompatible. Empty for compatible layers.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reason: String,
}

impl ReportEntry {
    /// Build the entry for a classified layer.
    pub fn new(layer: &Layer, verdict: CompatibilityVerdict) -> Self {
        Self {
            label: layer.label(),
            kind: layer.kind.clone(),
            reason: verdict.reason,
        }
    }
}

/// Result of scanning a project: every layer in exactly one bucket.
///
/// Both sequences keep project order and may contain repeated labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationReport {
    /// Layers the renderer can display.
    pub compatible: Vec<ReportEntry>,

    /// Layers the renderer cannot display, with reasons.
    pub incompatible: Vec<ReportEntry>,
}

impl ClassificationReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// File a classified layer into its bucket.
    pub fn push(&mut self, layer: &Layer, verdict: CompatibilityVerdict) {
        if verdict.compatible {
            self.compatible.push(ReportEntry::new(layer, verdict));
        } else {
            self.incompatible.push(ReportEntry::new(layer, verdict));
        }
    }

    /// Display strings of compatible layers, in project order.
    pub fn compatible_labels(&self) -> Vec<&str> {
        self.compatible.iter().map(|e| e.label.as_str()).collect()
    }

    /// Display strings of incompatible layers, in project order.
    pub fn incompatible_labels(&self) -> Vec<&str> {
        self.incompatible.iter().map(|e| e.label.as_str()).collect()
    }

    /// Number of layers classified.
    pub fn total(&self) -> usize {
        self.compatible.len() + self.incompatible.len()
    }

    /// True when no layer was classified.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// True when no layer is incompatible.
    pub fn is_fully_compatible(&self) -> bool {
        self.incompatible.is_empty()
    }
}
