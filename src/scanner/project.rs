//! Whole-project classification.

use tracing::{debug, warn};

use super::report::ClassificationReport;
use crate::compat::{Checker, CompatibilityRules, CompatibilityVerdict};
use crate::layer::{Layer, ProjectSource};

/// Classifies every layer of a project snapshot.
///
/// Scanning is read-only and keeps no state between calls, so the same
/// snapshot always produces the same report.
#[derive(Debug, Clone, Default)]
pub struct ProjectScanner {
    rules: CompatibilityRules,
}

impl ProjectScanner {
    /// Create a scanner with explicit rules.
    pub fn new(rules: CompatibilityRules) -> Self {
        Self { rules }
    }

    /// Rules this scanner applies.
    pub fn rules(&self) -> &CompatibilityRules {
        &self.rules
    }

    /// Classify a single layer.
    pub fn check_layer(&self, layer: &Layer) -> CompatibilityVerdict {
        let checker = Checker::for_kind(&layer.kind);
        let verdict = checker.check(layer, &self.rules);
        debug!(
            "{} [{}] via {} checker: {}",
            layer.label(),
            layer.kind,
            checker.name(),
            if verdict.compatible {
                "compatible"
            } else {
                verdict.reason.as_str()
            }
        );
        verdict
    }

    /// Classify every layer in the snapshot, in order.
    pub fn analyze(&self, layers: &[Layer]) -> ClassificationReport {
        let mut report = ClassificationReport::new();
        for layer in layers {
            let verdict = self.check_layer(layer);
            report.push(layer, verdict);
        }
        debug!(
            "Classified {} layers: {} compatible, {} incompatible",
            report.total(),
            report.compatible.len(),
            report.incompatible.len()
        );
        report
    }

    /// Pull a snapshot from `source` and classify it.
    ///
    /// A source that cannot produce a snapshot has nothing to scan, so the
    /// result is an empty report rather than an error.
    pub fn analyze_source(&self, source: &dyn ProjectSource) -> ClassificationReport {
        match source.layers() {
            Ok(layers) => self.analyze(&layers),
            Err(e) => {
                warn!("No layers read from {}: {}", source.describe(), e);
                ClassificationReport::new()
            }
        }
    }
}
