//! Per-layer compatibility verdicts.

use serde::Serialize;

/// Outcome of checking one layer against the rule for its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityVerdict {
    /// Whether the renderer can display the layer.
    pub compatible: bool,

    /// Why the layer is incompatible. Empty when compatible.
    pub reason: String,
}

impl CompatibilityVerdict {
    /// A passing verdict.
    pub fn compatible() -> Self {
        Self {
            compatible: true,
            reason: String::new(),
        }
    }

    /// A failing verdict with a human-readable reason.
    pub fn incompatible(reason: impl Into<String>) -> Self {
        Self {
            compatible: false,
            reason: reason.into(),
        }
    }
}
