//! Configuration schema types.
//!
//! ```yaml
//! settings:
//!   native_provider: qgishub
//!   default_format: human
//!   strict: false
//! ```

use serde::{Deserialize, Serialize};

use crate::compat::{CompatibilityRules, DEFAULT_NATIVE_PROVIDER};
use crate::report::ReportFormat;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayercheckConfig {
    /// Global settings
    pub settings: Settings,
}

/// Settings that apply to every scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Vector provider the renderer reads natively
    pub native_provider: String,

    /// Report format when `--format` is not given
    pub default_format: ReportFormat,

    /// Fail scans that find incompatible layers
    #[serde(skip_serializing_if = "is_false")]
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            native_provider: DEFAULT_NATIVE_PROVIDER.to_string(),
            default_format: ReportFormat::default(),
            strict: false,
        }
    }
}

impl Settings {
    /// Compatibility rules derived from these settings.
    pub fn rules(&self) -> CompatibilityRules {
        CompatibilityRules {
            native_provider: self.native_provider.clone(),
        }
    }
}

fn is_false(b: &bool) -> bool {
    !b
}
