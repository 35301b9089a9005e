//! Configuration validation rules.

use crate::config::schema::LayercheckConfig;
use crate::error::{LayercheckError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &LayercheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let provider = &config.settings.native_provider;

    if provider.trim().is_empty() {
        errors.push(ValidationError {
            rule: "empty-native-provider".to_string(),
            message: "settings.native_provider must not be empty".to_string(),
        });
    } else if provider.trim() != provider {
        errors.push(ValidationError {
            rule: "padded-native-provider".to_string(),
            message: format!(
                "settings.native_provider '{}' has surrounding whitespace and would never match",
                provider
            ),
        });
    }

    errors
}

/// Validate a configuration, joining all errors into one.
pub fn validate(config: &LayercheckConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    Err(LayercheckError::ConfigValidationError {
        message: errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; "),
    })
}
