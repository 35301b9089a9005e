//! Error types for layercheck operations.
//!
//! This module defines [`LayercheckError`], the error type used by the I/O
//! around the classifier (config files, snapshot files, the CLI), and a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Classification itself never fails: unreadable layer metadata becomes an
//!   incompatible verdict, see [`crate::compat`]
//! - Use `LayercheckError` for file and configuration problems
//! - Use `anyhow::Error` (via `LayercheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for layercheck operations.
#[derive(Debug, Error)]
pub enum LayercheckError {
    /// No layer snapshot exists at the expected location.
    #[error("Layer snapshot not found: {path}")]
    SnapshotNotFound { path: PathBuf },

    /// The snapshot file could not be decoded as YAML or JSON.
    #[error("Failed to parse layer snapshot at {path}: {message}")]
    SnapshotParseError { path: PathBuf, message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for layercheck operations.
pub type Result<T> = std::result::Result<T, LayercheckError>;
