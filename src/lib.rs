//! Layercheck - Layer compatibility classification for web-map publishing.
//!
//! Layercheck reads the layers of a desktop GIS project and tells which of
//! them a web-mapping renderer can display, with a reason for every layer
//! it cannot.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compat`] - Per-kind compatibility rules
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`layer`] - Layer model and project snapshot files
//! - [`report`] - Human and JSON report formatting
//! - [`scanner`] - Whole-project classification
//! - [`schema`] - JSON Schema for snapshot files
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use layercheck::layer::{Layer, LayerKind};
//! use layercheck::scanner::ProjectScanner;
//!
//! let layers = vec![
//!     Layer::new("Parcels", LayerKind::Vector, "qgishub"),
//!     Layer::new("Roads", LayerKind::Vector, "postgres"),
//! ];
//!
//! let report = ProjectScanner::default().analyze(&layers);
//! assert_eq!(report.compatible_labels(), ["Parcels (qgishub)"]);
//! assert_eq!(report.incompatible[0].reason, "unsupported vector provider");
//! ```

pub mod cli;
pub mod compat;
pub mod config;
pub mod error;
pub mod layer;
pub mod report;
pub mod scanner;
pub mod schema;
pub mod ui;

pub use error::{LayercheckError, Result};
