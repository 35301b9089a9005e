//! Project-wide layer classification.
//!
//! [`ProjectScanner`] walks a project snapshot, dispatches each layer to its
//! [`Checker`](crate::compat::Checker) and files the result into a
//! [`ClassificationReport`].
//!
//! # Example
//!
//! ```
//! use layercheck::layer::{Layer, LayerKind};
//! use layercheck::scanner::ProjectScanner;
//!
//! let layers = vec![
//!     Layer::new("A", LayerKind::Vector, "qgishub"),
//!     Layer::new("B", LayerKind::Vector, "postgres"),
//! ];
//! let report = ProjectScanner::default().analyze(&layers);
//! assert_eq!(report.compatible_labels(), vec!["A (qgishub)"]);
//! assert_eq!(report.incompatible_labels(), vec!["B (postgres)"]);
//! ```

pub mod project;
pub mod report;

pub use project::ProjectScanner;
pub use report::{ClassificationReport, ReportEntry};
