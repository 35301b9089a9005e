//! Layer compatibility rules for the web-mapping renderer.
//!
//! A [`Checker`] is selected per [`LayerKind`](crate::layer::LayerKind) and
//! produces a [`CompatibilityVerdict`]. Checking is pure and never fails:
//! metadata that cannot be read yields an incompatible verdict.
//!
//! # Example
//!
//! ```
//! use layercheck::compat::{Checker, CompatibilityRules};
//! use layercheck::layer::{Layer, LayerKind};
//!
//! let layer = Layer::new("Basemap", LayerKind::Raster, "wms")
//!     .with_source("type=xyz&url=https://tile.example.org/{z}/{x}/{y}.png");
//! let verdict = Checker::for_kind(&layer.kind).check(&layer, &CompatibilityRules::default());
//! assert!(verdict.compatible);
//! ```

pub mod checker;
pub mod verdict;

pub use checker::{
    is_xyz_source, unreadable_reason, Checker, CompatibilityRules, DEFAULT_NATIVE_PROVIDER,
    REASON_UNSUPPORTED_RASTER_PROVIDER, REASON_UNSUPPORTED_VECTOR_PROVIDER, REASON_WMS_NOT_XYZ,
    WMS_PROVIDER,
};
pub use verdict::CompatibilityVerdict;
