//! Kind-specific compatibility rules.
//!
//! Every [`LayerKind`] maps to exactly one [`Checker`] through
//! [`Checker::for_kind`]. The match is exhaustive, so a new kind cannot be
//! added without deciding how it is classified.

use regex::Regex;
use std::sync::LazyLock;

use super::verdict::CompatibilityVerdict;
use crate::layer::{Layer, LayerKind};

/// Vector provider accepted when nothing else is configured.
pub const DEFAULT_NATIVE_PROVIDER: &str = "qgishub";

/// The only raster provider the renderer can consume.
pub const WMS_PROVIDER: &str = "wms";

pub const REASON_UNSUPPORTED_VECTOR_PROVIDER: &str = "unsupported vector provider";
pub const REASON_UNSUPPORTED_RASTER_PROVIDER: &str = "raster provider not supported";
pub const REASON_WMS_NOT_XYZ: &str = "only XYZ type WMS supported";

static XYZ_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)type=xyz").unwrap());

/// Tunable inputs to the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityRules {
    /// Vector provider whose layers the renderer reads natively.
    pub native_provider: String,
}

impl Default for CompatibilityRules {
    fn default() -> Self {
        Self {
            native_provider: DEFAULT_NATIVE_PROVIDER.to_string(),
        }
    }
}

/// One acceptance rule per layer category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checker {
    /// Accepts only the native vector provider.
    Vector,
    /// Accepts only XYZ-tiled WMS sources.
    Raster,
    /// Rejects every layer of its kind.
    Unsupported,
}

impl Checker {
    /// Select the checker for a layer kind.
    pub fn for_kind(kind: &LayerKind) -> Self {
        match kind {
            LayerKind::Vector => Self::Vector,
            LayerKind::Raster => Self::Raster,
            LayerKind::Mesh
            | LayerKind::VectorTile
            | LayerKind::PointCloud
            | LayerKind::Annotation
            | LayerKind::Group
            | LayerKind::TiledScene
            | LayerKind::Plugin
            | LayerKind::Unknown(_) => Self::Unsupported,
        }
    }

    /// Rule name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vector => "vector",
            Self::Raster => "raster",
            Self::Unsupported => "unsupported",
        }
    }

    /// Evaluate the rule against one layer.
    pub fn check(&self, layer: &Layer, rules: &CompatibilityRules) -> CompatibilityVerdict {
        match self {
            Self::Vector => check_vector(layer, rules),
            Self::Raster => check_raster(layer),
            Self::Unsupported => match &layer.kind {
                LayerKind::Unknown(raw) if raw.is_empty() => {
                    CompatibilityVerdict::incompatible(unreadable_reason("kind"))
                }
                kind => {
                    CompatibilityVerdict::incompatible(format!("unsupported layer type: {}", kind))
                }
            },
        }
    }
}

/// Reason given when a field the rule depends on could not be read.
pub fn unreadable_reason(field: &str) -> String {
    format!("layer metadata unreadable: {}", field)
}

/// True when the locator selects XYZ tiling.
pub fn is_xyz_source(source: &str) -> bool {
    XYZ_MARKER.is_match(source)
}

fn check_vector(layer: &Layer, rules: &CompatibilityRules) -> CompatibilityVerdict {
    let Some(provider) = layer.provider.as_deref() else {
        return CompatibilityVerdict::incompatible(unreadable_reason("provider"));
    };

    if provider == rules.native_provider {
        CompatibilityVerdict::compatible()
    } else {
        CompatibilityVerdict::incompatible(REASON_UNSUPPORTED_VECTOR_PROVIDER)
    }
}

fn check_raster(layer: &Layer) -> CompatibilityVerdict {
    let Some(provider) = layer.provider.as_deref() else {
        return CompatibilityVerdict::incompatible(unreadable_reason("provider"));
    };

    if provider != WMS_PROVIDER {
        return CompatibilityVerdict::incompatible(REASON_UNSUPPORTED_RASTER_PROVIDER);
    }

    let Some(source) = layer.source.as_deref() else {
        return CompatibilityVerdict::incompatible(unreadable_reason("source"));
    };

    if is_xyz_source(source) {
        CompatibilityVerdict::compatible()
    } else {
        CompatibilityVerdict::incompatible(REASON_WMS_NOT_XYZ)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(layer: &Layer) -> CompatibilityVerdict {
        Checker::for_kind(&layer.kind).check(layer, &CompatibilityRules::default())
    }

    #[test]
    fn dispatch_table() {
        assert_eq!(Checker::for_kind(&LayerKind::Vector), Checker::Vector);
        assert_eq!(Checker::for_kind(&LayerKind::Raster), Checker::Raster);
        assert_eq!(Checker::for_kind(&LayerKind::Mesh), Checker::Unsupported);
        assert_eq!(
            Checker::for_kind(&LayerKind::Unknown("x".into())),
            Checker::Unsupported
        );
    }

    #[test]
    fn native_vector_provider_is_compatible() {
        let layer = Layer::new("A", LayerKind::Vector, "qgishub");
        assert_eq!(check(&layer), CompatibilityVerdict::compatible());
    }

    #[test]
    fn other_vector_providers_are_incompatible() {
        for provider in ["postgres", "ogr", "spatialite", "QGISHUB", "qgishub "] {
            let layer = Layer::new("B", LayerKind::Vector, provider);
            let verdict = check(&layer);
            assert!(!verdict.compatible, "{} should be rejected", provider);
            assert_eq!(verdict.reason, "unsupported vector provider");
        }
    }

    #[test]
    fn custom_native_provider() {
        let rules = CompatibilityRules {
            native_provider: "tilehub".to_string(),
        };
        let ours = Layer::new("A", LayerKind::Vector, "tilehub");
        let default = Layer::new("B", LayerKind::Vector, "qgishub");

        assert!(Checker::Vector.check(&ours, &rules).compatible);
        assert!(!Checker::Vector.check(&default, &rules).compatible);
    }

    #[test]
    fn non_wms_raster_is_incompatible() {
        let layer =
            Layer::new("R", LayerKind::Raster, "gdal").with_source("https://x/tile?type=xyz");
        let verdict = check(&layer);
        assert!(!verdict.compatible);
        assert_eq!(verdict.reason, "raster provider not supported");
    }

    #[test]
    fn wms_with_xyz_marker_is_compatible() {
        let layer =
            Layer::new("C", LayerKind::Raster, "wms").with_source("https://x/tile?type=xyz&z={z}");
        assert!(check(&layer).compatible);
    }

    #[test]
    fn wms_without_xyz_marker_is_incompatible() {
        let layer = Layer::new("D", LayerKind::Raster, "wms").with_source("https://x/wms?LAYERS=a");
        let verdict = check(&layer);
        assert!(!verdict.compatible);
        assert_eq!(verdict.reason, "only XYZ type WMS supported");
    }

    #[test]
    fn raster_reasons_are_distinct() {
        assert_ne!(REASON_UNSUPPORTED_RASTER_PROVIDER, REASON_WMS_NOT_XYZ);
    }

    #[test]
    fn xyz_marker_ignores_case() {
        assert!(is_xyz_source("TYPE=XYZ"));
        assert!(is_xyz_source("crs=EPSG:3857&Type=Xyz&url=https://t/{z}/{x}/{y}"));
        assert!(!is_xyz_source("type=wmts"));
        assert!(!is_xyz_source(""));
    }

    #[test]
    fn unknown_kind_is_incompatible_with_kind_in_reason() {
        let layer = Layer::new("M", LayerKind::Mesh, "mdal");
        let verdict = check(&layer);
        assert!(!verdict.compatible);
        assert_eq!(verdict.reason, "unsupported layer type: mesh");

        let layer = Layer::new("H", LayerKind::parse("hologram"), "x");
        assert_eq!(check(&layer).reason, "unsupported layer type: hologram");
    }

    #[test]
    fn unreadable_kind_is_reported_as_unreadable() {
        let numeric_kind = Layer::from_value(&serde_json::json!({
            "name": "K",
            "kind": 7,
            "provider": "qgishub"
        }));

        assert_eq!(check(&numeric_kind).reason, "layer metadata unreadable: kind");
        assert_eq!(check(&Layer::unreadable()).reason, "layer metadata unreadable: kind");
    }

    #[test]
    fn unreadable_provider_is_incompatible() {
        let vector = Layer::new("A", LayerKind::Vector, "qgishub").without_provider();
        let raster = Layer::new("C", LayerKind::Raster, "wms").without_provider();

        assert_eq!(check(&vector).reason, "layer metadata unreadable: provider");
        assert_eq!(check(&raster).reason, "layer metadata unreadable: provider");
    }

    #[test]
    fn unreadable_wms_source_is_incompatible() {
        let layer = Layer::new("C", LayerKind::Raster, "wms");
        assert_eq!(check(&layer).reason, "layer metadata unreadable: source");
    }

    #[test]
    fn vector_ignores_source() {
        let layer = Layer::new("A", LayerKind::Vector, "qgishub").with_source("garbage");
        assert!(check(&layer).compatible);
    }

    #[test]
    fn checker_names() {
        assert_eq!(Checker::Vector.name(), "vector");
        assert_eq!(Checker::Raster.name(), "raster");
        assert_eq!(Checker::Unsupported.name(), "unsupported");
    }
}
