//! Layer kinds a host project can produce.

use serde::{Serialize, Serializer};
use std::fmt;

/// Runtime kind of a map layer.
///
/// The set mirrors what a QGIS-style host exports. Anything else is kept
/// verbatim in [`LayerKind::Unknown`] so it can still be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerKind {
    /// Feature data (points, lines, polygons).
    Vector,
    /// Gridded or tiled imagery.
    Raster,
    /// Unstructured mesh.
    Mesh,
    /// Pre-tiled vector data (e.g. MVT).
    VectorTile,
    /// Point cloud (LAS/LAZ, EPT, COPC).
    PointCloud,
    /// Annotation container.
    Annotation,
    /// Layer group.
    Group,
    /// 3D tiled scene.
    TiledScene,
    /// Layer implemented by another host plugin.
    Plugin,
    /// Kind string not recognised. Empty when the host omitted it.
    Unknown(String),
}

impl LayerKind {
    /// Parse a kind string leniently.
    ///
    /// Matching ignores case and `-`/`_`/space separators, so `vector-tile`,
    /// `Vector_Tile` and `vectortile` are the same kind.
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "vector" => Self::Vector,
            "raster" => Self::Raster,
            "mesh" => Self::Mesh,
            "vectortile" => Self::VectorTile,
            "pointcloud" => Self::PointCloud,
            "annotation" => Self::Annotation,
            "group" => Self::Group,
            "tiledscene" => Self::TiledScene,
            "plugin" => Self::Plugin,
            _ => Self::Unknown(raw.trim().to_string()),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Vector => "vector",
            Self::Raster => "raster",
            Self::Mesh => "mesh",
            Self::VectorTile => "vector-tile",
            Self::PointCloud => "point-cloud",
            Self::Annotation => "annotation",
            Self::Group => "group",
            Self::TiledScene => "tiled-scene",
            Self::Plugin => "plugin",
            Self::Unknown(raw) if raw.is_empty() => "unknown",
            Self::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LayerKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds() {
        assert_eq!(LayerKind::parse("vector"), LayerKind::Vector);
        assert_eq!(LayerKind::parse("raster"), LayerKind::Raster);
        assert_eq!(LayerKind::parse("mesh"), LayerKind::Mesh);
        assert_eq!(LayerKind::parse("group"), LayerKind::Group);
    }

    #[test]
    fn parse_ignores_case_and_separators() {
        assert_eq!(LayerKind::parse("VECTOR"), LayerKind::Vector);
        assert_eq!(LayerKind::parse("vector-tile"), LayerKind::VectorTile);
        assert_eq!(LayerKind::parse("Vector_Tile"), LayerKind::VectorTile);
        assert_eq!(LayerKind::parse("point cloud"), LayerKind::PointCloud);
        assert_eq!(LayerKind::parse(" Raster "), LayerKind::Raster);
    }

    #[test]
    fn unrecognised_kind_is_kept_verbatim() {
        assert_eq!(
            LayerKind::parse("Hologram"),
            LayerKind::Unknown("Hologram".to_string())
        );
        assert_eq!(LayerKind::parse("Hologram").to_string(), "Hologram");
    }

    #[test]
    fn empty_kind_displays_as_unknown() {
        let kind = LayerKind::parse("");
        assert_eq!(kind, LayerKind::Unknown(String::new()));
        assert_eq!(kind.to_string(), "unknown");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for kind in [
            LayerKind::VectorTile,
            LayerKind::PointCloud,
            LayerKind::TiledScene,
        ] {
            assert_eq!(LayerKind::parse(kind.as_str()), kind);
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&LayerKind::VectorTile).unwrap();
        assert_eq!(json, "\"vector-tile\"");
    }
}
