//! JSON Schema generation for layer snapshot files.
//!
//! Host plugins that export snapshots can validate their output against
//! this schema. The loader itself stays lenient and never rejects an
//! individual layer entry.

use serde_json::{json, Value};

/// Kind names the schema advertises. Other strings are still accepted.
const KNOWN_KINDS: &[&str] = &[
    "vector",
    "raster",
    "mesh",
    "vector-tile",
    "point-cloud",
    "annotation",
    "group",
    "tiled-scene",
    "plugin",
];

/// Generates JSON Schema for snapshot files.
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete JSON Schema for `layers.yml` / `layers.json`.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "$id": "https://layercheck.dev/schemas/layers.json",
            "title": "Layer Snapshot",
            "description": "Layers exported from a GIS project for compatibility checking",
            "oneOf": [
                {
                    "type": "object",
                    "properties": {
                        "layers": self.layers_schema()
                    }
                },
                self.layers_schema()
            ]
        })
    }

    /// Generate schema for the layer list.
    fn layers_schema(&self) -> Value {
        json!({
            "type": "array",
            "description": "Layers in project order",
            "items": self.layer_schema()
        })
    }

    /// Generate schema for a single layer entry.
    fn layer_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Display name (not required to be unique)"
                },
                "kind": {
                    "type": "string",
                    "description": "Layer kind",
                    "examples": KNOWN_KINDS
                },
                "provider": {
                    "type": "string",
                    "description": "Data-access provider (e.g. qgishub, wms, ogr)"
                },
                "source": {
                    "type": "string",
                    "description": "Data-source locator; XYZ WMS sources contain type=xyz"
                }
            },
            "required": ["name", "kind", "provider"]
        })
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
