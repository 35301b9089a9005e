//! Project sources and snapshot file loading.
//!
//! The host application owns the live project. This crate only ever sees a
//! snapshot of it, obtained through a [`ProjectSource`]. On disk a snapshot
//! is a YAML or JSON file exported by the host:
//!
//! ```yaml
//! layers:
//!   - name: Parcels
//!     kind: vector
//!     provider: qgishub
//!   - name: Basemap
//!     kind: raster
//!     provider: wms
//!     source: "type=xyz&url=https://tile.example.org/{z}/{x}/{y}.png"
//! ```

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::model::Layer;
use crate::error::{LayercheckError, Result};

/// Directory holding layercheck files inside a project.
pub const PROJECT_DIR: &str = ".layercheck";

/// Snapshot file names, in discovery order.
pub const SNAPSHOT_FILE_NAMES: &[&str] = &["layers.yml", "layers.yaml", "layers.json"];

/// Anything that can hand out a snapshot of the current project's layers.
pub trait ProjectSource {
    /// Short description for log messages.
    fn describe(&self) -> String;

    /// Read every layer currently in the project, in project order.
    fn layers(&self) -> Result<Vec<Layer>>;
}

impl ProjectSource for Vec<Layer> {
    fn describe(&self) -> String {
        format!("in-memory project ({} layers)", self.len())
    }

    fn layers(&self) -> Result<Vec<Layer>> {
        Ok(self.clone())
    }
}

/// A snapshot file on disk.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Wrap an explicit snapshot path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Find the snapshot inside `<project_root>/.layercheck/`.
    ///
    /// Returns the first of [`SNAPSHOT_FILE_NAMES`] that exists.
    pub fn discover(project_root: &Path) -> Option<Self> {
        let dir = project_root.join(PROJECT_DIR);
        SNAPSHOT_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
            .map(Self::new)
    }

    /// Default location reported when discovery finds nothing.
    pub fn default_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_DIR).join(SNAPSHOT_FILE_NAMES[0])
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProjectSource for SnapshotFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn layers(&self) -> Result<Vec<Layer>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LayercheckError::SnapshotNotFound {
                    path: self.path.clone(),
                }
            } else {
                LayercheckError::Io(e)
            }
        })?;

        parse_snapshot(&content, &self.path)
    }
}

const SHAPE_ERROR: &str = "expected a mapping with `layers` or a sequence of layers";
const LAYERS_NOT_SEQUENCE: &str = "`layers` must be a sequence";

/// Parse snapshot content into layers.
///
/// `.json` files are decoded as JSON, everything else as YAML. The document
/// is either a mapping with a `layers` sequence or a bare sequence; an empty
/// document is an empty project. Only the document shape can fail. Entries
/// are decoded one at a time with [`Layer::from_value`], so a malformed entry
/// never hides the others.
pub fn parse_snapshot(content: &str, source_path: &Path) -> Result<Vec<Layer>> {
    let parse_error = |message: String| LayercheckError::SnapshotParseError {
        path: source_path.to_path_buf(),
        message,
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let is_json = source_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let entries: Vec<Value> = if is_json {
        let document: Value =
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        json_entries(document).map_err(|m| parse_error(m.to_string()))?
    } else {
        let document: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        yaml_entries(document)
            .map_err(|m| parse_error(m.to_string()))?
            .iter()
            .map(yaml_entry_to_json)
            .collect()
    };

    Ok(entries.iter().map(Layer::from_value).collect())
}

fn json_entries(document: Value) -> std::result::Result<Vec<Value>, &'static str> {
    match document {
        Value::Null => Ok(Vec::new()),
        Value::Array(entries) => Ok(entries),
        Value::Object(mut map) => match map.remove("layers") {
            Some(Value::Array(entries)) => Ok(entries),
            Some(Value::Null) | None => Ok(Vec::new()),
            Some(_) => Err(LAYERS_NOT_SEQUENCE),
        },
        _ => Err(SHAPE_ERROR),
    }
}

fn yaml_entries(
    document: serde_yaml::Value,
) -> std::result::Result<Vec<serde_yaml::Value>, &'static str> {
    use serde_yaml::Value as Yaml;

    match document {
        Yaml::Null => Ok(Vec::new()),
        Yaml::Sequence(entries) => Ok(entries),
        Yaml::Mapping(mut map) => match map.remove("layers") {
            Some(Yaml::Sequence(entries)) => Ok(entries),
            Some(Yaml::Null) | None => Ok(Vec::new()),
            Some(_) => Err(LAYERS_NOT_SEQUENCE),
        },
        _ => Err(SHAPE_ERROR),
    }
}

/// Convert one YAML entry. Nodes JSON cannot hold make only that entry
/// unreadable.
fn yaml_entry_to_json(entry: &serde_yaml::Value) -> Value {
    serde_json::to_value(entry).unwrap_or_else(|e| {
        debug!("Unreadable snapshot entry: {}", e);
        Value::Null
    })
}
