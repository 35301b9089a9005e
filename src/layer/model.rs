//! Layer descriptors as exported by the host project.

use serde_json::Value;

use super::kind::LayerKind;

/// Placeholder shown for a name or provider the host could not export.
pub const UNREADABLE_PLACEHOLDER: &str = "<unknown>";

/// A read-only snapshot of one map layer.
///
/// `None` in any optional field means the host exported the layer but the
/// field could not be read (missing, null or not a string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Display name. Not unique within a project.
    pub name: Option<String>,

    /// Runtime kind.
    pub kind: LayerKind,

    /// Data-access provider identifier (e.g. `wms`, `ogr`, `postgres`).
    pub provider: Option<String>,

    /// Data-source locator, usually a URI with provider-specific parameters.
    pub source: Option<String>,
}

impl Layer {
    /// Create a layer with a readable name and provider and no locator.
    pub fn new(name: &str, kind: LayerKind, provider: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            kind,
            provider: Some(provider.to_string()),
            source: None,
        }
    }

    /// Create a layer whose metadata could not be read at all.
    pub fn unreadable() -> Self {
        Self {
            name: None,
            kind: LayerKind::Unknown(String::new()),
            provider: None,
            source: None,
        }
    }

    /// Set the data-source locator.
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    /// Mark the provider as unreadable.
    pub fn without_provider(mut self) -> Self {
        self.provider = None;
        self
    }

    /// Decode one snapshot entry.
    ///
    /// Decoding never fails. Fields that are absent or not strings become
    /// `None`, and an entry that is not a mapping yields [`Layer::unreadable`].
    /// `kind` also accepts the key `type`, and `source` also accepts `uri`.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::unreadable();
        };

        let text = |keys: &[&str]| {
            keys.iter()
                .find_map(|k| map.get(*k))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            name: text(&["name"]),
            kind: LayerKind::parse(text(&["kind", "type"]).as_deref().unwrap_or("")),
            provider: text(&["provider"]),
            source: text(&["source", "uri"]),
        }
    }

    /// Display string used in reports: `"<name> (<provider>)"`.
    pub fn label(&self) -> String {
        format!(
            "{} ({})",
            self.name.as_deref().unwrap_or(UNREADABLE_PLACEHOLDER),
            self.provider.as_deref().unwrap_or(UNREADABLE_PLACEHOLDER)
        )
    }
}
