//! Deep merge for layered YAML configuration.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely (not merged)
//! - Null values in an overlay delete the corresponding key from base
//! - Scalars in an overlay replace scalars in base
//! - An empty file (a null document) changes nothing

use serde_yaml::Value;

/// Deep merge two YAML values; `overlay` wins at the point of conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge config documents in order (later overrides earlier).
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .filter(|config| !config.is_null())
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn overlay_setting_replaces_base() {
        let base = yaml("settings:\n  native_provider: qgishub\n  strict: true");
        let overlay = yaml("settings:\n  native_provider: tilehub");

        let result = deep_merge(&base, &overlay);

        assert_eq!(result["settings"]["native_provider"], "tilehub");
        assert_eq!(result["settings"]["strict"], true);
    }

    #[test]
    fn null_removes_inherited_value() {
        let base = yaml("settings:\n  strict: true\n  default_format: json");
        let overlay = yaml("settings:\n  strict: null");

        let result = deep_merge(&base, &overlay);

        assert!(result["settings"].get("strict").is_none());
        assert_eq!(result["settings"]["default_format"], "json");
    }

    #[test]
    fn sequences_are_replaced_not_merged() {
        let base = yaml("tags: [a, b]");
        let overlay = yaml("tags: [c]");

        let result = deep_merge(&base, &overlay);
        let tags = result["tags"].as_sequence().unwrap();

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0], "c");
    }

    #[test]
    fn scalar_overlay_replaces_mapping_base() {
        let result = deep_merge(&yaml("settings:\n  strict: true"), &yaml("settings: off"));
        assert_eq!(result["settings"], "off");
    }

    #[test]
    fn merge_configs_applies_in_order() {
        let configs = vec![yaml("a: 1\nb: 2"), yaml("b: 3\nc: 4"), yaml("c: 5")];

        let result = merge_configs(&configs);

        assert_eq!(result["a"], 1);
        assert_eq!(result["b"], 3);
        assert_eq!(result["c"], 5);
    }

    #[test]
    fn empty_document_changes_nothing() {
        let configs = vec![yaml("settings:\n  strict: true"), yaml("")];

        let result = merge_configs(&configs);

        assert_eq!(result["settings"]["strict"], true);
    }

    #[test]
    fn merge_nothing_is_empty_mapping() {
        let result = merge_configs(&[]);
        assert!(result.as_mapping().unwrap().is_empty());
    }
}
