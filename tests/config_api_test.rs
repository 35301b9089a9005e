//! Integration tests for config module public API.

use layercheck::config::{load_config, load_merged_config, validate, LayercheckConfig};
use layercheck::report::ReportFormat;
use layercheck::LayercheckError;
use std::fs;
use tempfile::TempDir;

fn project_with(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".layercheck");
    fs::create_dir_all(&dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
    temp
}

#[test]
fn public_api_is_accessible() {
    let config = LayercheckConfig::default();
    assert_eq!(config.settings.native_provider, "qgishub");
    assert_eq!(config.settings.default_format, ReportFormat::Human);
    assert!(!config.settings.strict);
}

#[test]
fn local_config_overrides_project_config() {
    let temp = project_with(&[
        (
            "config.yml",
            "settings:\n  native_provider: tilehub\n  default_format: json\n",
        ),
        ("config.local.yml", "settings:\n  strict: true\n"),
    ]);

    let config = load_merged_config(temp.path()).unwrap();
    validate(&config).unwrap();

    assert_eq!(config.settings.native_provider, "tilehub");
    assert_eq!(config.settings.default_format, ReportFormat::Json);
    assert!(config.settings.strict);
}

#[test]
fn explicit_config_skips_merging() {
    let temp = project_with(&[("config.yml", "settings:\n  strict: true\n")]);
    let path = temp.path().join("other.yml");
    fs::write(&path, "settings:\n  native_provider: tilehub\n").unwrap();

    let config = load_config(temp.path(), Some(path.as_path())).unwrap();

    assert_eq!(config.settings.native_provider, "tilehub");
    assert!(!config.settings.strict);
}

#[test]
fn missing_explicit_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.yml");

    let result = load_config(temp.path(), Some(path.as_path()));
    assert!(matches!(result, Err(LayercheckError::ConfigNotFound { .. })));
}

#[test]
fn empty_native_provider_fails_validation() {
    let temp = project_with(&[("config.yml", "settings:\n  native_provider: \"\"\n")]);

    let config = load_merged_config(temp.path()).unwrap();
    let err = validate(&config).unwrap_err();

    assert!(matches!(err, LayercheckError::ConfigValidationError { .. }));
}

#[test]
fn unknown_format_is_a_parse_error() {
    let temp = project_with(&[("config.yml", "settings:\n  default_format: sarif\n")]);

    let result = load_merged_config(temp.path());
    assert!(matches!(
        result,
        Err(LayercheckError::ConfigParseError { .. })
    ));
}
