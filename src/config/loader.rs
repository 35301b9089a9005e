//! Configuration file discovery and loading.

use crate::config::merger::merge_configs;
use crate::config::schema::LayercheckConfig;
use crate::error::{LayercheckError, Result};
use crate::layer::PROJECT_DIR;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE: &str = "config.yml";
const LOCAL_CONFIG_FILE: &str = "config.local.yml";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.layercheck/config.yml`)
/// 2. Project config (`.layercheck/config.yml`)
/// 3. Local overrides (`.layercheck/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User's global config
    pub user_global: Option<PathBuf>,

    /// Project config
    pub project: Option<PathBuf>,

    /// Local overrides, usually git-ignored
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: dirs::home_dir()
                .and_then(|home| existing(home.join(PROJECT_DIR).join(CONFIG_FILE))),
            project: existing(project_root.join(PROJECT_DIR).join(CONFIG_FILE)),
            project_local: existing(project_root.join(PROJECT_DIR).join(LOCAL_CONFIG_FILE)),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for a `.layercheck` directory first, then falls back to `.git`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(PROJECT_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LayercheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LayercheckError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| LayercheckError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file without merging.
pub fn load_config_file(path: &Path) -> Result<LayercheckConfig> {
    let value = load_config_value(path)?;
    parse_config_value(value, path)
}

/// Load and merge every config file that applies to a project.
///
/// Unlike a snapshot, configuration is optional: with no files present the
/// defaults are returned.
pub fn load_merged_config(project_root: &Path) -> Result<LayercheckConfig> {
    let paths = ConfigPaths::discover(project_root);

    let mut configs = Vec::new();
    for path in paths.all_existing() {
        debug!("Loading config from {}", path.display());
        configs.push(load_config_value(path)?);
    }

    let merged = merge_configs(&configs);
    parse_config_value(
        merged,
        &project_root.join(PROJECT_DIR).join(CONFIG_FILE),
    )
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<LayercheckConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}

fn parse_config_value(value: serde_yaml::Value, source_path: &Path) -> Result<LayercheckConfig> {
    if value.is_null() {
        return Ok(LayercheckConfig::default());
    }

    serde_yaml::from_value(value).map_err(|e| LayercheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
