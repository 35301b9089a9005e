//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use layercheck::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".layercheck");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "settings:\n  native_provider: tilehub").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.settings.native_provider, "tilehub");
//! ```
//!
//! # Configuration File Locations
//!
//! Every file is optional. They are merged in this order:
//! 1. User global config (`~/.layercheck/config.yml`)
//! 2. Project config (`.layercheck/config.yml`)
//! 3. Local overrides (`.layercheck/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    ConfigPaths,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{LayercheckConfig, Settings};
pub use validator::{validate, validate_config, ValidationError};
