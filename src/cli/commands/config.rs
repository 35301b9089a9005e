//! Config command implementation.
//!
//! The `layercheck config` command shows resolved configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::ConfigPaths;
use crate::error::{LayercheckError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{load_checked_config, Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) =
            load_checked_config(&self.project_root, self.config_override.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(1));
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| LayercheckError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        // YAML output lists its sources as comments.
        match &self.config_override {
            Some(path) => ui.message(&format!("# {}", path.display())),
            None => {
                let paths = ConfigPaths::discover(&self.project_root);
                let existing = paths.all_existing();
                if existing.is_empty() {
                    ui.message("# defaults");
                }
                for path in existing {
                    ui.message(&format!("# {}", path.display()));
                }
            }
        }

        let yaml = serde_yaml::to_string(&config).map_err(|e| LayercheckError::Other(e.into()))?;
        ui.message(yaml.trim_end());

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::PROJECT_DIR;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(PROJECT_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    #[test]
    fn shows_merged_yaml_with_sources() {
        let temp = setup_project("settings:\n  native_provider: tilehub");
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let out = ui.stdout();
        assert!(out.contains("config.yml"));
        assert!(out.contains("native_provider: tilehub"));
    }

    #[test]
    fn shows_json() {
        let temp = setup_project("settings:\n  default_format: json");
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&ui.stdout()).unwrap();
        assert_eq!(parsed["settings"]["default_format"], "json");
        assert_eq!(parsed["settings"]["native_provider"], "qgishub");
    }

    #[test]
    fn defaults_without_config() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.stdout().contains("native_provider: qgishub"));
    }

    #[test]
    fn parse_error_fails() {
        let temp = setup_project("settings: [");
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.errors()[0].contains("Parse error"));
    }
}
