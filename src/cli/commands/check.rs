//! Check command implementation.
//!
//! The `layercheck check` command classifies one layer described by flags,
//! which lets a host plugin ask about a layer without exporting a snapshot.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::error::{LayercheckError, Result};
use crate::layer::{Layer, LayerKind};
use crate::scanner::ProjectScanner;
use crate::ui::UserInterface;

use super::dispatcher::{load_checked_config, Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: CheckArgs,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    label: String,
    kind: &'a LayerKind,
    compatible: bool,
    #[serde(skip_serializing_if = "str::is_empty")]
    reason: &'a str,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// The layer described by the arguments.
    pub fn layer(&self) -> Layer {
        Layer {
            name: Some(self.args.name.clone()),
            kind: LayerKind::parse(&self.args.kind),
            provider: self.args.provider.clone(),
            source: self.args.source.clone(),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) =
            load_checked_config(&self.project_root, self.config_override.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(1));
        };

        let layer = self.layer();
        let verdict = ProjectScanner::new(config.settings.rules()).check_layer(&layer);

        if self.args.json {
            let output = CheckOutput {
                label: layer.label(),
                kind: &layer.kind,
                compatible: verdict.compatible,
                reason: &verdict.reason,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| LayercheckError::Other(e.into()))?;
            ui.message(&json);
        } else if verdict.compatible {
            ui.success(&format!("{} is compatible", layer.label()));
        } else {
            ui.warning(&format!(
                "{} is incompatible: {}",
                layer.label(),
                verdict.reason
            ));
        }

        if verdict.compatible {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
