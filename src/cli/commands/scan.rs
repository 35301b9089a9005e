//! Scan command implementation.
//!
//! The `layercheck scan` command classifies every layer of a project
//! snapshot and prints the report.

use std::path::{Path, PathBuf};

use crate::cli::args::ScanArgs;
use crate::error::Result;
use crate::layer::{ProjectSource, SnapshotFile};
use crate::report::{render, ReportFormat};
use crate::scanner::{ClassificationReport, ProjectScanner};
use crate::ui::{should_use_colors, UserInterface};

use super::dispatcher::{load_checked_config, Command, CommandResult};

/// The scan command implementation.
pub struct ScanCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ScanArgs,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: ScanArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    fn snapshot(&self) -> Option<SnapshotFile> {
        match &self.args.snapshot {
            Some(path) if path.is_relative() => Some(SnapshotFile::new(self.project_root.join(path))),
            Some(path) => Some(SnapshotFile::new(path)),
            None => SnapshotFile::discover(&self.project_root),
        }
    }
}

impl Command for ScanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) =
            load_checked_config(&self.project_root, self.config_override.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(1));
        };

        let source = match self.snapshot() {
            Some(source) if source.path().is_file() => source,
            Some(source) => {
                ui.error(&format!(
                    "Layer snapshot not found: {}",
                    source.path().display()
                ));
                return Ok(CommandResult::failure(2));
            }
            None => {
                ui.error(&format!(
                    "No layer snapshot found. Export one to {} or pass --snapshot.",
                    SnapshotFile::default_path(&self.project_root).display()
                ));
                return Ok(CommandResult::failure(2));
            }
        };

        let format = self.args.format.unwrap_or(config.settings.default_format);
        let strict = self.args.strict || config.settings.strict;
        let scanner = ProjectScanner::new(config.settings.rules());

        // The snapshot exists, so failing to read it is worth telling the user.
        let report = match source.layers() {
            Ok(layers) => scanner.analyze(&layers),
            Err(e) => {
                ui.warning(&e.to_string());
                if strict {
                    ui.error("Snapshot could not be read in strict mode");
                    return Ok(CommandResult::failure(1));
                }
                ClassificationReport::new()
            }
        };

        match format {
            ReportFormat::Json => {
                ui.message(render(&report, format, false).trim_end());
            }
            ReportFormat::Human => {
                ui.show_header(&format!("Layer compatibility · {}", source.describe()));
                if ui.output_mode().shows_details() {
                    ui.message(&format!(
                        "Native vector provider: {}",
                        scanner.rules().native_provider
                    ));
                    ui.message(&format!("Strict: {}", strict));
                    ui.message("");
                }
                let use_color = ui.is_interactive() && should_use_colors();
                for line in render(&report, format, use_color).lines() {
                    ui.message(line);
                }
            }
        }

        if strict && !report.is_fully_compatible() {
            if format == ReportFormat::Human {
                ui.error(&format!(
                    "{} incompatible layer(s) in strict mode",
                    report.incompatible.len()
                ));
            }
            return Ok(CommandResult::failure(1));
        }

        Ok(CommandResult::success())
    }
}
