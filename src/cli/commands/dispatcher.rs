//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ScanArgs};
use crate::config::{load_config, validate, LayercheckConfig};
use crate::error::{LayercheckError, Result};
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Load and validate configuration, reporting problems through the UI.
///
/// Returns `Ok(None)` after reporting a parse or validation error, so the
/// caller can exit with code 1.
pub(crate) fn load_checked_config(
    project_root: &Path,
    config_override: Option<&Path>,
    ui: &mut dyn UserInterface,
) -> Result<Option<LayercheckConfig>> {
    let config = match load_config(project_root, config_override) {
        Ok(c) => c,
        Err(LayercheckError::ConfigParseError { path, message }) => {
            ui.error(&format!("Parse error in {}: {}", path.display(), message));
            return Ok(None);
        }
        Err(LayercheckError::ConfigNotFound { path }) => {
            ui.error(&format!("Configuration not found: {}", path.display()));
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    if let Err(e) = validate(&config) {
        ui.error(&e.to_string());
        return Ok(None);
    }

    Ok(Some(config))
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_override: None,
        }
    }

    /// Load configuration from a single file instead of merging.
    pub fn with_config_override(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.config_override.as_deref();
        match &cli.command {
            Some(Commands::Scan(args)) => {
                super::scan::ScanCommand::new(&self.project_root, config, args.clone()).execute(ui)
            }
            Some(Commands::Check(args)) => {
                super::check::CheckCommand::new(&self.project_root, config, args.clone())
                    .execute(ui)
            }
            Some(Commands::Schema) => super::schema::SchemaCommand::new().execute(ui),
            Some(Commands::Config(args)) => {
                super::config::ConfigCommand::new(&self.project_root, config, args.clone())
                    .execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::scan::ScanCommand::new(&self.project_root, config, ScanArgs::default())
                .execute(ui),
        }
    }
}
