//! Schema command implementation.
//!
//! The `layercheck schema` command prints the snapshot file JSON Schema.

use crate::error::{LayercheckError, Result};
use crate::schema::SchemaGenerator;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = SchemaGenerator::new().generate();
        let json =
            serde_json::to_string_pretty(&schema).map_err(|e| LayercheckError::Other(e.into()))?;
        ui.message(&json);
        Ok(CommandResult::success())
    }
}
