//! Command-line interface for layercheck.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, ConfigArgs, ScanArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
