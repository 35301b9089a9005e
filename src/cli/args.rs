//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::report::ReportFormat;

/// layercheck - Check which map layers a web-mapping renderer can display.
#[derive(Debug, Parser)]
#[command(name = "layercheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .layercheck/config.yml merging)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify every layer in the project snapshot (default)
    Scan(ScanArgs),

    /// Classify a single layer described on the command line
    Check(CheckArgs),

    /// Print the JSON Schema of the snapshot file format
    Schema,

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ScanArgs {
    /// Snapshot file to scan (default: .layercheck/layers.yml)
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Output format (default: settings.default_format)
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Exit with an error when any layer is incompatible
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Layer name used in the output
    #[arg(long, default_value = "layer")]
    pub name: String,

    /// Layer kind (vector, raster, mesh, ...)
    #[arg(long)]
    pub kind: String,

    /// Data-access provider
    #[arg(long)]
    pub provider: Option<String>,

    /// Data-source locator
    #[arg(long)]
    pub source: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
