//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::cli::commands::check::CheckArgs;
use crate::cli::commands::render::RenderArgs;
use crate::cli::commands::show::ShowArgs;

#[derive(Parser)]
#[command(name = "envforge")]
#[command(about = "Envforge - Deterministic build configuration from environment files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the environment file resolves to a valid configuration
    Check(CheckArgs),

    /// Show the resolved build configuration
    Show(ShowArgs),

    /// Render a manifest template with resolved placeholders
    Render(RenderArgs),
}

/// Arguments shared by every command that resolves a configuration.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Project root the profile and environment file are resolved against
    #[arg(short, long, default_value = ".")]
    pub project_root: PathBuf,

    /// Explicit environment file path, overriding profile-based resolution
    #[arg(short, long)]
    pub env_file: Option<PathBuf>,
}
