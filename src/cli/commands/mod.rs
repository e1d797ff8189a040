//! CLI command implementations.

pub mod check;
pub mod render;
pub mod show;

use anyhow::{Context, Result};

use crate::cli::types::EvalArgs;
use crate::infrastructure::env::{resolver, EnvLoader};
use crate::infrastructure::manifest::{ManifestAssembler, ResolvedBuildConfig};
use crate::infrastructure::profile::ProfileLoader;

/// Resolve the build configuration for the given arguments.
///
/// This is the pipeline every command runs: load the profile, resolve the
/// environment file path, load the store, assemble the configuration.
pub(crate) fn evaluate(args: &EvalArgs) -> Result<ResolvedBuildConfig> {
    let profile =
        ProfileLoader::load(&args.project_root).context("Failed to load build profile")?;

    let env_path = args
        .env_file
        .clone()
        .unwrap_or_else(|| resolver::resolve(&args.project_root, &profile.env));

    let store = EnvLoader::load(&env_path)?;
    let config = ManifestAssembler::assemble(&store, &profile)?;

    Ok(config)
}
