//! Implementation of the `envforge show` command.

use anyhow::Result;
use clap::Args;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::cli::types::EvalArgs;
use crate::infrastructure::manifest::ResolvedBuildConfig;

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub eval: EvalArgs,
}

#[derive(Debug, serde::Serialize)]
pub struct ShowOutput {
    #[serde(flatten)]
    pub config: ResolvedBuildConfig,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let formatter = TableFormatter::new();
        format!(
            "Build configuration\n{}\nManifest placeholders\n{}",
            formatter.format_config(&self.config),
            formatter.format_placeholders(&self.config.placeholders)
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: ShowArgs, json_mode: bool) -> Result<()> {
    let config = super::evaluate(&args.eval)?;

    output(&ShowOutput { config }, json_mode);
    Ok(())
}
