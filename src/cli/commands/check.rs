//! Implementation of the `envforge check` command.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::EvalArgs;

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub eval: EvalArgs,
}

#[derive(Debug, serde::Serialize)]
pub struct CheckOutput {
    pub success: bool,
    pub message: String,
    pub env_path: PathBuf,
    pub application_id: String,
    pub placeholders: Vec<String>,
    pub resolved_at: DateTime<Utc>,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!("✓ {}", self.message)];
        lines.push(format!("  Application ID: {}", self.application_id));
        lines.push(format!("  Environment file: {}", self.env_path.display()));
        lines.push(format!(
            "  Placeholders: {}",
            self.placeholders.join(", ")
        ));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: CheckArgs, json_mode: bool) -> Result<()> {
    let config = super::evaluate(&args.eval)?;

    let output_data = CheckOutput {
        success: true,
        message: "Build configuration resolved.".to_string(),
        env_path: config.env_path,
        application_id: config.application_id.to_string(),
        placeholders: config.placeholders.names().map(String::from).collect(),
        resolved_at: config.resolved_at,
    };

    output(&output_data, json_mode);
    Ok(())
}
