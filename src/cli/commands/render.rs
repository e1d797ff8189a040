//! Implementation of the `envforge render` command.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::EvalArgs;
use crate::infrastructure::manifest::ManifestRenderer;

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub eval: EvalArgs,

    /// Manifest template to render
    pub template: PathBuf,

    /// Write the rendered manifest here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, serde::Serialize)]
pub struct RenderOutput {
    pub success: bool,
    pub message: String,
    pub template: PathBuf,
    pub output: Option<PathBuf>,
    /// Rendered content, present only when no output file was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered: Option<String>,
}

impl CommandOutput for RenderOutput {
    fn to_human(&self) -> String {
        // With no output file the rendered manifest is the output itself
        match &self.rendered {
            Some(rendered) => rendered.clone(),
            None => format!("✓ {}", self.message),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: RenderArgs, json_mode: bool) -> Result<()> {
    let config = super::evaluate(&args.eval)?;

    let renderer = ManifestRenderer::new();
    let rendered = renderer.render_file(&args.template, &config.placeholders)?;

    let output_data = if let Some(path) = args.output {
        fs::write(&path, &rendered)
            .with_context(|| format!("Failed to write rendered manifest to {}", path.display()))?;

        RenderOutput {
            success: true,
            message: format!("Rendered manifest written to {}", path.display()),
            template: args.template,
            output: Some(path),
            rendered: None,
        }
    } else {
        RenderOutput {
            success: true,
            message: "Manifest rendered.".to_string(),
            template: args.template,
            output: None,
            rendered: Some(rendered),
        }
    };

    output(&output_data, json_mode);
    Ok(())
}
