//! Table output formatting for CLI commands
//!
//! Formatted table output for resolved build configurations using
//! comfy-table. Secret values are masked before they reach a table.

use std::env;

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};

use crate::domain::models::ManifestPlaceholders;
use crate::infrastructure::logging::SecretRedactor;
use crate::infrastructure::manifest::ResolvedBuildConfig;

use super::truncate;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<usize>,
    redactor: SecretRedactor,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
            redactor: SecretRedactor::new(),
        }
    }

    /// Create a new table formatter with custom settings
    pub fn with_config(use_colors: bool, max_width: Option<usize>) -> Self {
        Self {
            use_colors,
            max_width,
            redactor: SecretRedactor::new(),
        }
    }

    /// Format a resolved build configuration as a settings table
    pub fn format_config(&self, config: &ResolvedBuildConfig) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Setting").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        let id_cell = if self.use_colors {
            Cell::new(config.application_id.as_str()).fg(Color::Cyan)
        } else {
            Cell::new(config.application_id.as_str())
        };
        table.add_row(vec![Cell::new("Application ID"), id_cell]);
        table.add_row(vec!["Namespace", config.namespace.as_str()]);

        let android = &config.android;
        table.add_row(vec![
            "Version".to_string(),
            format!("{} ({})", android.version_name, android.version_code),
        ]);
        table.add_row(vec!["Compile SDK".to_string(), android.compile_sdk.to_string()]);
        table.add_row(vec!["Min SDK".to_string(), android.min_sdk.to_string()]);
        table.add_row(vec!["Target SDK".to_string(), android.target_sdk.to_string()]);
        table.add_row(vec!["NDK", android.ndk_version.as_str()]);
        table.add_row(vec!["JVM Target".to_string(), android.jvm_target.to_string()]);

        let build_types = android
            .build_types
            .iter()
            .map(|(name, build_type)| format!("{name} ({})", build_type.signing_config))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec!["Build Types (signing)".to_string(), build_types]);

        table.add_row(vec![
            "Environment file".to_string(),
            config.env_path.display().to_string(),
        ]);
        table.add_row(vec![
            "Resolved at".to_string(),
            config.resolved_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        ]);

        table.to_string()
    }

    /// Format manifest placeholders as a table, masking secret values
    pub fn format_placeholders(&self, placeholders: &ManifestPlaceholders) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Placeholder").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        for (name, value) in placeholders.iter() {
            let shown = self.redactor.display_value(name, value);
            let value_cell = if self.use_colors && self.redactor.is_sensitive(name) {
                Cell::new(truncate(&shown, 60)).fg(Color::DarkGrey)
            } else {
                Cell::new(truncate(&shown, 60))
            };

            table.add_row(vec![Cell::new(name), value_cell]);
        }

        table.to_string()
    }

    /// Create a base table with common settings
    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        // Use UTF-8 preset for nice borders
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width as u16);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}
