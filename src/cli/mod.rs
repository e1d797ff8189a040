//! CLI layer
//!
//! Command definitions, output formatting, and the process error boundary.

pub mod commands;
pub mod output;
pub mod types;

// Re-export commonly used items
pub use types::{Cli, Commands};

/// Report a fatal error in the selected output mode and exit nonzero.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let payload = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );
    } else {
        eprintln!("error: {err:#}");
    }

    std::process::exit(1);
}
