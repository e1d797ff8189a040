//! Envforge CLI entry point.

use clap::Parser;

use envforge::cli::{Cli, Commands};
use envforge::infrastructure::logging::{self, LogFormat};

fn main() {
    let cli = Cli::parse();

    let format = if cli.json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    logging::init(format);

    let result = match cli.command {
        Commands::Check(args) => envforge::cli::commands::check::execute(args, cli.json),
        Commands::Show(args) => envforge::cli::commands::show::execute(args, cli.json),
        Commands::Render(args) => envforge::cli::commands::render::execute(args, cli.json),
    };

    if let Err(err) = result {
        envforge::cli::handle_error(&err, cli.json);
    }
}
