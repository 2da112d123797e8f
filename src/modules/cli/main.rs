//! dbmigrate CLI
//!
//! Command-line interface for resolving environment-scoped database configuration.

use clap::Parser;
use dbmigrate_cli::{Cli, Commands};
use dbmigrate_core::DbConfError;
use std::path::Path;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if e.is_document_error() {
            eprintln!("Hint: run `dbmigrate init` to create a configuration");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), DbConfError> {
    // Initialize logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Variables referenced from `open` may live in .env
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from: {}", path.display());
    }

    let options = cli.resolve_options();

    // Execute command
    match cli.command {
        Commands::Show(cmd) => cmd.execute(&options)?,
        Commands::Envs(cmd) => cmd.execute(&options)?,
        Commands::Init(cmd) => cmd.execute(Path::new(&cli.path))?,
        Commands::Completion(cmd) => cmd.execute(),
    }

    Ok(())
}
