//! CLI commands

mod completion;
mod envs;
mod init;
mod show;

pub use completion::CompletionCommand;
pub use envs::EnvsCommand;
pub use init::InitCommand;
pub use show::{OutputFormat, ShowCommand};

use clap::{Parser, Subcommand};
use dbmigrate_parser::{ResolveOptions, DEFAULT_BASE_DIR, DEFAULT_ENV};

/// dbmigrate - environment-scoped database configuration for schema migrations
#[derive(Parser, Debug)]
#[command(name = "dbmigrate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder containing dbconf.yml and the migrations directory
    #[arg(short, long, global = true, default_value = DEFAULT_BASE_DIR)]
    pub path: String,

    /// Which database environment to use
    #[arg(short, long, global = true, default_value = DEFAULT_ENV)]
    pub env: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved database configuration
    Show(ShowCommand),

    /// List the environments defined in dbconf.yml
    Envs(EnvsCommand),

    /// Create dbconf.yml and the migrations directory
    Init(InitCommand),

    /// Generate shell completions
    #[command(hide = true)]
    Completion(CompletionCommand),
}

impl Cli {
    /// Resolution inputs taken from the global flags
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions::new(&self.path, &self.env)
    }
}
