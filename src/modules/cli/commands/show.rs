//! Show command implementation

use clap::{Args, ValueEnum};
use dbmigrate_core::{DbConf, DbConfError};
use dbmigrate_parser::ResolveOptions;
use tracing::info;

/// Output format for the resolved configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Show command arguments
#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ShowCommand {
    /// Execute the show command
    pub fn execute(&self, options: &ResolveOptions) -> Result<(), DbConfError> {
        info!(
            "Resolving '{}' from: {}",
            options.env,
            options.base_dir.display()
        );

        let conf = options.resolve()?;
        println!("{}", self.render(&conf)?);

        Ok(())
    }

    /// Render a resolved configuration in the selected format
    pub fn render(&self, conf: &DbConf) -> Result<String, DbConfError> {
        let rendered = match self.format {
            OutputFormat::Text => format!(
                "environment:    {}\nmigrations:     {}\ndriver:         {}\nimport:         {}\nconnection:     {}",
                conf.env(),
                conf.migrations_dir().display(),
                conf.driver().name(),
                conf.driver().import_path(),
                conf.driver().connection_string(),
            ),
            OutputFormat::Json => serde_json::to_string_pretty(conf)?,
            OutputFormat::Yaml => serde_yaml::to_string(conf)?.trim_end().to_string(),
        };

        Ok(rendered)
    }
}
