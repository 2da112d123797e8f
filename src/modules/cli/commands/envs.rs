//! Envs command implementation

use clap::Args;
use dbmigrate_core::DbConfError;
use dbmigrate_parser::{ConfigDocument, ResolveOptions};

/// Envs command arguments
#[derive(Args, Debug)]
pub struct EnvsCommand {}

impl EnvsCommand {
    /// Execute the envs command
    pub fn execute(&self, options: &ResolveOptions) -> Result<(), DbConfError> {
        let document = ConfigDocument::load(&options.base_dir)?;
        for line in Self::listing(&document, &options.env) {
            println!("{}", line);
        }

        Ok(())
    }

    /// One line per environment, marking the selected one
    fn listing(document: &ConfigDocument, selected: &str) -> Vec<String> {
        document
            .environments()
            .into_iter()
            .map(|env| {
                let marker = if env == selected { '*' } else { ' ' };
                format!("{} {}", marker, env)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_marks_selected() {
        let document = ConfigDocument::parse(
            "development:\n  driver: postgres\n  open: x\nproduction:\n  driver: postgres\n  open: y\n",
            "db/dbconf.yml",
        )
        .unwrap();

        let lines = EnvsCommand::listing(&document, "production");
        assert_eq!(lines, vec!["  development", "* production"]);
    }
}
