//! Init command implementation

use clap::Args;
use dbmigrate_core::{DbConfError, DriverDescriptor, MIGRATIONS_DIR};
use dbmigrate_parser::ConfigDocument;
use dbmigrate_types::Driver;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// Init command arguments
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Database driver (postgres or mymysql)
    #[arg(short, long, default_value = "postgres")]
    pub driver: String,

    /// Overwrite an existing dbconf.yml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, base_dir: &Path) -> Result<(), DbConfError> {
        let driver = Driver::from_name(&self.driver);
        if driver == Driver::Unknown {
            return Err(DbConfError::InvalidDriver(DriverDescriptor::new(
                self.driver.as_str(),
                "",
            )));
        }

        let config_path = ConfigDocument::path_in(base_dir);
        if config_path.exists() && !self.force {
            return Err(DbConfError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!(
                    "{} already exists (use --force to overwrite)",
                    config_path.display()
                ),
            )));
        }

        fs::create_dir_all(base_dir.join(MIGRATIONS_DIR))?;
        fs::write(&config_path, Self::generate_config(driver))?;

        info!("Created: {}", config_path.display());

        println!("\nNext steps:");
        println!("  1. Edit {} for your databases", config_path.display());
        println!("  2. Export DATABASE_URL (or put it in .env) for production");
        println!("  3. Run: dbmigrate show --env development");

        Ok(())
    }

    /// Generate dbconf.yml content for a known driver
    fn generate_config(driver: Driver) -> String {
        let (development, test) = match driver {
            Driver::MyMysql => (
                "tcp:localhost:3306*app_development/root/",
                "tcp:localhost:3306*app_test/root/",
            ),
            _ => (
                "user=postgres dbname=app_development sslmode=disable",
                "user=postgres dbname=app_test sslmode=disable",
            ),
        };

        format!(
            r#"# dbmigrate database configuration
#
# Each section is an environment selected with `--env`.
# `open` may reference environment variables as $NAME or ${{NAME}}.

development:
  driver: {driver}
  open: {development}

test:
  driver: {driver}
  open: {test}

production:
  driver: {driver}
  open: $DATABASE_URL
"#,
            driver = driver,
            development = development,
            test = test,
        )
    }
}
