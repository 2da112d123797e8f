//! Resolved database configuration

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::driver::DriverDescriptor;
use crate::error::DbConfError;

/// Name of the directory holding migration files, relative to the base directory
pub const MIGRATIONS_DIR: &str = "migrations";

/// Database configuration resolved for one environment
///
/// A `DbConf` always holds a valid [`DriverDescriptor`]: [`DbConf::new`] is the
/// only constructor and it rejects descriptors for unknown drivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DbConf {
    /// Directory containing migration files (`<base_dir>/migrations`)
    migrations_dir: PathBuf,

    /// Environment this configuration was resolved for
    env: String,

    driver: DriverDescriptor,
}

impl DbConf {
    /// Build a configuration, validating the driver descriptor
    pub fn new(
        base_dir: impl AsRef<Path>,
        env: impl Into<String>,
        driver: DriverDescriptor,
    ) -> Result<Self, DbConfError> {
        if !driver.is_valid() {
            return Err(DbConfError::InvalidDriver(driver));
        }

        Ok(Self {
            migrations_dir: base_dir.as_ref().join(MIGRATIONS_DIR),
            env: env.into(),
            driver,
        })
    }

    pub fn migrations_dir(&self) -> &Path {
        &self.migrations_dir
    }

    pub fn env(&self) -> &str {
        &self.env
    }

    pub fn driver(&self) -> &DriverDescriptor {
        &self.driver
    }

    /// Consume the configuration, keeping only the driver descriptor
    pub fn into_driver(self) -> DriverDescriptor {
        self.driver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dbconf_new() {
        let driver = DriverDescriptor::new("postgres", "dbname='app'");
        let conf = DbConf::new("db", "development", driver.clone()).unwrap();
        assert_eq!(conf.migrations_dir(), Path::new("db/migrations"));
        assert_eq!(conf.env(), "development");
        assert_eq!(conf.driver(), &driver);
    }

    #[test]
    fn test_dbconf_rejects_unknown_driver() {
        let driver = DriverDescriptor::new("sqlite-unsupported", "file.db");
        match DbConf::new("db", "development", driver) {
            Err(DbConfError::InvalidDriver(d)) => {
                assert_eq!(d.name(), "sqlite-unsupported");
                assert_eq!(d.connection_string(), "file.db");
            }
            other => panic!("expected InvalidDriver, got {:?}", other),
        }
    }

    #[test]
    fn test_dbconf_serde() {
        let driver = DriverDescriptor::new("postgres", "dbname='app'");
        let conf = DbConf::new("db", "production", driver).unwrap();
        let json = serde_json::to_value(&conf).unwrap();
        assert_eq!(json["migrations_dir"], "db/migrations");
        assert_eq!(json["env"], "production");
        assert_eq!(json["driver"]["name"], "postgres");
        assert_eq!(json["driver"]["import_path"], "sqlx::postgres");
    }
}
