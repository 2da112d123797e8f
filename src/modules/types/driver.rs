//! Database driver type definitions

use std::fmt;

/// Database driver families known to dbmigrate
///
/// Any driver name that is not recognised maps to [`Driver::Unknown`], so
/// converting a name into a `Driver` never fails. Whether the driver is usable
/// is decided by [`Driver::import_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Driver {
    /// PostgreSQL
    Postgres,
    /// MySQL through the mymysql protocol implementation
    MyMysql,
    /// Anything else
    Unknown,
}

impl Driver {
    /// Resolve a driver from the name used in `dbconf.yml`.
    ///
    /// Matching is exact: `Postgres` is not `postgres`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "postgres" => Driver::Postgres,
            "mymysql" => Driver::MyMysql,
            _ => Driver::Unknown,
        }
    }

    /// Canonical name of the driver as written in `dbconf.yml`
    pub fn name(&self) -> &'static str {
        match self {
            Driver::Postgres => "postgres",
            Driver::MyMysql => "mymysql",
            Driver::Unknown => "unknown",
        }
    }

    /// Identifier of the driver implementation to load.
    ///
    /// Empty for [`Driver::Unknown`].
    pub fn import_path(&self) -> &'static str {
        match self {
            Driver::Postgres => "sqlx::postgres",
            Driver::MyMysql => "sqlx::mysql",
            Driver::Unknown => "",
        }
    }

    /// Returns all known driver families
    pub fn known() -> &'static [Driver] {
        &[Driver::Postgres, Driver::MyMysql]
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_from_name() {
        assert_eq!(Driver::from_name("postgres"), Driver::Postgres);
        assert_eq!(Driver::from_name("mymysql"), Driver::MyMysql);
        assert_eq!(Driver::from_name("sqlite-unsupported"), Driver::Unknown);
        assert_eq!(Driver::from_name("Postgres"), Driver::Unknown);
        assert_eq!(Driver::from_name(""), Driver::Unknown);
    }

    #[test]
    fn test_driver_import_path() {
        assert_eq!(Driver::Postgres.import_path(), "sqlx::postgres");
        assert_eq!(Driver::MyMysql.import_path(), "sqlx::mysql");
        assert!(Driver::Unknown.import_path().is_empty());

        for driver in Driver::known() {
            assert!(!driver.import_path().is_empty());
        }
    }

    #[test]
    fn test_driver_name_round_trip() {
        for driver in Driver::known() {
            assert_eq!(Driver::from_name(driver.name()), *driver);
        }
        assert_eq!(Driver::MyMysql.to_string(), "mymysql");
    }
}
