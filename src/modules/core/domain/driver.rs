//! Driver descriptor

use dbmigrate_types::Driver;
use serde::Serialize;
use std::fmt;

/// Everything the migration runner needs to open a database handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverDescriptor {
    /// Driver name as written in `dbconf.yml`
    name: String,

    /// Driver-native connection string (expanded and normalized)
    connection_string: String,

    /// Driver implementation to load; empty when the driver is unknown
    import_path: String,
}

impl DriverDescriptor {
    /// Create a descriptor, filling the import path from the known driver table
    pub fn new(name: impl Into<String>, connection_string: impl Into<String>) -> Self {
        let name = name.into();
        let import_path = Driver::from_name(&name).import_path().to_string();
        Self {
            name,
            connection_string: connection_string.into(),
            import_path,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    pub fn import_path(&self) -> &str {
        &self.import_path
    }

    /// The driver family this descriptor refers to
    pub fn driver(&self) -> Driver {
        Driver::from_name(&self.name)
    }

    /// A descriptor is usable only if its driver implementation is known
    pub fn is_valid(&self) -> bool {
        !self.import_path.is_empty()
    }
}

// The connection string is left out: it usually carries credentials.
impl fmt::Display for DriverDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "driver '{}' (import '{}')", self.name, self.import_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_known_driver() {
        let d = DriverDescriptor::new("postgres", "dbname='app'");
        assert_eq!(d.name(), "postgres");
        assert_eq!(d.connection_string(), "dbname='app'");
        assert_eq!(d.import_path(), "sqlx::postgres");
        assert_eq!(d.driver(), Driver::Postgres);
        assert!(d.is_valid());

        let d = DriverDescriptor::new("mymysql", "tcp:localhost:3306*app/user/pass");
        assert_eq!(d.import_path(), "sqlx::mysql");
        assert!(d.is_valid());
    }

    #[test]
    fn test_descriptor_unknown_driver() {
        let d = DriverDescriptor::new("sqlite-unsupported", "file.db");
        assert_eq!(d.import_path(), "");
        assert_eq!(d.driver(), Driver::Unknown);
        assert!(!d.is_valid());
    }

    #[test]
    fn test_descriptor_display_hides_connection_string() {
        let d = DriverDescriptor::new("postgres", "password='secret'");
        let shown = d.to_string();
        assert!(shown.contains("postgres"));
        assert!(!shown.contains("secret"));
    }
}
