//! Error types for dbmigrate

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DriverDescriptor;

/// Main error type for dbmigrate operations
#[derive(Error, Debug)]
pub enum DbConfError {
    /// `dbconf.yml` does not exist at the expected location
    #[error("Configuration file not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    /// `dbconf.yml` exists but is not valid YAML
    #[error("Failed to parse '{}': {message}", .path.display())]
    DocumentParse { path: PathBuf, message: String },

    /// Environment section or field is absent
    #[error("Missing configuration field: {0}")]
    MissingField(String),

    /// Field exists but is not a scalar value
    #[error("Configuration field '{key}' must be a scalar, found {found}")]
    FieldType { key: String, found: &'static str },

    /// Driver name does not map to a known driver implementation
    #[error("Invalid driver configuration: {0}")]
    InvalidDriver(DriverDescriptor),

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl DbConfError {
    /// Returns true if the configuration document itself is missing or unreadable
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            DbConfError::DocumentNotFound(_) | DbConfError::DocumentParse { .. }
        )
    }

    /// Short, stable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            DbConfError::DocumentNotFound(_) => "document_not_found",
            DbConfError::DocumentParse { .. } => "document_parse",
            DbConfError::MissingField(_) => "missing_field",
            DbConfError::FieldType { .. } => "field_type",
            DbConfError::InvalidDriver(_) => "invalid_driver",
            DbConfError::Io(_) => "io",
            DbConfError::Json(_) => "json",
            DbConfError::Yaml(_) => "yaml",
        }
    }
}

/// Result type alias using DbConfError
pub type Result<T> = std::result::Result<T, DbConfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            DbConfError::MissingField("staging.driver".into()).kind(),
            "missing_field"
        );
        let invalid = DbConfError::InvalidDriver(DriverDescriptor::new("sqlite", "x.db"));
        assert_eq!(invalid.kind(), "invalid_driver");
    }

    #[test]
    fn test_error_is_document_error() {
        assert!(DbConfError::DocumentNotFound("db/dbconf.yml".into()).is_document_error());
        assert!(DbConfError::DocumentParse {
            path: "db/dbconf.yml".into(),
            message: "bad".into(),
        }
        .is_document_error());
        assert!(!DbConfError::MissingField("dev.open".into()).is_document_error());
    }

    #[test]
    fn test_invalid_driver_message_hides_connection_string() {
        let err = DbConfError::InvalidDriver(DriverDescriptor::new(
            "sqlite-unsupported",
            "password=hunter2",
        ));
        let msg = err.to_string();
        assert!(msg.contains("sqlite-unsupported"));
        assert!(!msg.contains("hunter2"));
    }
}
