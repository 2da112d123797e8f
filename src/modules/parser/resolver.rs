//! Connection resolution
//!
//! Turns `(base_dir, env)` into a validated [`DbConf`]:
//!
//! 1. load `<base_dir>/dbconf.yml`
//! 2. read `<env>.driver` and `<env>.open`
//! 3. expand environment variables in `open`
//! 4. for PostgreSQL, rewrite URL-style `open` strings into the native form
//! 5. build the driver descriptor and validate it

use dbmigrate_core::{DbConf, DbConfError, DriverDescriptor};
use dbmigrate_types::Driver;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::document::ConfigDocument;
use crate::env::{expand_env, referenced_vars};
use crate::pgurl::parse_url;

/// Base directory used when none is given
pub const DEFAULT_BASE_DIR: &str = "db";

/// Environment used when none is given
pub const DEFAULT_ENV: &str = "development";

/// Where to find `dbconf.yml` and which environment to resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    pub base_dir: PathBuf,
    pub env: String,
}

impl ResolveOptions {
    pub fn new(base_dir: impl Into<PathBuf>, env: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            env: env.into(),
        }
    }

    /// Resolve the configuration described by these options
    pub fn resolve(&self) -> Result<DbConf, DbConfError> {
        resolve(&self.base_dir, &self.env)
    }
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR, DEFAULT_ENV)
    }
}

/// Resolve the database configuration for `env` from `<base_dir>/dbconf.yml`
pub fn resolve(base_dir: impl AsRef<Path>, env: &str) -> Result<DbConf, DbConfError> {
    let base_dir = base_dir.as_ref();
    let document = ConfigDocument::load(base_dir)?;
    resolve_document(&document, base_dir, env)
}

/// Resolve the configuration for `env` from an already loaded document
pub fn resolve_document(
    document: &ConfigDocument,
    base_dir: impl AsRef<Path>,
    env: &str,
) -> Result<DbConf, DbConfError> {
    let driver_name = document.get(&format!("{}.driver", env))?;
    let open = document.get(&format!("{}.open", env))?;
    debug!(env, driver = %driver_name, "Resolving database configuration");

    for var in referenced_vars(&open) {
        if std::env::var_os(&var).is_none() {
            debug!(var = %var, "Connection string references an unset variable");
        }
    }
    let open = normalize(&driver_name, expand_env(&open));

    let descriptor = DriverDescriptor::new(driver_name, open);
    DbConf::new(base_dir, env, descriptor)
}

/// Apply driver-specific rewriting of the connection string.
///
/// Only PostgreSQL URLs are rewritten. Anything that does not parse as a URL,
/// or parses to nothing, is returned unchanged.
fn normalize(driver_name: &str, open: String) -> String {
    if Driver::from_name(driver_name) != Driver::Postgres {
        return open;
    }

    match parse_url(&open) {
        Ok(native) if !native.is_empty() => {
            debug!("Converted PostgreSQL URL to native connection string");
            native
        }
        Ok(_) => open,
        Err(e) => {
            debug!("Using connection string as written: {}", e);
            open
        }
    }
}
