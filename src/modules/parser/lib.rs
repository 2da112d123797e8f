//! Configuration parsing for dbmigrate
//!
//! This crate reads `dbconf.yml`, expands environment variables in connection
//! strings, normalizes PostgreSQL URLs and resolves a validated [`DbConf`] for
//! a named environment.

pub mod document;
pub mod env;
pub mod pgurl;
pub mod resolver;

pub use document::ConfigDocument;
pub use resolver::{resolve, resolve_document, ResolveOptions, DEFAULT_BASE_DIR, DEFAULT_ENV};

pub use dbmigrate_core::DbConf;
