//! Core domain logic for dbmigrate
//!
//! This crate contains the resolved configuration types handed to the migration
//! runner, and the error type shared by every dbmigrate crate.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::DbConfError;
