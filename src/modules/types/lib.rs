//! Type definitions for dbmigrate
//!
//! This crate contains shared type definitions used across the dbmigrate codebase,
//! most importantly the table of database drivers the tool knows how to load.

pub mod driver;

pub use driver::Driver;
