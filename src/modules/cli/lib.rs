//! dbmigrate CLI
//!
//! This crate provides the command-line interface for dbmigrate including:
//! - show: Print the resolved database configuration
//! - envs: List environments defined in dbconf.yml
//! - init: Create dbconf.yml and the migrations directory

pub mod commands;

pub use commands::{Cli, Commands};
