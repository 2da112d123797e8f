//! Domain models for resolved database configuration

mod dbconf;
mod driver;

pub use dbconf::{DbConf, MIGRATIONS_DIR};
pub use driver::DriverDescriptor;
