//! # stargazer-config
//!
//! Configuration schema, loader, and logging bootstrap for the Stargazer
//! help module.

pub mod loader;
pub mod logging;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{HelpConfig, LoggingConfig, StargazerConfig};
