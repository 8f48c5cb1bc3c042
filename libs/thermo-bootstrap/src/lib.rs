//! Bootstrap library for the thermo server
//!
//! ## Modules
//!
//! - [`config`]: layered application configuration (defaults, YAML, env, CLI)
//! - [`host`]: logging initialization and shutdown signal handling

pub mod config;
pub mod host;

// Re-export commonly used config types at crate root for convenience
pub use config::{AppConfig, CliArgs, ENV_PREFIX, LogFormat, LoggingConfig, ServerConfig};
