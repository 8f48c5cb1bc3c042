//! Host/in-process bootstrap module
//!
//! Logging initialization and signal-driven shutdown.

pub mod logging;
pub mod signals;

pub use logging::{init_logging, level_for_verbosity};
pub use signals::shutdown_token;
