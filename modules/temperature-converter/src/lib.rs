//! Temperature Converter Module
//!
//! Exposes a REST API converting temperatures between Celsius and Fahrenheit.
//!
//! ## Architecture
//!
//! - `domain` holds the unit lookup table, the request/result model and the
//!   `Service` performing exact decimal conversions
//! - `api::rest` maps the service onto axum routes and turns `DomainError`
//!   into `{"detail": ...}` responses

// === PUBLIC EXPORTS ===
pub mod domain;
pub use domain::{
    ConversionRequest, ConversionResult, DomainError, Service, TemperatureUnit,
    parse_temperature,
};

// === REST SURFACE ===
pub mod api;
pub use api::rest::routes::register_routes;
