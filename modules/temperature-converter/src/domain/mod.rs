//! Domain layer for the temperature converter module
//!
//! Contains the unit model and the conversion service.

pub mod error;
pub mod model;
pub mod service;
pub mod unit;

pub use error::DomainError;
pub use model::{ConversionRequest, ConversionResult, parse_temperature};
pub use service::Service;
pub use unit::TemperatureUnit;
