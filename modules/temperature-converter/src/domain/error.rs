use rust_decimal::Decimal;

use super::unit::TemperatureUnit;

/// Errors produced by the conversion service. All of them are caused by the
/// caller's input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Temperature '{raw}' is not a valid decimal number")]
    InvalidValue { raw: String },

    #[error("Only Celsius and Fahrenheit are supported")]
    InvalidUnit { unit: String, convert_to: String },

    #[error("Values lower than absolute zero are not allowed")]
    BelowAbsoluteZero { value: Decimal, unit: TemperatureUnit },

    #[error("Converting a unit to itself is not supported")]
    NoOpConversion { unit: TemperatureUnit },
}

impl DomainError {
    pub fn invalid_value(raw: impl Into<String>) -> Self {
        Self::InvalidValue { raw: raw.into() }
    }

    /// Stable machine-readable name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidValue { .. } => "InvalidValue",
            Self::InvalidUnit { .. } => "InvalidUnit",
            Self::BelowAbsoluteZero { .. } => "BelowAbsoluteZero",
            Self::NoOpConversion { .. } => "NoOpConversion",
        }
    }
}
