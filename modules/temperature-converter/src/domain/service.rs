//! Domain service for the temperature converter
//!
//! Stateless: every call validates and converts independently, so a single
//! `Arc<Service>` is shared by all request handlers.

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use super::error::DomainError;
use super::model::{ConversionRequest, ConversionResult};
use super::unit::TemperatureUnit;

/// Celsius/Fahrenheit conversion service using exact decimal arithmetic.
#[derive(Debug, Default, Clone, Copy)]
pub struct Service;

impl Service {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Convert `value` from `unit` to `convert_to`.
    ///
    /// Checks run in order: unit aliases, the absolute-zero floor of the
    /// source scale (the floor itself is accepted), then same-unit requests.
    ///
    /// # Errors
    /// - [`DomainError::InvalidUnit`] if either token is not a known alias
    /// - [`DomainError::BelowAbsoluteZero`] if `value` is below the source scale's floor
    /// - [`DomainError::NoOpConversion`] if both tokens name the same scale
    /// - [`DomainError::InvalidValue`] if the result leaves the decimal range
    #[instrument(level = "debug", skip(self))]
    pub fn convert(
        &self,
        value: Decimal,
        unit: &str,
        convert_to: &str,
    ) -> Result<ConversionResult, DomainError> {
        let request = ConversionRequest::new(value, unit, convert_to)?;
        self.execute(&request)
    }

    /// Convert an already normalized request.
    ///
    /// # Errors
    /// Same as [`Service::convert`], minus unit validation.
    pub fn execute(&self, request: &ConversionRequest) -> Result<ConversionResult, DomainError> {
        let value = request.value();
        let from = request.source_unit();

        if from.absolute_zero().is_some_and(|floor| value < floor) {
            debug!(%value, %from, "Rejecting temperature below absolute zero");
            return Err(DomainError::BelowAbsoluteZero { value, unit: from });
        }

        let converted = match (from, request.target_unit()) {
            (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => celsius_to_fahrenheit(value),
            (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => fahrenheit_to_celsius(value),
            _ => return Err(DomainError::NoOpConversion { unit: from }),
        }
        .ok_or_else(|| DomainError::invalid_value(value.to_string()))?;

        let result = ConversionResult::new(converted);
        debug!(%value, %from, result = %result.value(), "Conversion completed");
        Ok(result)
    }
}

/// `value * 1.8 + 32`; `None` on overflow.
fn celsius_to_fahrenheit(value: Decimal) -> Option<Decimal> {
    value
        .checked_mul(Decimal::new(18, 1))?
        .checked_add(Decimal::from(32))
}

/// `(value - 32) * 5 / 9`; multiplying before dividing keeps exact results exact.
///
/// Near the top of the decimal range `* 5` overflows first, so the division
/// is done before the multiplication there.
fn fahrenheit_to_celsius(value: Decimal) -> Option<Decimal> {
    let five = Decimal::from(5);
    let nine = Decimal::from(9);
    let delta = value.checked_sub(Decimal::from(32))?;

    delta
        .checked_mul(five)
        .and_then(|scaled| scaled.checked_div(nine))
        .or_else(|| delta.checked_div(nine)?.checked_mul(five))
}
