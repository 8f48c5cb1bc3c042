use rust_decimal::Decimal;

use super::error::DomainError;
use super::unit::TemperatureUnit;

/// Parse a raw temperature into a decimal.
///
/// Plain decimals (`-12.5`, `+3`) are parsed exactly when they fit. Longer
/// fractions are cut to the finest scale that fits and rounded toward
/// negative infinity, so a value below an absolute-zero floor never rounds
/// up onto it. Scientific notation (`1e3`, `-4.5E-1`) is tried last.
///
/// # Errors
/// Returns [`DomainError::InvalidValue`] when `raw` is not a decimal number
/// or its integer part does not fit in a `Decimal`.
pub fn parse_temperature(raw: &str) -> Result<Decimal, DomainError> {
    let trimmed = raw.trim();
    Decimal::from_str_exact(trimmed)
        .ok()
        .or_else(|| parse_rounding_down(trimmed))
        .or_else(|| Decimal::from_scientific(trimmed).ok())
        .ok_or_else(|| DomainError::invalid_value(raw))
}

/// Finest fractional scale a `Decimal` can hold.
const MAX_SCALE: usize = 28;

/// Plain decimal whose fraction is too long for an exact parse.
fn parse_rounding_down(raw: &str) -> Option<Decimal> {
    let (int_part, frac) = raw.split_once('.')?;
    if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    (0..=frac.len().min(MAX_SCALE)).rev().find_map(|keep| {
        let (kept, dropped) = frac.split_at(keep);
        let truncated = if kept.is_empty() {
            Decimal::from_str_exact(int_part).ok()?
        } else {
            Decimal::from_str_exact(&format!("{int_part}.{kept}")).ok()?
        };

        // Truncation already rounds positives down; negatives need one more ulp.
        if int_part.starts_with('-') && dropped.bytes().any(|b| b != b'0') {
            let ulp = Decimal::new(1, u32::try_from(keep).ok()?);
            truncated.checked_sub(ulp)
        } else {
            Some(truncated)
        }
    })
}

/// A single validated conversion: value plus two known units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest {
    value: Decimal,
    from: TemperatureUnit,
    to: TemperatureUnit,
}

impl ConversionRequest {
    /// Normalize both unit tokens and build the request.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidUnit`] if either token is not a known alias.
    pub fn new(value: Decimal, unit: &str, convert_to: &str) -> Result<Self, DomainError> {
        let from = TemperatureUnit::normalize(unit);
        let to = TemperatureUnit::normalize(convert_to);

        if !from.is_known() || !to.is_known() {
            return Err(DomainError::InvalidUnit {
                unit: unit.to_owned(),
                convert_to: convert_to.to_owned(),
            });
        }

        Ok(Self { value, from, to })
    }

    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    #[must_use]
    pub const fn source_unit(&self) -> TemperatureUnit {
        self.from
    }

    #[must_use]
    pub const fn target_unit(&self) -> TemperatureUnit {
        self.to
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionResult {
    value: Decimal,
}

impl ConversionResult {
    /// Wraps `value` with trailing fractional zeros stripped (`32.0` becomes `32`).
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self {
            value: value.normalize(),
        }
    }

    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }
}
