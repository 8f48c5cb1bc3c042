use std::fmt;

use rust_decimal::Decimal;

/// Temperature scale resolved from a user supplied unit token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    /// Any token outside the alias table.
    Unknown,
}

/// Accepted spellings, matched ASCII case-insensitively.
const UNIT_ALIASES: &[(&str, TemperatureUnit)] = &[
    ("celsius", TemperatureUnit::Celsius),
    ("c", TemperatureUnit::Celsius),
    ("fahrenheit", TemperatureUnit::Fahrenheit),
    ("f", TemperatureUnit::Fahrenheit),
];

impl TemperatureUnit {
    /// Normalize a unit token (`"C"`, `"celsius"`, `"Fahrenheit"`, ...) to its scale.
    #[must_use]
    pub fn normalize(token: &str) -> Self {
        UNIT_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(token))
            .map_or(Self::Unknown, |&(_, unit)| unit)
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Lowest physically valid value on this scale.
    #[must_use]
    pub fn absolute_zero(self) -> Option<Decimal> {
        match self {
            Self::Celsius => Some(Decimal::new(-27_315, 2)),
            Self::Fahrenheit => Some(Decimal::new(-45_967, 2)),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_case_insensitively() {
        for token in ["celsius", "Celsius", "CELSIUS", "c", "C"] {
            assert_eq!(TemperatureUnit::normalize(token), TemperatureUnit::Celsius, "{token}");
        }
        for token in ["fahrenheit", "Fahrenheit", "fAhReNhEiT", "f", "F"] {
            assert_eq!(
                TemperatureUnit::normalize(token),
                TemperatureUnit::Fahrenheit,
                "{token}"
            );
        }
    }

    #[test]
    fn other_tokens_are_unknown() {
        for token in ["kelvin", "k", "", "celcius", " c", "fahrenheit ", "ce"] {
            let unit = TemperatureUnit::normalize(token);
            assert_eq!(unit, TemperatureUnit::Unknown, "{token:?}");
            assert!(!unit.is_known());
        }
    }

    #[test]
    fn absolute_zero_per_scale() {
        assert_eq!(
            TemperatureUnit::Celsius.absolute_zero(),
            Some("-273.15".parse().unwrap())
        );
        assert_eq!(
            TemperatureUnit::Fahrenheit.absolute_zero(),
            Some("-459.67".parse().unwrap())
        );
        assert_eq!(TemperatureUnit::Unknown.absolute_zero(), None);
    }
}
