//! Length units accepted for conductor geometry.
//!
//! Coordinates and self-GMR values are entered in the session's active unit
//! and normalized to meters on insertion. Every computation downstream of the
//! geometry store works in SI units.

use std::fmt;
use std::str::FromStr;

use crate::errors::LineError;
use crate::math::Scalar;

/// Supported input length units.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    /// SI meter.
    #[default]
    Meter,
    /// International foot (0.3048 m).
    Foot,
    /// International inch (0.0254 m).
    Inch,
    /// Centimeter.
    Centimeter,
    /// Millimeter.
    Millimeter,
}

impl LengthUnit {
    /// All supported units in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Meter,
        Self::Foot,
        Self::Inch,
        Self::Centimeter,
        Self::Millimeter,
    ];

    /// Meters per one of this unit.
    #[must_use]
    pub const fn scale_factor(self) -> Scalar {
        match self {
            Self::Meter => 1.0,
            Self::Foot => 0.3048,
            Self::Inch => 0.0254,
            Self::Centimeter => 0.01,
            Self::Millimeter => 0.001,
        }
    }

    /// Canonical symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Foot => "ft",
            Self::Inch => "in",
            Self::Centimeter => "cm",
            Self::Millimeter => "mm",
        }
    }

    /// Converts `value` expressed in this unit to meters.
    #[inline]
    #[must_use]
    pub fn to_meters(self, value: Scalar) -> Scalar {
        value * self.scale_factor()
    }

    /// Converts `meters` to this unit.
    #[inline]
    #[must_use]
    pub fn from_meters(self, meters: Scalar) -> Scalar {
        meters / self.scale_factor()
    }
}

impl FromStr for LengthUnit {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "m" => Ok(Self::Meter),
            "ft" => Ok(Self::Foot),
            "in" | "inch" => Ok(Self::Inch),
            "cm" => Ok(Self::Centimeter),
            "mm" => Ok(Self::Millimeter),
            other => Err(LineError::UnsupportedUnit(other.to_owned())),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Converts `value` in the unit named by `symbol` to meters.
pub fn to_meters(value: Scalar, symbol: &str) -> Result<Scalar, LineError> {
    Ok(symbol.parse::<LengthUnit>()?.to_meters(value))
}

/// Meters per one unit named by `symbol`.
pub fn scale_factor(symbol: &str) -> Result<Scalar, LineError> {
    Ok(symbol.parse::<LengthUnit>()?.scale_factor())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn parses_symbols_and_alias() {
        assert_eq!("ft".parse::<LengthUnit>().unwrap(), LengthUnit::Foot);
        assert_eq!("inch".parse::<LengthUnit>().unwrap(), LengthUnit::Inch);
        assert_eq!(" mm ".parse::<LengthUnit>().unwrap(), LengthUnit::Millimeter);
    }

    #[test]
    fn rejects_unknown_symbol() {
        let err = "yd".parse::<LengthUnit>().unwrap_err();
        assert_eq!(err, LineError::UnsupportedUnit("yd".into()));
        assert!(to_meters(1.0, "furlong").is_err());
    }

    #[test]
    fn round_trip_recovers_value() {
        for unit in LengthUnit::ALL {
            for value in [-12.5, 0.0435, 1.0, 3.0e4] {
                let back = unit.from_meters(unit.to_meters(value));
                assert_relative_eq!(back, value, max_relative = 1.0e-9);
            }
        }
    }

    #[test]
    fn foot_factor_and_display() {
        assert_relative_eq!(to_meters(10.0, "ft").unwrap(), 3.048, epsilon = 1.0e-12);
        assert_relative_eq!(scale_factor("cm").unwrap(), 0.01, epsilon = 1.0e-15);
        assert_eq!(LengthUnit::Inch.to_string(), "in");
    }
}
