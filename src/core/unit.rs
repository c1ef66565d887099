//! # Length Units
//!
//! External length units and their conversion to the base unit.
//!
//! All wall arithmetic happens in millimeters. Callers convert on the
//! way in (`to_mm`) and on the way out (`from_mm`); nothing downstream
//! ever sees a foot or an inch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A length unit accepted at the input boundary
///
/// Each unit carries a fixed multiplicative factor to millimeters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    /// The base unit. Factor 1.
    Millimeters,
    Meters,
    Feet,
    Inches,
}

impl LengthUnit {
    /// Conversion factor from this unit to millimeters
    pub fn factor(&self) -> f64 {
        match self {
            LengthUnit::Millimeters => 1.0,
            LengthUnit::Meters => 1000.0,
            LengthUnit::Feet => 304.8,
            LengthUnit::Inches => 25.4,
        }
    }

    /// Convert a value in this unit to millimeters
    ///
    /// # Example
    /// ```
    /// use wallfit::core::unit::LengthUnit;
    /// assert_eq!(LengthUnit::Meters.to_mm(2.5), 2500.0);
    /// ```
    pub fn to_mm(&self, value: f64) -> f64 {
        value * self.factor()
    }

    /// Convert a value in millimeters to this unit
    pub fn from_mm(&self, value: f64) -> f64 {
        value / self.factor()
    }

    /// Render a value of this unit with its display precision
    ///
    /// Millimeters show one decimal, meters three, feet and inches two.
    pub fn format_value(&self, value: f64) -> String {
        let decimals = match self {
            LengthUnit::Millimeters => 1,
            LengthUnit::Meters => 3,
            LengthUnit::Feet | LengthUnit::Inches => 2,
        };
        format!("{:.*}", decimals, value)
    }

    /// Short label for display ("mm", "m", "ft", "in")
    pub fn label(&self) -> &'static str {
        match self {
            LengthUnit::Millimeters => "mm",
            LengthUnit::Meters => "m",
            LengthUnit::Feet => "ft",
            LengthUnit::Inches => "in",
        }
    }
}

/// Convert a value between two units
///
/// Goes through millimeters, so any pair of units composes.
///
/// # Example
/// ```
/// use wallfit::core::unit::{convert, LengthUnit};
/// let inches = convert(1.0, LengthUnit::Feet, LengthUnit::Inches);
/// assert!((inches - 12.0).abs() < 1e-9);
/// ```
pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    to.from_mm(from.to_mm(value))
}

/// Error for an unrecognized unit name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUnitError(String);

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown unit '{}' (expected mm, m, ft, or in)", self.0)
    }
}

impl std::error::Error for ParseUnitError {}

impl FromStr for LengthUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(LengthUnit::Millimeters),
            "m" | "meter" | "meters" => Ok(LengthUnit::Meters),
            "ft" | "foot" | "feet" => Ok(LengthUnit::Feet),
            "in" | "inch" | "inches" => Ok(LengthUnit::Inches),
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}
