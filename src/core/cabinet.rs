//! # Cabinet Catalog
//!
//! The two fixed cabinet types a wall can be built from.
//!
//! A cabinet is the atomic building block: a rigid rectangle with known
//! physical dimensions. The catalog is a process-wide constant; there is
//! no way to register additional types at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Physical size of a single cabinet, in millimeters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CabinetDimensions {
    pub width: f64,
    pub height: f64,
}

/// One of the two supported cabinet types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinetType {
    /// 16:9 cabinet, 600 x 337.5 mm
    Wide,
    /// 1:1 cabinet, 500 x 500 mm
    Square,
}

impl CabinetType {
    /// Unit dimensions of this cabinet type
    ///
    /// # Example
    /// ```
    /// use wallfit::core::cabinet::CabinetType;
    /// let dims = CabinetType::Wide.dimensions();
    /// assert_eq!(dims.width, 600.0);
    /// assert_eq!(dims.height, 337.5);
    /// ```
    pub fn dimensions(&self) -> CabinetDimensions {
        match self {
            CabinetType::Wide => CabinetDimensions {
                width: 600.0,
                height: 337.5,
            },
            CabinetType::Square => CabinetDimensions {
                width: 500.0,
                height: 500.0,
            },
        }
    }

    /// The cabinet's own aspect ratio, as marketed ("16:9", "1:1")
    pub fn aspect_label(&self) -> &'static str {
        match self {
            CabinetType::Wide => "16:9",
            CabinetType::Square => "1:1",
        }
    }
}

/// Error for an unrecognized cabinet type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCabinetError(String);

impl fmt::Display for ParseCabinetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown cabinet type '{}' (expected wide/16:9 or square/1:1)",
            self.0
        )
    }
}

impl std::error::Error for ParseCabinetError {}

impl FromStr for CabinetType {
    type Err = ParseCabinetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wide" | "16:9" => Ok(CabinetType::Wide),
            "square" | "1:1" => Ok(CabinetType::Square),
            _ => Err(ParseCabinetError(s.to_string())),
        }
    }
}
