//! # Dimension Resolution
//!
//! Derive the full set of wall dimensions from any two known quantities.
//!
//! The caller supplies up to four optional fields (aspect ratio, height,
//! width, diagonal) and a unit. Exactly two are expected to be present;
//! [`KnownPair::classify`] names which two, and [`resolve`] fills in the
//! other two. All lengths are normalized to millimeters before any
//! arithmetic; the aspect ratio is dimensionless and passes through.

use serde::{Deserialize, Serialize};

use crate::core::diagonal_of;
use crate::core::unit::LengthUnit;

/// Aspect ratio used when no usable pair of inputs is present.
const FALLBACK_ASPECT_RATIO: f64 = 16.0 / 9.0;

/// Width in millimeters used when no usable pair of inputs is present.
const FALLBACK_WIDTH_MM: f64 = 1000.0;

/// The raw input record, as collected by the caller
///
/// `None` means the field is inactive. Lengths are in the caller's
/// selected unit; the ratio is unitless.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WallInputs {
    pub aspect_ratio: Option<f64>,
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub diagonal: Option<f64>,
}

impl WallInputs {
    /// Number of active fields
    pub fn known_count(&self) -> usize {
        [
            self.aspect_ratio.is_some(),
            self.height.is_some(),
            self.width.is_some(),
            self.diagonal.is_some(),
        ]
        .iter()
        .filter(|&&present| present)
        .count()
    }
}

/// Which two quantities are known, with their values
///
/// One variant per unordered pair of the four input fields. The variant
/// selects the derivation formulas in [`KnownPair::resolve`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KnownPair {
    RatioHeight { ratio: f64, height: f64 },
    RatioWidth { ratio: f64, width: f64 },
    RatioDiagonal { ratio: f64, diagonal: f64 },
    HeightWidth { height: f64, width: f64 },
    HeightDiagonal { height: f64, diagonal: f64 },
    WidthDiagonal { width: f64, diagonal: f64 },
}

impl KnownPair {
    /// Classify an input record into the pair that will drive resolution
    ///
    /// Pairs are tested in a fixed precedence order (ratio+height,
    /// ratio+width, ratio+diagonal, height+width, height+diagonal,
    /// width+diagonal) and the first pair whose both fields are active
    /// wins. With exactly two active fields the order is irrelevant;
    /// with three or four it decides which pair drives the result.
    /// Returns `None` when fewer than two fields are active.
    pub fn classify(inputs: &WallInputs) -> Option<KnownPair> {
        let WallInputs {
            aspect_ratio,
            height,
            width,
            diagonal,
        } = *inputs;

        match (aspect_ratio, height, width, diagonal) {
            (Some(ratio), Some(height), _, _) => Some(KnownPair::RatioHeight { ratio, height }),
            (Some(ratio), _, Some(width), _) => Some(KnownPair::RatioWidth { ratio, width }),
            (Some(ratio), _, _, Some(diagonal)) => {
                Some(KnownPair::RatioDiagonal { ratio, diagonal })
            }
            (_, Some(height), Some(width), _) => Some(KnownPair::HeightWidth { height, width }),
            (_, Some(height), _, Some(diagonal)) => {
                Some(KnownPair::HeightDiagonal { height, diagonal })
            }
            (_, _, Some(width), Some(diagonal)) => {
                Some(KnownPair::WidthDiagonal { width, diagonal })
            }
            _ => None,
        }
    }

    /// Derive the two missing quantities from this pair
    ///
    /// Lengths must already be in millimeters. Degenerate geometry
    /// (a diagonal shorter than the known side) yields NaN for the
    /// derived side, which downstream comparisons treat as "matches
    /// nothing" rather than a failure.
    pub fn resolve(&self) -> DimensionSet {
        match *self {
            KnownPair::RatioHeight { ratio, height } => {
                let width = height * ratio;
                DimensionSet {
                    width,
                    height,
                    diagonal: diagonal_of(width, height),
                    aspect_ratio: ratio,
                }
            }
            KnownPair::RatioWidth { ratio, width } => {
                let height = width / ratio;
                DimensionSet {
                    width,
                    height,
                    diagonal: diagonal_of(width, height),
                    aspect_ratio: ratio,
                }
            }
            KnownPair::RatioDiagonal { ratio, diagonal } => {
                let height = diagonal / (1.0 + ratio * ratio).sqrt();
                let width = height * ratio;
                DimensionSet {
                    width,
                    height,
                    diagonal,
                    aspect_ratio: ratio,
                }
            }
            KnownPair::HeightWidth { height, width } => DimensionSet {
                width,
                height,
                diagonal: diagonal_of(width, height),
                aspect_ratio: width / height,
            },
            KnownPair::HeightDiagonal { height, diagonal } => {
                let width = (diagonal * diagonal - height * height).sqrt();
                DimensionSet {
                    width,
                    height,
                    diagonal,
                    aspect_ratio: width / height,
                }
            }
            KnownPair::WidthDiagonal { width, diagonal } => {
                let height = (diagonal * diagonal - width * width).sqrt();
                DimensionSet {
                    width,
                    height,
                    diagonal,
                    aspect_ratio: width / height,
                }
            }
        }
    }
}

/// The canonical resolved quadruple
///
/// All lengths in millimeters; the ratio is width/height. Built fresh on
/// every resolution, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DimensionSet {
    pub width: f64,
    pub height: f64,
    pub diagonal: f64,
    pub aspect_ratio: f64,
}

impl DimensionSet {
    /// Default wall used when the input record has no usable pair:
    /// a 16:9 wall one meter wide.
    pub fn fallback() -> Self {
        let width = FALLBACK_WIDTH_MM;
        let height = width / FALLBACK_ASPECT_RATIO;
        Self {
            width,
            height,
            diagonal: diagonal_of(width, height),
            aspect_ratio: FALLBACK_ASPECT_RATIO,
        }
    }
}

/// Resolve a full [`DimensionSet`] from the caller's input record
///
/// Lengths are converted from `unit` to millimeters before derivation.
/// When no pair of fields is active the fallback dimensions are
/// returned; callers that want to reject that case check
/// [`WallInputs::known_count`] (or [`KnownPair::classify`]) first.
pub fn resolve(inputs: &WallInputs, unit: LengthUnit) -> DimensionSet {
    let normalized = WallInputs {
        aspect_ratio: inputs.aspect_ratio,
        height: inputs.height.map(|v| unit.to_mm(v)),
        width: inputs.width.map(|v| unit.to_mm(v)),
        diagonal: inputs.diagonal.map(|v| unit.to_mm(v)),
    };

    match KnownPair::classify(&normalized) {
        Some(pair) => pair.resolve(),
        None => DimensionSet::fallback(),
    }
}
