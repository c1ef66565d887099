//! # Search Port
//!
//! Trait for finding the cabinet grids closest to a target size.
//!
//! The contract: given a target pair of physical quantities and a
//! cabinet type, produce the best configuration at-or-below and the
//! best at-or-above the target. Either slot may be empty.
//!
//! Implemented by search adapters (currently the bounded grid scan).

use serde::{Deserialize, Serialize};

use crate::core::{CabinetType, WallConfiguration};

/// The target a search approximates, tagged by comparison mode
///
/// The mode is implied by which two quantities the user actively
/// entered: width+diagonal compares (width, diagonal), every other
/// valid pair compares (width, height) after resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchTarget {
    /// Compare candidate (width, height) against the target, scored by
    /// Euclidean distance.
    WidthHeight { width: f64, height: f64 },
    /// Compare candidate (width, diagonal) against the target, scored by
    /// the sum of absolute differences.
    WidthDiagonal { width: f64, diagonal: f64 },
}

impl SearchTarget {
    /// The target values in comparison order
    pub fn values(&self) -> (f64, f64) {
        match *self {
            SearchTarget::WidthHeight { width, height } => (width, height),
            SearchTarget::WidthDiagonal { width, diagonal } => (width, diagonal),
        }
    }

    /// Project a candidate configuration onto this target's comparison plane
    pub fn project(&self, config: &WallConfiguration) -> (f64, f64) {
        match self {
            SearchTarget::WidthHeight { .. } => (config.width, config.height),
            SearchTarget::WidthDiagonal { .. } => (config.width, config.diagonal),
        }
    }
}

/// The search result: closest configurations from both directions
///
/// `lower` is the best configuration whose compared dimensions are both
/// at or below the target; `upper` the best at or above. An empty slot
/// means no configuration qualified (target beyond the search ceiling,
/// or a NaN target from degenerate input geometry). Callers must not
/// assume either slot is populated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NearestFit {
    pub lower: Option<WallConfiguration>,
    pub upper: Option<WallConfiguration>,
}

impl NearestFit {
    /// True when neither direction produced a configuration
    pub fn is_empty(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }
}

/// Trait for finding the nearest wall configurations
///
/// Search adapters implement this trait. Implementations are pure:
/// deterministic for identical inputs and free of side effects, so a
/// caller may re-invoke on every input change.
pub trait FitSearch: Send + Sync {
    /// Find the closest configurations below and above `target`
    fn nearest(&self, target: &SearchTarget, cabinet: CabinetType) -> NearestFit;
}
