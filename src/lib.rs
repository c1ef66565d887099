//! # Wallfit
//!
//! Video wall calculator: resolve wall dimensions and find the closest
//! cabinet grid configurations.
//!
//! ## Overview
//!
//! A display wall is assembled from fixed-size rectangular cabinets.
//! Given any two of {aspect ratio, height, width, diagonal}, wallfit
//! derives the other two, then searches every cabinet grid up to 50x50
//! for the two closest buildable walls: the best at-or-below the target
//! and the best at-or-above it.
//!
//! ## Key Properties
//!
//! - **Pure core**: no I/O, no shared state, deterministic
//! - **Bounded search**: 2500 candidates per query, always cheap
//! - **Degrades to data**: impossible geometry or out-of-range targets
//!   produce empty result slots, never errors
//!
//! ## Usage
//!
//! ```rust
//! use wallfit::adapters::grid::GridScan;
//! use wallfit::core::{resolve, CabinetType, LengthUnit, WallInputs};
//! use wallfit::ports::{FitSearch, SearchTarget};
//!
//! // A 16:9 wall, one meter tall.
//! let inputs = WallInputs {
//!     aspect_ratio: Some(16.0 / 9.0),
//!     height: Some(1.0),
//!     ..Default::default()
//! };
//! let dims = resolve(&inputs, LengthUnit::Meters);
//!
//! let target = SearchTarget::WidthHeight {
//!     width: dims.width,
//!     height: dims.height,
//! };
//! let fit = GridScan::default().nearest(&target, CabinetType::Wide);
//!
//! let lower = fit.lower.expect("a smaller wall exists");
//! assert!(lower.width <= dims.width && lower.height <= dims.height);
//! ```

pub mod adapters;
pub mod core;
pub mod ports;

// Re-exports for convenience
pub use crate::adapters::grid::GridScan;
pub use crate::core::{
    resolve, CabinetDimensions, CabinetType, DimensionSet, KnownPair, LengthUnit,
    WallConfiguration, WallInputs,
};
pub use crate::ports::{FitSearch, NearestFit, SearchTarget};
