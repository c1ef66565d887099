//! # Core Domain
//!
//! Pure math, no I/O. The foundation of wallfit.
//!
//! This module contains the fundamental types and operations:
//! - `LengthUnit` - external units and conversion to millimeters
//! - `CabinetType` - the fixed cabinet catalog
//! - `WallInputs` / `KnownPair` / `DimensionSet` - dimension resolution
//! - `WallConfiguration` - a concrete cabinet grid
//! - `Deviation` - trait for scoring candidate walls against a target
//!
//! ## Design Principles
//!
//! - All functions are pure (deterministic, no side effects)
//! - No I/O operations
//! - Constant tables are match arms on Copy enums, never mutable globals
//! - Fully testable in isolation

pub mod cabinet;
pub mod dimensions;
pub mod metric;
pub mod unit;
pub mod wall;

// Re-exports
pub use cabinet::{CabinetDimensions, CabinetType};
pub use dimensions::{resolve, DimensionSet, KnownPair, WallInputs};
pub use unit::{convert, LengthUnit};
pub use wall::WallConfiguration;

/// Diagonal of a `width x height` rectangle
///
/// Shared by dimension resolution and wall construction so both derive
/// the value the same way.
pub fn diagonal_of(width: f64, height: f64) -> f64 {
    (width * width + height * height).sqrt()
}
