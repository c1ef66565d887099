//! # Wall Configuration
//!
//! A concrete cabinet grid: `columns x rows` cabinets of one type.
//!
//! Columns and rows are the only independent fields. Everything else
//! (physical size, diagonal, aspect ratio label) is derived at
//! construction and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::core::cabinet::CabinetType;
use crate::core::diagonal_of;

/// A specific cabinet grid with its derived physical dimensions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallConfiguration {
    /// Cabinets per row (>= 1)
    pub columns: u32,
    /// Cabinets per column (>= 1)
    pub rows: u32,
    /// `columns * rows`
    pub total_cabinets: u32,
    /// Overall width in millimeters
    pub width: f64,
    /// Overall height in millimeters
    pub height: f64,
    /// Overall diagonal in millimeters
    pub diagonal: f64,
    /// Aspect ratio rendered as "X.XX:1"
    pub aspect_ratio: String,
}

impl WallConfiguration {
    /// Build the configuration for `columns x rows` cabinets of `cabinet`
    ///
    /// # Example
    /// ```
    /// use wallfit::core::cabinet::CabinetType;
    /// use wallfit::core::wall::WallConfiguration;
    ///
    /// let wall = WallConfiguration::new(10, 10, CabinetType::Wide);
    /// assert_eq!(wall.total_cabinets, 100);
    /// assert_eq!(wall.width, 6000.0);
    /// assert_eq!(wall.height, 3375.0);
    /// assert_eq!(wall.aspect_ratio, "1.78:1");
    /// ```
    pub fn new(columns: u32, rows: u32, cabinet: CabinetType) -> Self {
        let dims = cabinet.dimensions();
        let width = columns as f64 * dims.width;
        let height = rows as f64 * dims.height;
        let diagonal = diagonal_of(width, height);
        let aspect_ratio = format!("{:.2}:1", width / height);

        Self {
            columns,
            rows,
            total_cabinets: columns * rows,
            width,
            height,
            diagonal,
            aspect_ratio,
        }
    }
}
