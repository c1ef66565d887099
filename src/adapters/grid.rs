//! # Grid Scan Adapter
//!
//! Brute force search over every candidate cabinet grid.
//! Compares the target against ALL `columns x rows` combinations up to
//! the ceiling - O(n^2) per query, 2500 candidates at the default size.
//!
//! Good for:
//! - This problem size (the scan is bounded and cheap)
//! - Exact reproduction of scan-order tie-breaking
//!
//! The scan runs columns-outer, rows-inner. That order is part of the
//! contract: it decides which of several equally-close candidates wins.

use crate::core::metric::{Deviation, Euclidean, Manhattan};
use crate::core::{CabinetType, WallConfiguration};
use crate::ports::{FitSearch, NearestFit, SearchTarget};

/// Largest cabinet count considered per axis.
pub const MAX_GRID: u32 = 50;

/// Absolute tolerance, in millimeters, for the exact-match pass.
pub const EXACT_EPSILON_MM: f64 = 0.5;

/// Bounded exhaustive search over cabinet grids
pub struct GridScan {
    /// Per-axis ceiling on cabinet counts
    max_size: u32,

    /// Exact-match tolerance in millimeters
    epsilon: f64,
}

impl GridScan {
    /// Create a scan with a custom ceiling and tolerance
    pub fn new(max_size: u32, epsilon: f64) -> Self {
        Self { max_size, epsilon }
    }

    /// First candidate in scan order matching the target within epsilon
    /// on both compared dimensions
    ///
    /// First-found wins: once a candidate qualifies the scan stops, with
    /// no distance comparison among other near-exact candidates.
    fn find_exact(&self, target: &SearchTarget, cabinet: CabinetType) -> Option<WallConfiguration> {
        let (t0, t1) = target.values();
        for columns in 1..=self.max_size {
            for rows in 1..=self.max_size {
                let config = WallConfiguration::new(columns, rows, cabinet);
                let (c0, c1) = target.project(&config);
                if (c0 - t0).abs() < self.epsilon && (c1 - t1).abs() < self.epsilon {
                    return Some(config);
                }
            }
        }
        None
    }
}

impl Default for GridScan {
    fn default() -> Self {
        Self::new(MAX_GRID, EXACT_EPSILON_MM)
    }
}

impl FitSearch for GridScan {
    fn nearest(&self, target: &SearchTarget, cabinet: CabinetType) -> NearestFit {
        // Exact-match pass. On a hit, the next size up on both axes is
        // offered as the upper option, clamped per axis to the ceiling.
        if let Some(exact) = self.find_exact(target, cabinet) {
            let upper = WallConfiguration::new(
                (exact.columns + 1).min(self.max_size),
                (exact.rows + 1).min(self.max_size),
                cabinet,
            );
            return NearestFit {
                lower: Some(exact),
                upper: Some(upper),
            };
        }

        let metric: &dyn Deviation = match target {
            SearchTarget::WidthHeight { .. } => &Euclidean,
            SearchTarget::WidthDiagonal { .. } => &Manhattan,
        };
        let (t0, t1) = target.values();

        let mut lower: Option<WallConfiguration> = None;
        let mut upper: Option<WallConfiguration> = None;
        let mut lower_deviation = f64::INFINITY;
        let mut upper_deviation = f64::INFINITY;

        for columns in 1..=self.max_size {
            for rows in 1..=self.max_size {
                let config = WallConfiguration::new(columns, rows, cabinet);
                let sample = target.project(&config);
                let deviation = metric.deviation(sample, (t0, t1));

                // Strict < keeps the first candidate in scan order on a
                // tie. NaN targets fail every comparison here, so both
                // slots stay empty.
                if sample.0 <= t0 && sample.1 <= t1 && deviation < lower_deviation {
                    lower_deviation = deviation;
                    lower = Some(config.clone());
                }

                if sample.0 >= t0 && sample.1 >= t1 && deviation < upper_deviation {
                    upper_deviation = deviation;
                    upper = Some(config);
                }
            }
        }

        NearestFit { lower, upper }
    }
}

impl GridScan {
    /// Search by target width and height
    ///
    /// # Example
    /// ```
    /// use wallfit::adapters::grid::GridScan;
    /// use wallfit::core::CabinetType;
    ///
    /// let fit = GridScan::default().by_width_height(6000.0, 3375.0, CabinetType::Wide);
    /// let exact = fit.lower.unwrap();
    /// assert_eq!((exact.columns, exact.rows), (10, 10));
    /// ```
    pub fn by_width_height(&self, width: f64, height: f64, cabinet: CabinetType) -> NearestFit {
        self.nearest(&SearchTarget::WidthHeight { width, height }, cabinet)
    }

    /// Search by target width and diagonal
    pub fn by_width_diagonal(&self, width: f64, diagonal: f64, cabinet: CabinetType) -> NearestFit {
        self.nearest(&SearchTarget::WidthDiagonal { width, diagonal }, cabinet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diagonal_of;

    #[test]
    fn test_exact_match_width_height() {
        let fit = GridScan::default().by_width_height(6000.0, 3375.0, CabinetType::Wide);

        let lower = fit.lower.expect("exact match expected");
        assert_eq!(lower.columns, 10);
        assert_eq!(lower.rows, 10);
        assert_eq!(lower.total_cabinets, 100);
        assert_eq!(lower.width, 6000.0);
        assert_eq!(lower.height, 3375.0);
        assert!((lower.diagonal - diagonal_of(6000.0, 3375.0)).abs() < 1e-9);
        assert_eq!(lower.aspect_ratio, "1.78:1");

        let upper = fit.upper.expect("upper expected on exact match");
        assert_eq!(upper.columns, 11);
        assert_eq!(upper.rows, 11);
    }

    #[test]
    fn test_exact_match_within_tolerance() {
        // 0.4mm off on both axes still counts as exact.
        let fit = GridScan::default().by_width_height(6000.4, 3375.4, CabinetType::Wide);
        let lower = fit.lower.unwrap();
        assert_eq!((lower.columns, lower.rows), (10, 10));
        let upper = fit.upper.unwrap();
        assert_eq!((upper.columns, upper.rows), (11, 11));
    }

    #[test]
    fn test_exact_match_at_ceiling_clamps_upper() {
        let fit = GridScan::default().by_width_height(50.0 * 600.0, 50.0 * 337.5, CabinetType::Wide);
        let lower = fit.lower.unwrap();
        assert_eq!((lower.columns, lower.rows), (50, 50));
        // No larger grid exists; the upper offer clamps to the ceiling.
        let upper = fit.upper.unwrap();
        assert_eq!((upper.columns, upper.rows), (50, 50));
    }

    #[test]
    fn test_exact_match_clamps_each_axis_independently() {
        let fit = GridScan::default().by_width_height(50.0 * 500.0, 10.0 * 500.0, CabinetType::Square);
        let lower = fit.lower.unwrap();
        assert_eq!((lower.columns, lower.rows), (50, 10));
        let upper = fit.upper.unwrap();
        assert_eq!((upper.columns, upper.rows), (50, 11));
    }

    #[test]
    fn test_exact_pass_takes_first_in_scan_order() {
        // A huge tolerance qualifies several candidates; the first in
        // columns-then-rows order must win even though (3,3) is closer
        // to the target than (2,2).
        let scan = GridScan::new(MAX_GRID, 600.0);
        let fit = scan.by_width_height(1400.0, 1400.0, CabinetType::Square);
        let lower = fit.lower.unwrap();
        assert_eq!((lower.columns, lower.rows), (2, 2));
        let upper = fit.upper.unwrap();
        assert_eq!((upper.columns, upper.rows), (3, 3));
    }

    #[test]
    fn test_no_exact_match_brackets_target() {
        // Between 2x2 and 3x3 square grids.
        let fit = GridScan::default().by_width_height(1250.0, 1250.0, CabinetType::Square);

        let lower = fit.lower.unwrap();
        assert_eq!((lower.columns, lower.rows), (2, 2));
        assert!(lower.width <= 1250.0 && lower.height <= 1250.0);

        let upper = fit.upper.unwrap();
        assert_eq!((upper.columns, upper.rows), (3, 3));
        assert!(upper.width >= 1250.0 && upper.height >= 1250.0);
    }

    #[test]
    fn test_lower_dominance_requires_both_dimensions() {
        // Target width fits 3 columns but height fits only 1 row; a 3x2
        // grid is wider-but-taller and must not be offered as lower.
        let fit = GridScan::default().by_width_height(1600.0, 700.0, CabinetType::Square);
        let lower = fit.lower.unwrap();
        assert_eq!((lower.columns, lower.rows), (3, 1));
        let upper = fit.upper.unwrap();
        assert_eq!((upper.columns, upper.rows), (4, 2));
    }

    #[test]
    fn test_upper_absent_beyond_ceiling() {
        // Larger than any 50x50 wide-cabinet wall.
        let fit = GridScan::default().by_width_height(50.0 * 600.0 + 100.0, 50.0 * 337.5 + 100.0, CabinetType::Wide);
        assert!(fit.upper.is_none());
        let lower = fit.lower.unwrap();
        assert_eq!((lower.columns, lower.rows), (50, 50));
    }

    #[test]
    fn test_lower_absent_below_single_cabinet() {
        let fit = GridScan::default().by_width_height(100.0, 100.0, CabinetType::Square);
        assert!(fit.lower.is_none());
        let upper = fit.upper.unwrap();
        assert_eq!((upper.columns, upper.rows), (1, 1));
    }

    #[test]
    fn test_nan_target_yields_empty_fit() {
        let fit = GridScan::default().by_width_height(f64::NAN, 1000.0, CabinetType::Wide);
        assert!(fit.is_empty());
    }

    #[test]
    fn test_degenerate_geometry_flows_through_as_empty() {
        use crate::core::{resolve, LengthUnit, WallInputs};

        // Diagonal shorter than the height: width resolves to NaN.
        let inputs = WallInputs {
            height: Some(1000.0),
            diagonal: Some(500.0),
            ..Default::default()
        };
        let dims = resolve(&inputs, LengthUnit::Millimeters);
        assert!(dims.width.is_nan());

        let fit = GridScan::default().by_width_height(dims.width, dims.height, CabinetType::Wide);
        assert!(fit.is_empty());
    }

    #[test]
    fn test_width_diagonal_exact_match() {
        let diagonal = diagonal_of(6000.0, 3375.0);
        let fit = GridScan::default().by_width_diagonal(6000.0, diagonal, CabinetType::Wide);
        let lower = fit.lower.unwrap();
        assert_eq!((lower.columns, lower.rows), (10, 10));
        let upper = fit.upper.unwrap();
        assert_eq!((upper.columns, upper.rows), (11, 11));
    }

    #[test]
    fn test_width_diagonal_brackets_target() {
        // Width between 2 and 3 square columns, diagonal between the
        // matching grids.
        let fit = GridScan::default().by_width_diagonal(1250.0, 1900.0, CabinetType::Square);

        let lower = fit.lower.unwrap();
        assert!(lower.width <= 1250.0 && lower.diagonal <= 1900.0);

        let upper = fit.upper.unwrap();
        assert!(upper.width >= 1250.0 && upper.diagonal >= 1900.0);
    }

    #[test]
    fn test_width_diagonal_uses_sum_of_differences() {
        // Candidates: square grids, target width 1100, diagonal 1500.
        // (2,1): w=1000 d=1118.03  sum = 100 + 381.97 = 481.97
        // (2,2): w=1000 d=1414.21  sum = 100 + 85.79  = 185.79
        // (1,2): w=500  d=1118.03  sum = 600 + 381.97 = 981.97
        // (1,3): w=500  d=1581.14  not lower (diagonal above target)
        // Lower winner by sum of differences is (2,2).
        let fit = GridScan::default().by_width_diagonal(1100.0, 1500.0, CabinetType::Square);
        let lower = fit.lower.unwrap();
        assert_eq!((lower.columns, lower.rows), (2, 2));
    }

    #[test]
    fn test_deterministic_across_invocations() {
        let scan = GridScan::default();
        let first = scan.by_width_height(4321.0, 2345.0, CabinetType::Wide);
        let second = scan.by_width_height(4321.0, 2345.0, CabinetType::Wide);
        assert_eq!(first, second);
    }
}
