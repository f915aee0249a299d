//! Simulation parameters and their validation
//!
//! Parameters arrive as signed integers, the way a request handler receives
//! them, and are checked here before anything is allocated. The engine never
//! relies on an upstream layer to have clamped them.

use crate::error::SimulationError;
use crate::grid::ForestGrid;
use serde::{Deserialize, Serialize};
use std::mem::size_of;

/// Largest single allocation Rust permits, in bytes
const MAX_ALLOCATION: usize = isize::MAX.unsigned_abs();

/// Inputs of one simulation run, as received from a caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Grid width in cells (must be > 0)
    pub width: i64,
    /// Grid height in cells (must be > 0)
    pub height: i64,
    /// Probability that a cell starts as a tree, in (0, 1]
    pub density: f64,
    /// Number of ticks to compute (must be >= 0)
    pub steps: i64,
    /// Seed for reproducible runs; `None` draws a fresh one
    pub seed: Option<u64>,
}

/// Parameters that passed validation, converted to grid units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedParams {
    width: usize,
    height: usize,
    density: f64,
    steps: usize,
    seed: Option<u64>,
}

impl SimulationParams {
    /// Create unseeded parameters
    #[must_use]
    pub const fn new(width: i64, height: i64, density: f64, steps: i64) -> Self {
        Self {
            width,
            height,
            density,
            steps,
            seed: None,
        }
    }

    /// Use a fixed seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every parameter and convert to grid units
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameter` when:
    /// - `width` or `height` is not positive or exceeds the address space
    /// - `density` is outside (0, 1] or NaN
    /// - `steps` is negative
    /// - the full history (`(steps + 1)` grids of `width * height` cells) would
    ///   exceed the largest possible allocation
    pub fn validate(&self) -> Result<ValidatedParams, SimulationError> {
        let width = positive_dimension("width", self.width)?;
        let height = positive_dimension("height", self.height)?;

        if !(self.density > 0.0 && self.density <= 1.0) {
            return Err(SimulationError::invalid_parameter(
                "density",
                format!("must be in (0, 1], got {}", self.density),
            ));
        }

        let steps = usize::try_from(self.steps).map_err(|_| {
            SimulationError::invalid_parameter(
                "steps",
                format!("must be non-negative, got {}", self.steps),
            )
        })?;

        let cells = width.checked_mul(height).ok_or_else(|| {
            SimulationError::invalid_parameter(
                "width",
                format!("grid of {width}x{height} cells is too large"),
            )
        })?;
        steps
            .checked_add(1)
            .and_then(|frames| history_bytes(frames, cells))
            .filter(|&bytes| bytes <= MAX_ALLOCATION)
            .ok_or_else(|| {
                SimulationError::invalid_parameter(
                    "steps",
                    format!("history of {steps} steps over {cells} cells is too large"),
                )
            })?;

        Ok(ValidatedParams {
            width,
            height,
            density: self.density,
            steps,
            seed: self.seed,
        })
    }
}

/// Bytes held by a history: the cells of every frame plus one grid header each
fn history_bytes(frames: usize, cells: usize) -> Option<usize> {
    let cell_bytes = frames.checked_mul(cells)?;
    let header_bytes = frames.checked_mul(size_of::<ForestGrid>())?;
    cell_bytes.checked_add(header_bytes)
}

fn positive_dimension(name: &'static str, value: i64) -> Result<usize, SimulationError> {
    if value <= 0 {
        return Err(SimulationError::invalid_parameter(
            name,
            format!("must be positive, got {value}"),
        ));
    }
    usize::try_from(value).map_err(|_| {
        SimulationError::invalid_parameter(name, format!("{value} exceeds the address space"))
    })
}

impl ValidatedParams {
    /// Grid width in cells
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Tree probability per cell
    #[must_use]
    pub const fn density(&self) -> f64 {
        self.density
    }

    /// Number of ticks to compute
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Requested seed, if any
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of snapshots the run will produce (`steps + 1`)
    #[must_use]
    pub const fn frame_count(&self) -> usize {
        self.steps + 1
    }

    /// Size of the full history in cells
    #[must_use]
    pub const fn history_cells(&self) -> usize {
        // Overflow ruled out by validate()
        self.frame_count() * self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_params_convert() {
        let params = SimulationParams::new(200, 100, 0.6, 60).with_seed(9);
        let valid = params.validate().expect("valid parameters");
        assert_eq!(valid.width(), 200);
        assert_eq!(valid.height(), 100);
        assert_eq!(valid.steps(), 60);
        assert_eq!(valid.seed(), Some(9));
        assert_eq!(valid.frame_count(), 61);
        assert_eq!(valid.history_cells(), 61 * 200 * 100);
    }

    #[test]
    fn test_zero_steps_is_valid() {
        let valid = SimulationParams::new(3, 3, 0.5, 0)
            .validate()
            .expect("zero steps allowed");
        assert_eq!(valid.frame_count(), 1);
    }

    #[test]
    fn test_density_of_one_is_valid() {
        assert!(SimulationParams::new(3, 3, 1.0, 1).validate().is_ok());
    }

    #[test]
    fn test_rejects_each_bad_parameter() {
        let cases = [
            (SimulationParams::new(0, 10, 0.5, 10), "width"),
            (SimulationParams::new(-4, 10, 0.5, 10), "width"),
            (SimulationParams::new(10, 0, 0.5, 10), "height"),
            (SimulationParams::new(10, -1, 0.5, 10), "height"),
            (SimulationParams::new(10, 10, 0.0, 10), "density"),
            (SimulationParams::new(10, 10, -0.1, 10), "density"),
            (SimulationParams::new(10, 10, 1.5, 10), "density"),
            (SimulationParams::new(10, 10, f64::NAN, 10), "density"),
            (SimulationParams::new(10, 10, f64::INFINITY, 10), "density"),
            (SimulationParams::new(10, 10, 0.5, -1), "steps"),
        ];
        for (params, name) in cases {
            let err = params.validate().expect_err("parameters rejected");
            assert_eq!(err.parameter(), name, "{params:?}");
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_rejects_unaddressable_history() {
        let err = SimulationParams::new(i64::MAX, i64::MAX, 0.5, 1)
            .validate()
            .expect_err("grid too large");
        assert!(matches!(err.parameter(), "width" | "height"));

        let err = SimulationParams::new(1 << 20, 1 << 20, 0.5, i64::MAX)
            .validate()
            .expect_err("history too large");
        assert_eq!(err.parameter(), "steps");
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_rejects_history_beyond_allocation_limit() {
        // A 1x1 grid still needs one grid header per frame
        let err = SimulationParams::new(1, 1, 0.5, i64::MAX)
            .validate()
            .expect_err("too many frames");
        assert_eq!(err.parameter(), "steps");

        // Cell count fits in usize, but two frames of it cannot be allocated
        let err = SimulationParams::new(1 << 31, 1 << 31, 0.5, 1)
            .validate()
            .expect_err("history too large");
        assert_eq!(err.parameter(), "steps");
    }
}
