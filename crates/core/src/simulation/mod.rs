//! History engine
//!
//! Runs one simulation from parameters to a complete [`History`]: validate,
//! seed the forest, ignite one tree, then apply the transition step `steps`
//! times, recording a snapshot before each step and one after the last.
//!
//! A run is a pure function of its parameters and RNG stream. There is no
//! module-level state, so independent runs can execute on any number of
//! threads at once. Cost is `width * height * steps` cell evaluations (see
//! [`limits::cell_evaluations`]); the grid pair is allocated once and reused
//! every tick.

pub mod config;
pub mod history;
pub mod limits;
pub mod params;
pub mod rng;

pub use config::SimulationConfig;
pub use history::History;
pub use limits::{cell_evaluations, clamp_steps, history_cells, DEFAULT_MAX_STEPS};
pub use params::{SimulationParams, ValidatedParams};
pub use rng::SimRng;

use crate::error::SimulationError;
use crate::grid::ForestGrid;
use crate::solver::{ignite_random_tree, seed_forest, step_fire};
use rand::Rng;
use tracing::{debug, info, trace};

/// Run a simulation and return its full history
///
/// # Arguments
///
/// * `width` - Grid width in cells (> 0)
/// * `height` - Grid height in cells (> 0)
/// * `density` - Probability that a cell starts as a tree, in (0, 1]
/// * `steps` - Number of ticks to compute (>= 0)
/// * `seed` - Seed for a reproducible run, or `None` for a fresh one
///
/// # Returns
///
/// `steps + 1` snapshots of a `height × width` grid
///
/// # Errors
///
/// Returns `SimulationError::InvalidParameter` before any computation if a
/// parameter is out of range.
pub fn simulate(
    width: i64,
    height: i64,
    density: f64,
    steps: i64,
    seed: Option<u64>,
) -> Result<History, SimulationError> {
    SimulationParams {
        width,
        height,
        density,
        steps,
        seed,
    }
    .run()
}

impl SimulationParams {
    /// Validate and run, seeding the RNG from `seed` (or a fresh seed)
    ///
    /// The seed used is recorded in the returned history.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameter` for out-of-range parameters.
    pub fn run(&self) -> Result<History, SimulationError> {
        self.validate()?.run()
    }

    /// Validate and run with a caller-provided RNG
    ///
    /// The `seed` field is ignored; the history records no seed.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameter` for out-of-range parameters.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<History, SimulationError> {
        self.validate()?.run_with_rng(rng)
    }
}

impl ValidatedParams {
    /// Run with parameters that already passed validation
    ///
    /// Seeds the RNG from `seed()`, or draws a fresh seed; either way the
    /// seed is recorded in the returned history.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameter` (`steps`) if the frame list
    /// cannot be allocated.
    pub fn run(&self) -> Result<History, SimulationError> {
        let mut rng = self
            .seed()
            .map_or_else(SimRng::from_entropy, SimRng::from_seed_u64);
        let seed = rng.seed();
        run_validated(self, &mut rng, Some(seed))
    }

    /// Run with a caller-provided RNG; the history records no seed
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameter` (`steps`) if the frame list
    /// cannot be allocated.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<History, SimulationError> {
        run_validated(self, rng, None)
    }
}

fn run_validated<R: Rng + ?Sized>(
    params: &ValidatedParams,
    rng: &mut R,
    seed: Option<u64>,
) -> Result<History, SimulationError> {
    let (width, height, steps) = (params.width(), params.height(), params.steps());
    info!(
        "Starting wildfire run: {}x{} grid, density={:.3}, steps={}, seed={:?}",
        width,
        height,
        params.density(),
        steps,
        seed
    );

    let frame_count = params.frame_count();
    let mut frames = Vec::new();
    frames.try_reserve_exact(frame_count).map_err(|e| {
        SimulationError::invalid_parameter(
            "steps",
            format!("cannot hold {frame_count} frames: {e}"),
        )
    })?;

    let mut current = seed_forest(width, height, params.density(), rng)?;
    let ignition = ignite_random_tree(&mut current, rng);
    match ignition {
        Some((row, col)) => debug!("Ignition at row={}, col={}", row, col),
        None => debug!("No trees planted, grid stays static"),
    }

    let mut next = ForestGrid::new(width, height);
    let mut settled = false;

    for tick in 0..steps {
        frames.push(current.clone());
        if settled {
            continue;
        }

        let changes = step_fire(&current, &mut next);
        std::mem::swap(&mut current, &mut next);
        trace!(
            "Tick {}: ignited={}, burned_out={}",
            tick + 1,
            changes.ignited,
            changes.burned_out
        );

        if changes.is_quiescent() {
            // Nothing burning: every remaining tick would reproduce this grid
            debug!("Grid settled at tick {}", tick + 1);
            settled = true;
        }
    }
    frames.push(current);

    let history = History::new(width, height, seed, ignition, frames);
    let summary = history.summary();
    info!(
        "Wildfire run complete: {} frames, burned {}/{} trees ({:.1}%), extinguished_at={:?}",
        history.len(),
        summary.burned_cells,
        summary.initial_trees,
        summary.burned_fraction * 100.0,
        summary.extinguished_at
    );

    Ok(history)
}
