//! Resource limits for callers
//!
//! A run costs `width * height * steps` cell evaluations and holds
//! `(steps + 1) * width * height` cells of history. The engine accepts any
//! valid size; capping it is a policy of whoever exposes the engine, such as
//! a request handler. These helpers implement the cap the web service uses.

/// Step cap applied by the web service before invoking the engine
pub const DEFAULT_MAX_STEPS: i64 = 250;

/// Cap `steps` at `max_steps`
///
/// Negative values pass through unchanged so the engine can reject them.
#[must_use]
pub fn clamp_steps(steps: i64, max_steps: i64) -> i64 {
    steps.min(max_steps)
}

/// Number of cell evaluations a run performs, or `None` on overflow
#[must_use]
pub fn cell_evaluations(width: usize, height: usize, steps: usize) -> Option<u64> {
    let width = u64::try_from(width).ok()?;
    let height = u64::try_from(height).ok()?;
    let steps = u64::try_from(steps).ok()?;
    width.checked_mul(height)?.checked_mul(steps)
}

/// Number of cells held by the history of a run, or `None` on overflow
#[must_use]
pub fn history_cells(width: usize, height: usize, steps: usize) -> Option<u64> {
    cell_evaluations(width, height, steps.checked_add(1)?)
}
