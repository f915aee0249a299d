//! Per-frame cell counts and whole-run burn summaries

use super::cell::Cell;
use serde::{Deserialize, Serialize};

/// Cell counts for a single grid snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameStats {
    /// Empty ground plus ash
    pub empty: usize,
    /// Unburned trees
    pub trees: usize,
    /// Cells burning this tick
    pub burning: usize,
}

impl FrameStats {
    /// Count one cell
    #[inline]
    pub fn record(&mut self, cell: Cell) {
        match cell {
            Cell::Empty => self.empty += 1,
            Cell::Tree => self.trees += 1,
            Cell::Fire => self.burning += 1,
        }
    }

    /// Total number of cells counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.empty + self.trees + self.burning
    }

    /// Trees plus burning cells (everything that was fuel at some point this tick)
    #[must_use]
    pub const fn fuel(&self) -> usize {
        self.trees + self.burning
    }
}

/// Summary of a finished run
///
/// `initial_trees` counts the ignition cell, since it was a tree before it
/// was set alight. Cells still burning at the end of the run count as burned.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BurnSummary {
    /// Trees present at tick 0 (including the ignition cell)
    pub initial_trees: usize,
    /// Trees never reached by the fire
    pub remaining_trees: usize,
    /// Trees that burned or are still burning
    pub burned_cells: usize,
    /// `burned_cells / initial_trees`, or 0.0 for a run with no trees
    pub burned_fraction: f64,
    /// First tick with no burning cells, `None` if the fire outlived the run
    pub extinguished_at: Option<usize>,
    /// Largest number of cells burning at once
    pub peak_burning: usize,
    /// Tick at which `peak_burning` was first reached
    pub peak_burning_tick: usize,
}

impl BurnSummary {
    /// Build a summary from the per-tick counts of a run, in temporal order
    #[must_use]
    pub fn from_frames(frames: &[FrameStats]) -> Self {
        let Some(first) = frames.first() else {
            return Self::default();
        };
        let last = frames.last().unwrap_or(first);

        let initial_trees = first.fuel();
        let remaining_trees = last.trees;
        let burned_cells = initial_trees.saturating_sub(remaining_trees);
        let burned_fraction = if initial_trees == 0 {
            0.0
        } else {
            burned_cells as f64 / initial_trees as f64
        };

        let extinguished_at = frames.iter().position(|f| f.burning == 0);

        let (peak_burning_tick, peak_burning) = frames
            .iter()
            .enumerate()
            .fold((0, 0), |(best_tick, best), (tick, f)| {
                if f.burning > best {
                    (tick, f.burning)
                } else {
                    (best_tick, best)
                }
            });

        Self {
            initial_trees,
            remaining_trees,
            burned_cells,
            burned_fraction,
            extinguished_at,
            peak_burning,
            peak_burning_tick,
        }
    }
}
