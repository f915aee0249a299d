//! Synchronous fire-spread step
//!
//! Advances the grid by one tick. Every next-state value is computed from the
//! current grid only, and written into a separate output buffer, so fire can
//! never race across the grid within a single tick regardless of scan order.
//!
//! # Rule
//!
//! - Fire burns out to ash
//! - A tree with at least one burning Moore neighbor catches fire
//! - Every other cell keeps its state
//!
//! The grid is bounded: edge and corner cells simply have fewer neighbors.

use crate::core_types::Cell;
use crate::grid::ForestGrid;

/// Cells that changed state during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickChanges {
    /// Trees that caught fire
    pub ignited: usize,
    /// Fires that burned out to ash
    pub burned_out: usize,
}

impl TickChanges {
    /// True when the tick changed nothing, so every later tick will be identical
    #[must_use]
    pub const fn is_quiescent(&self) -> bool {
        self.ignited == 0 && self.burned_out == 0
    }
}

/// Compute the next tick of `current` into `next`
///
/// `next` is fully overwritten; its previous contents are irrelevant. The
/// step does not allocate, so callers can ping-pong two grids for a whole run.
///
/// # Arguments
///
/// * `current` - Grid at tick t (read only)
/// * `next` - Grid receiving tick t+1
///
/// # Panics
///
/// Panics if the two grids have different dimensions
pub fn step_fire(current: &ForestGrid, next: &mut ForestGrid) -> TickChanges {
    assert!(
        current.width() == next.width() && current.height() == next.height(),
        "Grid dimensions mismatch"
    );

    let width = current.width();
    let height = current.height();
    let src = current.as_slice();
    let dst = next.as_mut_slice();
    let mut changes = TickChanges::default();

    for row in 0..height {
        let row_lo = row.saturating_sub(1);
        let row_hi = (row + 1).min(height - 1);

        for col in 0..width {
            let idx = row * width + col;
            let cell = src[idx];
            let next_cell = match cell {
                Cell::Empty => Cell::Empty,
                Cell::Fire => {
                    changes.burned_out += 1;
                    Cell::Empty
                }
                Cell::Tree => {
                    let lit = cell.next(has_burning_neighbor(src, width, row_lo, row_hi, col));
                    if lit == Cell::Fire {
                        changes.ignited += 1;
                    }
                    lit
                }
            };
            dst[idx] = next_cell;
        }
    }

    changes
}

/// Whether any cell in the clamped 3x3 window around `col` is burning
///
/// The window includes the center cell, which is a tree whenever this is
/// called, so it never counts as a burning neighbor.
#[inline]
fn has_burning_neighbor(
    src: &[Cell],
    width: usize,
    row_lo: usize,
    row_hi: usize,
    col: usize,
) -> bool {
    let col_lo = col.saturating_sub(1);
    let col_hi = (col + 1).min(width - 1);
    (row_lo..=row_hi).any(|row| {
        let start = row * width;
        src[start + col_lo..=start + col_hi].contains(&Cell::Fire)
    })
}
