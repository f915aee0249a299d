//! Frame color export for renderers
//!
//! Maps cell states to RGB colors and packs frames into RGB8 buffers ready
//! for an image or animation encoder. Encoding itself is left to the caller.

use crate::core_types::Cell;
use crate::grid::ForestGrid;
use crate::simulation::History;
use serde::{Deserialize, Serialize};

/// RGB color per cell state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Empty ground and ash
    pub empty: [u8; 3],
    /// Unburned trees
    pub tree: [u8; 3],
    /// Burning cells
    pub fire: [u8; 3],
}

impl Default for Palette {
    /// Colors used by the web service's animated view
    fn default() -> Self {
        Self {
            empty: [50, 50, 50],
            tree: [34, 10, 34],
            fire: [0, 95, 0],
        }
    }
}

impl Palette {
    /// Color of one cell
    #[inline]
    #[must_use]
    pub const fn color(&self, cell: Cell) -> [u8; 3] {
        match cell {
            Cell::Empty => self.empty,
            Cell::Tree => self.tree,
            Cell::Fire => self.fire,
        }
    }

    /// Pack a frame into a row-major RGB8 buffer (`height * width * 3` bytes)
    #[must_use]
    pub fn frame_rgb(&self, grid: &ForestGrid) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(grid.len() * 3);
        for &cell in grid.as_slice() {
            rgb.extend_from_slice(&self.color(cell));
        }
        rgb
    }

    /// Pack every frame of a history, in temporal order
    #[must_use]
    pub fn history_rgb(&self, history: &History) -> Vec<Vec<u8>> {
        history.iter().map(|frame| self.frame_rgb(frame)).collect()
    }
}
