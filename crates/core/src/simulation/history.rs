//! Recorded run history
//!
//! A `History` is the complete, ordered list of grid snapshots of one run,
//! from the ignited tick-0 grid to the grid after the last step. Every
//! snapshot is an owned copy, so nothing done to the live grid after a frame
//! was recorded can change it.

use crate::core_types::{BurnSummary, Cell, FrameStats};
use crate::grid::ForestGrid;
use serde::Serialize;

/// Ordered grid snapshots of one run (`steps + 1` frames)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct History {
    width: usize,
    height: usize,
    seed: Option<u64>,
    ignition: Option<(usize, usize)>,
    frames: Vec<ForestGrid>,
}

impl History {
    /// Assemble a history from its frames
    ///
    /// Only the engine builds histories; frames are always non-empty and
    /// share the given dimensions.
    pub(crate) fn new(
        width: usize,
        height: usize,
        seed: Option<u64>,
        ignition: Option<(usize, usize)>,
        frames: Vec<ForestGrid>,
    ) -> Self {
        debug_assert!(!frames.is_empty(), "History must hold the initial frame");
        debug_assert!(frames
            .iter()
            .all(|f| f.width() == width && f.height() == height));
        Self {
            width,
            height,
            seed,
            ignition,
            frames,
        }
    }

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

    /// Seed the run was generated from
    ///
    /// Always set for runs started through [`crate::simulate`] or
    /// [`crate::SimulationParams::run`], including unseeded ones, so any run
    /// can be replayed. `None` when the caller supplied its own RNG.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// `(row, col)` of the cell set alight at tick 0, `None` if the forest had no trees
    #[must_use]
    pub const fn ignition(&self) -> Option<(usize, usize)> {
        self.ignition
    }

    /// Number of frames (`steps + 1`)
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false: a history holds at least the initial frame
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of ticks computed
    #[must_use]
    pub fn steps(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    /// All frames in temporal order
    #[must_use]
    pub fn frames(&self) -> &[ForestGrid] {
        &self.frames
    }

    /// Frame at `tick`, if the run got that far
    #[must_use]
    pub fn frame(&self, tick: usize) -> Option<&ForestGrid> {
        self.frames.get(tick)
    }

    /// Tick-0 grid (after ignition)
    #[must_use]
    pub fn initial(&self) -> &ForestGrid {
        &self.frames[0]
    }

    /// Grid after the last step
    #[must_use]
    pub fn last(&self) -> &ForestGrid {
        &self.frames[self.frames.len() - 1]
    }

    /// Iterate over frames in temporal order
    pub fn iter(&self) -> std::slice::Iter<'_, ForestGrid> {
        self.frames.iter()
    }

    /// Take ownership of the frames
    #[must_use]
    pub fn into_frames(self) -> Vec<ForestGrid> {
        self.frames
    }

    /// Cell state at `(tick, row, col)`
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds
    #[must_use]
    pub fn cell(&self, tick: usize, row: usize, col: usize) -> Option<Cell> {
        self.frame(tick).map(|f| f.get(row, col))
    }

    /// Cell counts of every frame
    #[must_use]
    pub fn stats(&self) -> Vec<FrameStats> {
        self.frames.iter().map(ForestGrid::stats).collect()
    }

    /// Summary of how much of the forest burned and when
    #[must_use]
    pub fn summary(&self) -> BurnSummary {
        BurnSummary::from_frames(&self.stats())
    }

    /// Frames as nested `frame × row × col` values
    #[must_use]
    pub fn to_nested(&self) -> Vec<Vec<Vec<u8>>> {
        self.frames.iter().map(ForestGrid::to_rows).collect()
    }

    /// Size in bytes of [`History::write_values`] output
    #[must_use]
    pub fn values_len(&self) -> usize {
        self.frames.len() * self.width * self.height
    }

    /// Write every frame back to back into `out`, one byte per cell
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != self.values_len()`
    pub fn write_values(&self, out: &mut [u8]) {
        assert_eq!(out.len(), self.values_len(), "Output buffer size mismatch");
        let frame_len = self.width * self.height;
        if frame_len == 0 {
            return;
        }
        for (chunk, frame) in out.chunks_exact_mut(frame_len).zip(&self.frames) {
            frame.write_values(chunk);
        }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a ForestGrid;
    type IntoIter = std::slice::Iter<'a, ForestGrid>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
