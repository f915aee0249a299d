//! Flat row-major cell grid
//!
//! `ForestGrid` stores the whole forest as a single `Vec<Cell>` indexed by
//! `row * width + col`, so a tick is a linear pass over one allocation.

use crate::core_types::{Cell, FrameStats, InvalidCellValue};
use serde::Serialize;

/// Fixed-size rectangular grid of cells in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ForestGrid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl ForestGrid {
    /// Create a grid of empty ground
    ///
    /// # Arguments
    ///
    /// * `width` - Number of columns
    /// * `height` - Number of rows
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Cell::Empty)
    }

    /// Create a grid with every cell set to `cell`
    #[must_use]
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            cells: vec![cell; width * height],
            width,
            height,
        }
    }

    /// Wrap an existing row-major cell buffer
    ///
    /// Returns `None` if `cells.len() != width * height`.
    #[must_use]
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Option<Self> {
        (cells.len() == width * height).then_some(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a grid from text rows using the `.`/`T`/`*` glyphs
    ///
    /// Whitespace is ignored. Returns `None` on an unknown glyph or ragged rows.
    #[must_use]
    pub fn from_ascii(rows: &[&str]) -> Option<Self> {
        let height = rows.len();
        let mut cells = Vec::new();
        let mut width = None;
        for row in rows {
            let before = cells.len();
            for ch in row.chars().filter(|c| !c.is_whitespace()) {
                cells.push(match ch {
                    '.' => Cell::Empty,
                    'T' => Cell::Tree,
                    '*' => Cell::Fire,
                    _ => return None,
                });
            }
            let row_width = cells.len() - before;
            if *width.get_or_insert(row_width) != row_width {
                return None;
            }
        }
        Self::from_cells(width.unwrap_or(0), height, cells)
    }

    /// Build a grid from raw renderer values (0, 1 or 2 per cell)
    ///
    /// # Errors
    ///
    /// Returns the first value outside {0, 1, 2}. A buffer whose length is
    /// not `width * height` yields `Ok(None)`.
    pub fn from_values(
        width: usize,
        height: usize,
        values: &[u8],
    ) -> Result<Option<Self>, InvalidCellValue> {
        let cells = values
            .iter()
            .map(|&v| Cell::try_from(v))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_cells(width, height, cells))
    }

    /// Grid width in cells
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a grid with no cells
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of `(row, col)`
    #[inline]
    #[must_use]
    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// `(row, col)` of a flat index
    #[inline]
    #[must_use]
    pub const fn coords(&self, idx: usize) -> (usize, usize) {
        (idx / self.width, idx % self.width)
    }

    /// Get the cell at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.height && col < self.width,
            "Coordinates out of bounds"
        );
        self.cells[self.index(row, col)]
    }

    /// Set the cell at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(
            row < self.height && col < self.width,
            "Coordinates out of bounds"
        );
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Cells in row-major order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable cells in row-major order
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterate over rows
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        // chunks(0) panics, and a zero-width grid has no rows to yield anyway
        self.cells.chunks(self.width.max(1))
    }

    /// Number of cells in state `cell`
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Counts of every state
    #[must_use]
    pub fn stats(&self) -> FrameStats {
        let mut stats = FrameStats::default();
        for &cell in &self.cells {
            stats.record(cell);
        }
        stats
    }

    /// Copy the cells into a flat `u8` buffer (row-major, one byte per cell)
    #[must_use]
    pub fn to_values(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.value()).collect()
    }

    /// Write the cells into `out` as `u8` values
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != self.len()`
    pub fn write_values(&self, out: &mut [u8]) {
        assert_eq!(out.len(), self.cells.len(), "Output buffer size mismatch");
        for (dst, cell) in out.iter_mut().zip(&self.cells) {
            *dst = cell.value();
        }
    }

    /// Copy the cells into nested rows of `u8` values
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.value()).collect())
            .collect()
    }

    /// Render as text, one line per row
    #[must_use]
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height);
        for row in self.rows() {
            out.extend(row.iter().map(|c| c.glyph()));
            out.push('\n');
        }
        out
    }
}
