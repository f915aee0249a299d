//! Cell states for the wildfire automaton
//!
//! Every grid position holds exactly one of three states. The numeric values
//! are part of the contract with renderers, which receive frames as plain
//! `u8` buffers.

use serde::{Deserialize, Serialize};

/// State of a single grid cell
///
/// | value | state |
/// |---|---|
/// | 0 | Empty ground, or Ash left behind by a fire |
/// | 1 | Tree (unburned fuel) |
/// | 2 | Fire (burns for exactly one tick) |
///
/// Empty and Ash share a value: Ash is only distinguishable by history,
/// since a cell can only reach it by burning out.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Bare ground or burned-out ash (terminal)
    #[default]
    Empty = 0,
    /// Flammable, unburned vegetation
    Tree = 1,
    /// Actively burning
    Fire = 2,
}

impl Cell {
    /// Integer value of this state as seen by renderers
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Character used for text rendering (`.` empty, `T` tree, `*` fire)
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Tree => 'T',
            Self::Fire => '*',
        }
    }

    /// State of this cell on the next tick
    ///
    /// `burning_neighbor` is whether any Moore neighbor is on fire in the
    /// current tick. Fire always burns out, trees catch from burning
    /// neighbors, and empty ground never changes.
    #[inline]
    #[must_use]
    pub const fn next(self, burning_neighbor: bool) -> Self {
        match self {
            Self::Fire => Self::Empty,
            Self::Tree if burning_neighbor => Self::Fire,
            other => other,
        }
    }
}

/// Error returned when converting an integer outside {0, 1, 2} into a [`Cell`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCellValue(pub u8);

impl std::fmt::Display for InvalidCellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid cell value {}: expected 0, 1 or 2", self.0)
    }
}

impl std::error::Error for InvalidCellValue {}

impl TryFrom<u8> for Cell {
    type Error = InvalidCellValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Tree),
            2 => Ok(Self::Fire),
            other => Err(InvalidCellValue(other)),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.value()
    }
}
