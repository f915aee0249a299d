//! Core types and utilities

pub mod cell;
pub mod stats;

pub use cell::{Cell, InvalidCellValue};
pub use stats::{BurnSummary, FrameStats};
