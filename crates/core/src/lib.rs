//! Wildfire History Engine
//!
//! Simulates a forest fire as a three-state cellular automaton and returns
//! every tick as a grid snapshot, ready for a renderer to turn into an
//! animation.
//!
//! ## Model
//!
//! - Each cell starts as a tree with probability `density`, otherwise empty
//! - One tree, chosen uniformly at random, is set alight
//! - Each tick, fire burns out to ash and ignites every neighboring tree
//!   (8-neighborhood, bounded grid)
//!
//! ## Example
//!
//! ```rust
//! use wildfire_core::{simulate, Cell};
//!
//! let history = simulate(64, 64, 0.6, 40, Some(7)).expect("valid parameters");
//! assert_eq!(history.len(), 41);
//! assert_eq!(history.initial().count(Cell::Fire), 1);
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Grid storage, the automaton rule, and run orchestration
pub mod grid;
pub mod simulation;
pub mod solver;

pub mod visual_export;

// Re-export core types
pub use core_types::{BurnSummary, Cell, FrameStats, InvalidCellValue};
pub use error::SimulationError;
pub use grid::ForestGrid;

// Re-export engine entry points
pub use simulation::{
    simulate, History, SimRng, SimulationConfig, SimulationParams, ValidatedParams,
    DEFAULT_MAX_STEPS,
};
pub use solver::{ignite_random_tree, seed_forest, step_fire, TickChanges};
pub use visual_export::Palette;
