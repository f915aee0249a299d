//! Cellular automaton solver
//!
//! The two halves of a run: [`ignition`] builds the tick-0 grid from a
//! density and an RNG, [`transition`] advances a grid by one synchronous
//! tick. History assembly in [`crate::simulation`] drives both.

pub mod ignition;
pub mod transition;

pub use ignition::{ignite_random_tree, seed_forest};
pub use transition::{step_fire, TickChanges};
