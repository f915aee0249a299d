//! Grid storage for the wildfire automaton

pub mod forest_grid;

pub use forest_grid::ForestGrid;
