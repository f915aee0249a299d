//! Forest seeding and ignition placement
//!
//! Builds the tick-0 grid: an independent Bernoulli trial per cell decides
//! whether it holds a tree, then a single tree chosen uniformly at random is
//! set alight. Both steps draw from the caller's RNG so a seeded run is
//! reproducible.

use crate::core_types::Cell;
use crate::error::SimulationError;
use crate::grid::ForestGrid;
use rand::distr::{Bernoulli, Distribution};
use rand::Rng;

/// Plant a random forest
///
/// Cells are visited in row-major order and each becomes a tree with
/// probability `density`, otherwise empty ground.
///
/// # Arguments
///
/// * `width` - Grid width in cells (must be > 0)
/// * `height` - Grid height in cells (must be > 0)
/// * `density` - Probability that a cell holds a tree, in (0, 1]
/// * `rng` - Random stream for the run
///
/// # Errors
///
/// Returns `SimulationError::InvalidParameter` for a zero dimension, a grid
/// too large to allocate, or a density outside (0, 1].
pub fn seed_forest<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    density: f64,
    rng: &mut R,
) -> Result<ForestGrid, SimulationError> {
    if width == 0 {
        return Err(SimulationError::invalid_parameter("width", "must be positive, got 0"));
    }
    if height == 0 {
        return Err(SimulationError::invalid_parameter("height", "must be positive, got 0"));
    }
    if width
        .checked_mul(height)
        .filter(|&cells| cells <= isize::MAX.unsigned_abs())
        .is_none()
    {
        return Err(SimulationError::invalid_parameter(
            "width",
            format!("grid of {width}x{height} cells is too large"),
        ));
    }
    // Negated so NaN is rejected too
    if !(density > 0.0 && density <= 1.0) {
        return Err(SimulationError::invalid_parameter(
            "density",
            format!("must be in (0, 1], got {density}"),
        ));
    }
    let trial = Bernoulli::new(density).map_err(|e| {
        SimulationError::invalid_parameter("density", format!("{e}, got {density}"))
    })?;

    let mut grid = ForestGrid::new(width, height);
    for cell in grid.as_mut_slice() {
        if trial.sample(rng) {
            *cell = Cell::Tree;
        }
    }
    Ok(grid)
}

/// Set one tree, chosen uniformly among all trees, on fire
///
/// Returns the `(row, col)` of the ignited cell, or `None` when the grid has
/// no trees (the run then stays static).
pub fn ignite_random_tree<R: Rng + ?Sized>(
    grid: &mut ForestGrid,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let tree_count = grid.count(Cell::Tree);
    if tree_count == 0 {
        return None;
    }

    let pick = rng.random_range(0..tree_count);
    let idx = grid
        .as_slice()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Tree)
        .nth(pick)
        .map(|(idx, _)| idx)?;

    grid.as_mut_slice()[idx] = Cell::Fire;
    Some(grid.coords(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::SimRng;

    #[test]
    fn test_full_density_plants_every_cell() {
        let mut rng = SimRng::from_seed_u64(7);
        let grid = seed_forest(12, 9, 1.0, &mut rng).expect("valid parameters");
        assert_eq!(grid.count(Cell::Tree), 12 * 9);
    }

    #[test]
    fn test_seeding_never_places_fire() {
        let mut rng = SimRng::from_seed_u64(3);
        let grid = seed_forest(40, 40, 0.5, &mut rng).expect("valid parameters");
        assert_eq!(grid.count(Cell::Fire), 0);
        assert!(grid.count(Cell::Tree) > 0);
        assert!(grid.count(Cell::Empty) > 0);
    }

    #[test]
    fn test_seeding_rejects_bad_density() {
        let mut rng = SimRng::from_seed_u64(0);
        for density in [0.0, -0.2, 1.5, f64::NAN] {
            let err = seed_forest(4, 4, density, &mut rng).expect_err("density rejected");
            assert_eq!(err.parameter(), "density");
        }
    }

    #[test]
    fn test_seeding_rejects_zero_dimensions() {
        let mut rng = SimRng::from_seed_u64(0);
        let err = seed_forest(0, 4, 0.5, &mut rng).expect_err("width rejected");
        assert_eq!(err.parameter(), "width");
        let err = seed_forest(4, 0, 0.5, &mut rng).expect_err("height rejected");
        assert_eq!(err.parameter(), "height");
    }

    #[test]
    fn test_seeding_rejects_overflowing_grid() {
        let mut rng = SimRng::from_seed_u64(0);
        let err = seed_forest(usize::MAX, 2, 0.5, &mut rng).expect_err("cell count overflows");
        assert_eq!(err.parameter(), "width");
        let err =
            seed_forest(usize::MAX / 2, 2, 0.5, &mut rng).expect_err("beyond allocation limit");
        assert_eq!(err.parameter(), "width");
    }

    #[test]
    fn test_ignition_lands_on_a_tree() {
        let mut rng = SimRng::from_seed_u64(11);
        let mut grid = seed_forest(30, 20, 0.4, &mut rng).expect("valid parameters");
        let trees_before = grid.count(Cell::Tree);

        let (row, col) = ignite_random_tree(&mut grid, &mut rng).expect("forest has trees");

        assert_eq!(grid.get(row, col), Cell::Fire);
        assert_eq!(grid.count(Cell::Fire), 1);
        assert_eq!(grid.count(Cell::Tree), trees_before - 1);
    }

    #[test]
    fn test_ignition_without_trees_is_none() {
        let mut rng = SimRng::from_seed_u64(11);
        let mut grid = ForestGrid::new(5, 5);
        assert_eq!(ignite_random_tree(&mut grid, &mut rng), None);
        assert_eq!(grid, ForestGrid::new(5, 5));
    }

    #[test]
    fn test_single_tree_is_always_chosen() {
        let mut grid = ForestGrid::from_ascii(&["...", ".T.", "..."]).expect("valid grid");
        let mut rng = SimRng::from_seed_u64(99);
        assert_eq!(ignite_random_tree(&mut grid, &mut rng), Some((1, 1)));
    }

    #[test]
    fn test_ignition_reaches_every_tree() {
        // With enough draws, each of the four trees should be picked at least once
        let base = ForestGrid::from_ascii(&["T..T", "....", "T..T"]).expect("valid grid");
        let mut rng = SimRng::from_seed_u64(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let mut grid = base.clone();
            if let Some(pos) = ignite_random_tree(&mut grid, &mut rng) {
                seen.insert(pos);
            }
        }
        assert_eq!(seen.len(), 4);
    }
}
