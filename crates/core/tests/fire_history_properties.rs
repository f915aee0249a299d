//! Whole-run properties of the wildfire history engine
//!
//! These tests drive `simulate` end to end and check the laws every history
//! must satisfy: length, determinism, the burn-out rule, terminal ash,
//! synchronous spread, and the behavior at the density extremes.

use approx::assert_abs_diff_eq;
use rayon::prelude::*;
use wildfire_core::{simulate, Cell, ForestGrid, History, SimulationParams};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn run(width: i64, height: i64, density: f64, steps: i64, seed: u64) -> History {
    simulate(width, height, density, steps, Some(seed)).expect("valid parameters")
}

#[test]
fn test_same_seed_is_bit_exact() {
    init_tracing();
    let a = run(80, 60, 0.6, 50, 2024);
    let b = run(80, 60, 0.6, 50, 2024);
    assert_eq!(a, b);
    assert_eq!(a.to_nested(), b.to_nested());
}

#[test]
fn test_different_seeds_give_different_forests() {
    let a = run(50, 50, 0.5, 0, 1);
    let b = run(50, 50, 0.5, 0, 2);
    assert_ne!(a.initial(), b.initial());
}

#[test]
fn test_history_length_is_steps_plus_one() {
    for steps in [0, 1, 2, 10, 99] {
        let history = run(20, 30, 0.6, steps, 9);
        assert_eq!(history.len(), usize::try_from(steps).unwrap() + 1);
        assert!(history
            .iter()
            .all(|f| f.width() == 20 && f.height() == 30));
    }
}

#[test]
fn test_zero_steps_returns_initial_grid_only() {
    let history = run(12, 12, 0.6, 0, 4);
    assert_eq!(history.len(), 1);
    assert_eq!(history.initial(), history.last());
}

#[test]
fn test_cell_transitions_follow_the_rule() {
    let history = run(60, 60, 0.6, 80, 31);
    let frames = history.frames();

    for pair in frames.windows(2) {
        let (before, after) = (&pair[0], &pair[1]);
        for (idx, (&was, &now)) in before.as_slice().iter().zip(after.as_slice()).enumerate() {
            match was {
                // Fire lasts exactly one tick
                Cell::Fire => assert_eq!(now, Cell::Empty, "fire persisted at {idx}"),
                // Empty ground and ash never change
                Cell::Empty => assert_eq!(now, Cell::Empty, "empty cell changed at {idx}"),
                // Trees either stay or catch fire
                Cell::Tree => assert_ne!(now, Cell::Empty, "tree vanished at {idx}"),
            }
        }
    }
}

#[test]
fn test_burned_cells_stay_ash() {
    let history = run(50, 40, 0.65, 120, 8);
    let cells = history.initial().len();
    let mut burned = vec![false; cells];

    for frame in history.frames() {
        for (idx, &cell) in frame.as_slice().iter().enumerate() {
            if burned[idx] {
                assert_eq!(cell, Cell::Empty, "ash reignited at {idx}");
            }
        }
        for (idx, &cell) in frame.as_slice().iter().enumerate() {
            if cell == Cell::Fire {
                burned[idx] = true;
            }
        }
    }
    assert!(burned.iter().any(|&b| b), "run should burn at least the ignition cell");
}

#[test]
fn test_snapshots_are_independent_copies() {
    // A dense forest changes every tick while the fire is alive; aliasing the
    // live grid would make every recorded frame equal to the last one.
    // A 15x15 fire lasts at least 8 ticks wherever it starts.
    let history = run(15, 15, 1.0, 7, 0);
    let frames = history.frames();
    for pair in frames.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    assert_eq!(history.initial().count(Cell::Fire), 1);
}

#[test]
fn test_full_density_burns_in_chebyshev_rings() {
    // With every cell a tree, the fire front at tick t is exactly the ring of
    // cells at Chebyshev distance t from the ignition point.
    let n = 21;
    let history = run(n, n, 1.0, 25, 13);
    let (ir, ic) = history.ignition().expect("full forest has an ignition");

    for (tick, frame) in history.iter().enumerate() {
        for row in 0..frame.height() {
            for col in 0..frame.width() {
                let dist = row.abs_diff(ir).max(col.abs_diff(ic));
                let expected = match dist.cmp(&tick) {
                    std::cmp::Ordering::Less => Cell::Empty,
                    std::cmp::Ordering::Equal => Cell::Fire,
                    std::cmp::Ordering::Greater => Cell::Tree,
                };
                assert_eq!(
                    frame.get(row, col),
                    expected,
                    "tick {tick}, cell ({row}, {col})"
                );
            }
        }
    }
}

#[test]
fn test_full_density_saturates() {
    let n = 30;
    let history = run(n, n, 1.0, n, 77);
    let last = history.last();
    assert_eq!(last.count(Cell::Tree), 0);
    assert_eq!(last.count(Cell::Fire), 0);

    let summary = history.summary();
    assert_eq!(summary.initial_trees, 900);
    assert_eq!(summary.burned_cells, 900);
    assert_abs_diff_eq!(summary.burned_fraction, 1.0);
}

#[test]
fn test_no_fuel_reaches_steady_state_after_first_tick() {
    for seed in 0..20 {
        let history = run(30, 30, 1e-6, 15, seed);
        let frames = history.frames();

        let changed = frames[0]
            .as_slice()
            .iter()
            .zip(frames[1].as_slice())
            .filter(|(a, b)| a != b)
            .count();
        assert!(changed <= 1, "only the ignition cell may change, seed {seed}");

        for frame in &frames[1..] {
            assert_eq!(frame, &frames[1], "seed {seed}");
        }
    }
}

#[test]
fn test_treeless_grid_gives_identical_frames() {
    // 1x1 grid almost never grows a tree at this density
    let history = (0..50)
        .map(|seed| run(1, 1, 1e-9, 4, seed))
        .find(|h| h.ignition().is_none())
        .expect("some seed leaves the cell empty");

    assert_eq!(history.len(), 5);
    assert!(history.iter().all(|f| f.get(0, 0) == Cell::Empty));
    assert_eq!(history.summary().initial_trees, 0);
}

#[test]
fn test_single_cell_fire_then_ash() {
    let history = run(1, 1, 1.0, 6, 3);
    assert_eq!(history.ignition(), Some((0, 0)));
    assert_eq!(history.cell(0, 0, 0), Some(Cell::Fire));
    for tick in 1..history.len() {
        assert_eq!(history.cell(tick, 0, 0), Some(Cell::Empty));
    }

    let mut distinct: Vec<&ForestGrid> = Vec::new();
    for frame in history.frames() {
        if !distinct.contains(&frame) {
            distinct.push(frame);
        }
    }
    assert_eq!(distinct.len(), 2);
}

#[test]
fn test_seeded_fraction_tracks_density() {
    for density in [0.2, 0.6, 0.9] {
        let history = run(200, 200, density, 0, 42);
        let stats = history.initial().stats();
        let fraction = stats.fuel() as f64 / stats.total() as f64;
        assert_abs_diff_eq!(fraction, density, epsilon = 0.01);
    }
}

#[test]
fn test_out_of_range_parameters_are_rejected() {
    let cases = [
        (10, 10, 0.0, 10, "density"),
        (10, 10, 1.5, 10, "density"),
        (0, 10, 0.5, 10, "width"),
        (10, 10, 0.5, -1, "steps"),
    ];
    for (width, height, density, steps, name) in cases {
        let err = simulate(width, height, density, steps, Some(1)).expect_err("rejected");
        assert_eq!(err.parameter(), name);
    }
}

#[test]
fn test_concurrent_runs_are_independent() {
    let seeds: Vec<u64> = (0..16).collect();

    let sequential: Vec<History> = seeds.iter().map(|&s| run(48, 48, 0.6, 40, s)).collect();
    let parallel: Vec<History> = seeds.par_iter().map(|&s| run(48, 48, 0.6, 40, s)).collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_service_sized_run() {
    init_tracing();
    let params = SimulationParams::new(200, 200, 0.6, 250).with_seed(5);
    let history = params.run().expect("valid parameters");
    assert_eq!(history.len(), 251);
    assert_eq!(history.values_len(), 251 * 200 * 200);
}
