//! Integration tests for fire spread on whole grids
//!
//! These tests drive `FireSimulation` through its public API and check the
//! automaton properties that must hold for any grid: burnout, cardinal-only
//! spread, edge handling and independence from the number of row partitions.

use forest_fire_core::solver::StepEngine;
use forest_fire_core::{CellState, FireSimulation, ForestGrid, SimulationConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("forest_fire_core=debug")
        .with_test_writer()
        .try_init();
}

fn random_forest(width: usize, height: usize, seed: u64) -> ForestGrid {
    ForestGrid::random(width, height, 0.6, &mut StdRng::seed_from_u64(seed))
}

/// Check the transition rule cell by cell between two generations
fn assert_valid_transition(prev: &ForestGrid, next: &ForestGrid) {
    for row in 0..prev.height() {
        for col in 0..prev.width() {
            let before = prev.get(row, col).unwrap();
            let after = next.get(row, col).unwrap();
            match before {
                CellState::Fire | CellState::Empty => {
                    assert_eq!(after, CellState::Empty, "({row}, {col}) should be empty");
                }
                CellState::Tree => {
                    let burning_neighbor = [
                        row.checked_sub(1).map(|r| (r, col)),
                        Some((row + 1, col)),
                        col.checked_sub(1).map(|c| (row, c)),
                        Some((row, col + 1)),
                    ]
                    .into_iter()
                    .flatten()
                    .any(|(r, c)| prev.get(r, c) == Some(CellState::Fire));

                    let expected = if burning_neighbor {
                        CellState::Fire
                    } else {
                        CellState::Tree
                    };
                    assert_eq!(after, expected, "({row}, {col}) transition");
                }
            }
        }
    }
}

#[test]
fn test_cross_scenario_burns_out() {
    init_logging();
    let grid = ForestGrid::parse("T T T\nT F T\nT T T").unwrap();
    let mut sim = FireSimulation::from_grid(grid, StepEngine::new(2));

    sim.step();
    assert_eq!(sim.grid().to_string(), "T F T\nF . F\nT F T\n");

    sim.step();
    assert_eq!(sim.grid().to_string(), "F . F\n. . .\nF . F\n");

    sim.step();
    assert!(sim.grid().cells().iter().all(|&c| c == CellState::Empty));

    // Fixed point
    let before = sim.grid().clone();
    sim.run(5);
    assert_eq!(sim.grid(), &before);
}

#[test]
fn test_every_step_follows_transition_rule() {
    init_logging();
    let mut sim = FireSimulation::from_grid(random_forest(41, 29, 17), StepEngine::new(5));
    for _ in 0..25 {
        let prev = sim.grid().clone();
        sim.step();
        assert_eq!(sim.grid().len(), 41 * 29);
        assert_valid_transition(&prev, sim.grid());
    }
}

#[test]
fn test_partition_invariance() {
    init_logging();
    let initial = random_forest(64, 48, 4242);

    let run = |workers: usize| {
        let mut sim = FireSimulation::from_grid(initial.clone(), StepEngine::new(workers));
        sim.run(40);
        sim.grid().clone()
    };

    let reference = run(1);
    for workers in [2, 5, 8, 13, 47, 48] {
        assert_eq!(run(workers), reference, "workers={workers}");
    }
}

#[test]
fn test_diagonal_fire_does_not_spread() {
    let grid = ForestGrid::parse("F . .\n. T .\n. . F").unwrap();
    let mut sim = FireSimulation::from_grid(grid, StepEngine::new(3));
    sim.step();
    assert_eq!(sim.grid().get(1, 1), Some(CellState::Tree));
}

#[test]
fn test_fire_on_edges_and_corners() {
    // Fire in every corner of a full forest, stepped with one worker per row
    let grid = ForestGrid::parse("F T T F\nT T T T\nT T T T\nF T T F").unwrap();
    let mut sim = FireSimulation::from_grid(grid, StepEngine::new(4));
    sim.step();
    assert_eq!(
        sim.grid().to_string(),
        ". F F .\nF T T F\nF T T F\n. F F .\n"
    );
}

#[test]
fn test_empty_grid_is_fixed_point() {
    let grid = ForestGrid::from_cells(7, 5, vec![CellState::Empty; 35]).unwrap();
    let mut sim = FireSimulation::from_grid(grid.clone(), StepEngine::default());
    sim.run(10);
    assert_eq!(sim.grid(), &grid);
}

#[test]
fn test_full_forest_burns_as_diamond() {
    init_logging();
    let config = SimulationConfig {
        density: 1.0,
        workers: Some(3),
        ..SimulationConfig::square(21)
    };
    let mut sim = FireSimulation::new(&config, &mut StdRng::seed_from_u64(0));
    sim.run(4);

    // After k steps the burning front is the ring at Manhattan distance k
    let (cr, cc) = sim.grid().center();
    for row in 0..21_usize {
        for col in 0..21_usize {
            let distance = row.abs_diff(cr) + col.abs_diff(cc);
            let expected = match distance {
                d if d < 4 => CellState::Empty,
                4 => CellState::Fire,
                _ => CellState::Tree,
            };
            assert_eq!(sim.grid().get(row, col), Some(expected), "({row}, {col})");
        }
    }

    let executed = sim.run_until_burnt_out(1000);
    assert!(sim.grid().is_burnt_out());
    assert_eq!(sim.grid().census().empty, 21 * 21);
    // Farthest corner is 20 cells away; it burns at step 20 and is empty at 21
    assert_eq!(sim.steps_taken(), 21);
    assert_eq!(executed, 17);
}
