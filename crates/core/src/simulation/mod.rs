//! Simulation driver
//!
//! `FireSimulation` owns the current forest grid and a back buffer of the same
//! length. Each step computes the next generation into the back buffer and
//! swaps the two, so the grid is replaced wholesale and no cell is mutated in
//! place while it is being read. Steps always run one after another; only the
//! row partitions inside a step run concurrently.

pub mod config;
pub mod report;
pub mod timing;

pub use config::SimulationConfig;
pub use report::{append_record, RunRecord};
pub use timing::{RunTiming, StepTimer};

use crate::grid::{CellState, ForestGrid};
use crate::solver::StepEngine;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

/// Forest fire simulation over a fixed-size grid
pub struct FireSimulation {
    grid: ForestGrid,
    /// Previous generation, overwritten by the next step
    back: Vec<CellState>,
    engine: StepEngine,
    steps_taken: usize,
}

impl FireSimulation {
    /// Create a simulation with a randomly planted forest
    ///
    /// Trees are placed with draws from `rng`; `config.seed` is ignored. Uses
    /// `config.workers` partitions per step, or one per logical processor.
    ///
    /// # Arguments
    ///
    /// * `config` - Grid size, tree density and worker count
    /// * `rng` - Source of uniform draws for tree placement
    pub fn new<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Self {
        let grid = ForestGrid::random(config.width, config.height, config.density, rng);
        let engine = config.workers.map_or_else(StepEngine::default, StepEngine::new);

        info!(
            "Forest initialized: {}x{} grid, density={:.2}, workers={}",
            config.width,
            config.height,
            config.density,
            engine.workers()
        );

        Self::from_grid(grid, engine)
    }

    /// Create a simulation seeded from `config.seed`
    ///
    /// Without a seed the forest is planted from an OS-seeded generator and
    /// cannot be replayed.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(config, &mut rng)
    }

    /// Create a simulation from an existing grid
    pub fn from_grid(grid: ForestGrid, engine: StepEngine) -> Self {
        let back = vec![CellState::Empty; grid.len()];
        Self {
            grid,
            back,
            engine,
            steps_taken: 0,
        }
    }

    /// Advance the simulation by one step
    pub fn step(&mut self) {
        let _timer = StepTimer::new(self.steps_taken);
        self.engine.step_into(&self.grid, &mut self.back);
        self.grid.swap_cells(&mut self.back);
        self.steps_taken += 1;
    }

    /// Run `steps` sequential steps and measure the wall-clock time
    pub fn run(&mut self, steps: usize) -> RunTiming {
        let start = Instant::now();
        for _ in 0..steps {
            self.step();
        }
        let timing = RunTiming {
            elapsed: start.elapsed(),
            steps,
        };

        info!(
            "Ran {} steps in {:?} ({:?} per step)",
            steps,
            timing.elapsed,
            timing.per_step()
        );
        debug!(census = ?self.grid.census(), "Grid after run");
        timing
    }

    /// Step until no cell is burning, at most `max_steps` times
    ///
    /// # Returns
    ///
    /// Number of steps executed
    pub fn run_until_burnt_out(&mut self, max_steps: usize) -> usize {
        let mut executed = 0;
        while executed < max_steps && !self.grid.is_burnt_out() {
            self.step();
            executed += 1;
        }
        debug!(executed, max_steps, "Fire burnt out or step cap reached");
        executed
    }

    /// Current grid
    pub fn grid(&self) -> &ForestGrid {
        &self.grid
    }

    /// Step engine used for each step
    pub fn engine(&self) -> StepEngine {
        self.engine
    }

    /// Number of steps taken since construction
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Get statistics
    #[must_use]
    pub fn get_stats(&self) -> SimulationStats {
        let census = self.grid.census();
        SimulationStats {
            steps_taken: self.steps_taken,
            total_cells: self.grid.len(),
            trees: census.trees,
            burning: census.burning,
            empty: census.empty,
        }
    }
}

/// Statistics for the simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationStats {
    pub steps_taken: usize,
    pub total_cells: usize,
    pub trees: usize,
    pub burning: usize,
    pub empty: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridCensus;

    fn cross() -> ForestGrid {
        ForestGrid::parse("T T T\nT F T\nT T T").unwrap()
    }

    #[test]
    fn test_simulation_creation() {
        let config = SimulationConfig {
            workers: Some(3),
            ..SimulationConfig::square(20)
        };
        let sim = FireSimulation::new(&config, &mut StdRng::seed_from_u64(5));

        assert_eq!(sim.grid().width(), 20);
        assert_eq!(sim.grid().height(), 20);
        assert_eq!(sim.grid().get(10, 10), Some(CellState::Fire));
        assert_eq!(sim.engine().workers(), 3);
        assert_eq!(sim.steps_taken(), 0);
    }

    #[test]
    fn test_from_config_replays_seed() {
        let config = SimulationConfig {
            seed: Some(42),
            workers: Some(2),
            ..SimulationConfig::square(24)
        };
        let a = FireSimulation::from_config(&config);
        let b = FireSimulation::from_config(&config);
        assert_eq!(a.grid(), b.grid());
        assert_eq!(
            a.grid(),
            FireSimulation::new(&config, &mut StdRng::seed_from_u64(42)).grid()
        );

        let other = FireSimulation::from_config(&SimulationConfig {
            seed: Some(43),
            ..config
        });
        assert_ne!(a.grid(), other.grid());
    }

    #[test]
    fn test_infinite_density_plants_every_cell() {
        let config = SimulationConfig {
            density: f64::INFINITY,
            seed: Some(1),
            ..SimulationConfig::square(8)
        };
        assert!(config.validate().is_ok());
        let stats = FireSimulation::from_config(&config).get_stats();
        assert_eq!((stats.trees, stats.burning, stats.empty), (63, 1, 0));

        let config = SimulationConfig {
            density: f64::NEG_INFINITY,
            ..config
        };
        let stats = FireSimulation::from_config(&config).get_stats();
        assert_eq!((stats.trees, stats.burning, stats.empty), (0, 1, 63));
    }

    #[test]
    fn test_step_matches_engine() {
        let engine = StepEngine::new(2);
        let mut sim = FireSimulation::from_grid(cross(), engine);

        sim.step();
        assert_eq!(sim.grid(), &engine.step(&cross()));
        assert_eq!(sim.steps_taken(), 1);
    }

    #[test]
    fn test_run_counts_steps() {
        let mut sim = FireSimulation::from_grid(cross(), StepEngine::new(1));
        let timing = sim.run(4);
        assert_eq!(timing.steps, 4);
        assert_eq!(sim.steps_taken(), 4);
        assert!(sim.grid().is_burnt_out());
    }

    #[test]
    fn test_length_invariant_across_steps() {
        let config = SimulationConfig {
            workers: Some(4),
            ..SimulationConfig::square(31)
        };
        let mut sim = FireSimulation::new(&config, &mut StdRng::seed_from_u64(11));
        for _ in 0..10 {
            sim.step();
            assert_eq!(sim.grid().len(), 31 * 31);
            assert_eq!(sim.get_stats().total_cells, 31 * 31);
        }
    }

    #[test]
    fn test_run_until_burnt_out() {
        let mut sim = FireSimulation::from_grid(cross(), StepEngine::new(2));
        assert_eq!(sim.run_until_burnt_out(100), 3);
        assert!(sim.grid().is_burnt_out());

        // Already burnt out: nothing to do
        assert_eq!(sim.run_until_burnt_out(100), 0);
    }

    #[test]
    fn test_run_until_burnt_out_respects_cap() {
        let grid = ForestGrid::parse("F T T T T T T T").unwrap();
        let mut sim = FireSimulation::from_grid(grid, StepEngine::new(1));
        assert_eq!(sim.run_until_burnt_out(3), 3);
        assert!(!sim.grid().is_burnt_out());
    }

    #[test]
    fn test_stats() {
        let sim = FireSimulation::from_grid(cross(), StepEngine::new(1));
        let stats = sim.get_stats();
        assert_eq!(stats.trees, 8);
        assert_eq!(stats.burning, 1);
        assert_eq!(stats.empty, 0);
        assert_eq!(
            sim.grid().census(),
            GridCensus {
                empty: 0,
                trees: 8,
                burning: 1
            }
        );
    }
}
