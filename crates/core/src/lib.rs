//! Forest Fire Simulation Core Library
//!
//! A cellular automaton wildfire model on a 2D grid. Cells are empty, tree or
//! fire; each step every burning cell burns out and every tree with a burning
//! cardinal neighbour ignites.
//!
//! ## Parallel stepping
//!
//! - The grid is split into contiguous row partitions, one per worker
//! - Each worker reads the previous generation and writes only its own rows
//!   of a separate output buffer
//! - The step completes when every partition has joined, then the buffers swap

// Error types
pub mod error;

// Grid state and step engine
pub mod grid;
pub mod solver;

// Driver, configuration and run records
pub mod simulation;

// Re-export core types
pub use error::{ConfigError, GridError, ReportError};
pub use grid::{CellState, ForestGrid, GridCensus};
pub use solver::StepEngine;

// Re-export driver types
pub use simulation::{
    append_record, FireSimulation, RunRecord, RunTiming, SimulationConfig, SimulationStats,
};
