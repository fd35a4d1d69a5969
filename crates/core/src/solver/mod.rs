//! Step engine for the forest fire automaton
//!
//! Splits the grid into row partitions, applies the transition rule to every
//! cell of each partition in parallel, and writes the result into a separate
//! buffer.
//!
//! # Example
//!
//! ```
//! use forest_fire_core::solver::StepEngine;
//! use forest_fire_core::ForestGrid;
//!
//! let grid = ForestGrid::parse("T T T\nT F T\nT T T").unwrap();
//! let next = StepEngine::new(2).step(&grid);
//! assert_eq!(next.to_string(), "T F T\nF . F\nT F T\n");
//! ```

mod engine;
pub mod partition;
pub mod transition;

// Re-exports
pub use engine::StepEngine;
pub use partition::{partition_rows, RowRange};
pub use transition::next_state;
