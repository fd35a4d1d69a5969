//! Grid state: cell encoding and the flat forest grid

pub mod cell;
pub mod forest_grid;

// Re-export main types
pub use cell::CellState;
pub use forest_grid::{ForestGrid, GridCensus};
