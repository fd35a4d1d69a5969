//! Per-cell transition rule
//!
//! The next state of a cell depends only on its own state and its four
//! cardinal neighbours in the previous grid:
//!
//! | Current | Condition                       | Next  |
//! |---------|---------------------------------|-------|
//! | Fire    | always                          | Empty |
//! | Empty   | always                          | Empty |
//! | Tree    | any in-bounds cardinal is Fire  | Fire  |
//! | Tree    | otherwise                       | Tree  |
//!
//! Diagonals are never consulted. Neighbours outside the grid are skipped, so
//! edge cells have three neighbours and corner cells two.

use crate::grid::{CellState, ForestGrid};

/// Compute the next state of the cell at `(row, col)`
///
/// `grid` is the previous generation and is only read.
#[inline]
pub fn next_state(grid: &ForestGrid, row: usize, col: usize) -> CellState {
    match grid.cells()[grid.index(row, col)] {
        CellState::Fire | CellState::Empty => CellState::Empty,
        CellState::Tree => {
            if has_burning_neighbor(grid, row, col) {
                CellState::Fire
            } else {
                CellState::Tree
            }
        }
    }
}

/// Check up, down, left, right in that order, stopping at the first fire
#[inline(always)]
fn has_burning_neighbor(grid: &ForestGrid, row: usize, col: usize) -> bool {
    let cells = grid.cells();
    let width = grid.width();
    let idx = grid.index(row, col);

    (row > 0 && cells[idx - width].is_burning())
        || (row + 1 < grid.height() && cells[idx + width].is_burning())
        || (col > 0 && cells[idx - 1].is_burning())
        || (col + 1 < width && cells[idx + 1].is_burning())
}
