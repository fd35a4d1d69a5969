//! Flat row-major forest grid
//!
//! The grid is a single `Vec<CellState>` of length `width * height` with
//! `index(row, col) = row * width + col`. Edges are hard boundaries: there is
//! no wraparound, and the dimensions never change after construction.

use super::cell::CellState;
use crate::error::GridError;
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Count of cells in each state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCensus {
    pub empty: usize,
    pub trees: usize,
    pub burning: usize,
}

impl GridCensus {
    fn record(mut self, cell: CellState) -> Self {
        match cell {
            CellState::Empty => self.empty += 1,
            CellState::Tree => self.trees += 1,
            CellState::Fire => self.burning += 1,
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            empty: self.empty + other.empty,
            trees: self.trees + other.trees,
            burning: self.burning + other.burning,
        }
    }

    /// Total number of cells counted
    pub fn total(&self) -> usize {
        self.empty + self.trees + self.burning
    }
}

/// 2D forest grid of [`CellState`] in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestGrid {
    cells: Vec<CellState>,
    width: usize,
    height: usize,
}

impl ForestGrid {
    /// Create a randomly planted grid with a single fire at its center
    ///
    /// Each cell draws one uniform value in `[0, 1)` in row-major order and
    /// becomes a tree if the value is below `density`, otherwise empty. The
    /// center cell `(height / 2, width / 2)` is then forced to `Fire`.
    ///
    /// A density outside `[0, 1]` simply yields an all-empty or all-tree
    /// forest (apart from the ignition point).
    ///
    /// # Arguments
    ///
    /// * `width` - Grid width in cells (at least 1)
    /// * `height` - Grid height in cells (at least 1)
    /// * `density` - Probability that a cell starts as a tree
    /// * `rng` - Source of uniform draws, seeded by the caller
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, density: f64, rng: &mut R) -> Self {
        assert!(width >= 1 && height >= 1, "Grid dimensions must be at least 1x1");

        let cells = (0..width * height)
            .map(|_| {
                if rng.random::<f64>() < density {
                    CellState::Tree
                } else {
                    CellState::Empty
                }
            })
            .collect();

        let mut grid = Self {
            cells,
            width,
            height,
        };
        let (row, col) = grid.center();
        let idx = grid.index(row, col);
        grid.cells[idx] = CellState::Fire;
        grid
    }

    /// Wrap an existing cell buffer as a grid
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroDimension`] if either dimension is zero and
    /// [`GridError::LengthMismatch`] if `cells.len() != width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<CellState>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        if cells.len() != width * height {
            return Err(GridError::LengthMismatch {
                expected: width * height,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Parse a grid from its text form
    ///
    /// One line per row, cells separated by whitespace, using the symbols of
    /// [`CellState::symbol`]. Blank lines are ignored.
    ///
    /// ```
    /// use forest_fire_core::{CellState, ForestGrid};
    ///
    /// let grid = ForestGrid::parse("T T\nF .").unwrap();
    /// assert_eq!(grid.get(1, 0), Some(CellState::Fire));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownSymbol`] for an unrecognised token,
    /// [`GridError::RaggedRow`] if rows differ in length and
    /// [`GridError::ZeroDimension`] if the text holds no cells.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            let start = cells.len();
            for token in line.split_whitespace() {
                let mut chars = token.chars();
                let state = match (chars.next(), chars.next()) {
                    (Some(symbol), None) => CellState::from_symbol(symbol),
                    _ => None,
                };
                let Some(state) = state else {
                    return Err(GridError::UnknownSymbol {
                        row: height,
                        symbol: token.to_string(),
                    });
                };
                cells.push(state);
            }

            let row_len = cells.len() - start;
            if height == 0 {
                width = row_len;
            } else if row_len != width {
                return Err(GridError::RaggedRow {
                    row: height,
                    expected: width,
                    actual: row_len,
                });
            }
            height += 1;
        }

        Self::from_cells(width, height, cells)
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`)
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, grids hold at least one cell
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of `(row, col)`
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Cell at `(row, col)`, or `None` outside the grid
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        if row < self.height && col < self.width {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// All cells in row-major order
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Cells of a single row
    pub fn row(&self, row: usize) -> &[CellState] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Ignition point `(height / 2, width / 2)`
    pub fn center(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }

    /// Count cells in each state
    pub fn census(&self) -> GridCensus {
        self.cells
            .par_iter()
            .fold(GridCensus::default, |census, &cell| census.record(cell))
            .reduce(GridCensus::default, GridCensus::merge)
    }

    /// Check if no cell is burning
    pub fn is_burnt_out(&self) -> bool {
        !self.cells.par_iter().any(|cell| cell.is_burning())
    }

    /// Swap the cell storage with `buffer`
    ///
    /// Used for double buffering: `buffer` must hold the next generation and
    /// receives the previous one, ready to be overwritten.
    pub(crate) fn swap_cells(&mut self, buffer: &mut Vec<CellState>) {
        assert_eq!(buffer.len(), self.cells.len(), "Swap buffer length mismatch");
        std::mem::swap(&mut self.cells, buffer);
    }
}

impl fmt::Display for ForestGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
