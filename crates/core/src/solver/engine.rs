//! Parallel step engine
//!
//! Computes the next generation of a [`ForestGrid`] into a separate buffer.
//! The previous grid is shared read-only by every worker. The output buffer is
//! carved into one exclusive `&mut` slice per row range with `split_at_mut`,
//! so disjoint writes are enforced by the borrow checker rather than by locks.
//! Each partition runs as one rayon task, and the step returns only after all
//! tasks have joined.

use super::partition::{partition_rows, RowRange};
use super::transition::next_state;
use crate::grid::{CellState, ForestGrid};
use rayon::prelude::*;
use tracing::trace;

/// Row-partitioned step engine with a fixed worker count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEngine {
    workers: usize,
}

impl StepEngine {
    /// Create an engine that splits each step into `workers` row partitions
    ///
    /// A worker count of zero is treated as one.
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Number of row partitions requested per step
    ///
    /// Grids with fewer rows than workers use one partition per row.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Compute the next generation of `current` into `next`
    ///
    /// Every slot of `next` is overwritten; its previous contents are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `next.len() != current.len()`.
    pub fn step_into(&self, current: &ForestGrid, next: &mut [CellState]) {
        assert_eq!(
            next.len(),
            current.len(),
            "Output buffer must match grid length"
        );

        let width = current.width();
        let ranges = partition_rows(current.height(), self.workers);
        trace!(partitions = ranges.len(), "Stepping grid");

        let mut chunks: Vec<(RowRange, &mut [CellState])> = Vec::with_capacity(ranges.len());
        let mut rest = next;
        for range in ranges {
            let (owned, tail) = std::mem::take(&mut rest).split_at_mut(range.len() * width);
            chunks.push((range, owned));
            rest = tail;
        }
        debug_assert!(rest.is_empty(), "Partitions must cover every row");

        // Implicit barrier: for_each returns once every partition is written
        chunks
            .into_par_iter()
            .for_each(|(range, out)| update_rows(current, range, out));
    }

    /// Compute the next generation of `current` into a new grid
    pub fn step(&self, current: &ForestGrid) -> ForestGrid {
        let mut next = vec![CellState::Empty; current.len()];
        self.step_into(current, &mut next);
        ForestGrid::from_cells(current.width(), current.height(), next)
            .unwrap_or_else(|_| unreachable!("Step output matches input dimensions"))
    }
}

impl Default for StepEngine {
    /// One partition per thread of the global rayon pool (logical processors by default)
    fn default() -> Self {
        Self::new(rayon::current_num_threads())
    }
}

/// Apply the transition rule to every cell in `range`, writing into `out`
///
/// `out` holds exactly the cells of `range`, starting at row `range.start`.
fn update_rows(current: &ForestGrid, range: RowRange, out: &mut [CellState]) {
    let width = current.width();
    debug_assert_eq!(out.len(), range.cell_span(width).len());

    for (row, out_row) in (range.start..range.end).zip(out.chunks_exact_mut(width)) {
        for (col, cell) in out_row.iter_mut().enumerate() {
            *cell = next_state(current, row, col);
        }
    }
}
