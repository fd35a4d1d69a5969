//! Row-chunk partitioning
//!
//! Each step splits the grid rows into contiguous, non-overlapping ranges, one
//! per worker. Every worker writes only the cells of its own rows, which is
//! what lets the step run concurrently without per-cell locking. The ranges
//! must therefore cover `[0, height)` exactly once.

use std::ops::Range;

/// Half-open range of grid rows `[start, end)` owned by one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    /// Create a new row range
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of rows in the range
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Flat cell indices covered by these rows in a grid of `width` columns
    #[inline]
    pub const fn cell_span(&self, width: usize) -> Range<usize> {
        self.start * width..self.end * width
    }
}

/// Split `height` rows across `workers`
///
/// Uses `height / workers` rows per worker, with the last worker absorbing the
/// remainder. When there are more workers than rows, the worker count drops to
/// `height` so each worker gets exactly one row. A worker count of zero is
/// treated as one.
///
/// # Example
///
/// ```
/// use forest_fire_core::solver::{partition_rows, RowRange};
///
/// let ranges = partition_rows(10, 3);
/// assert_eq!(
///     ranges,
///     vec![RowRange::new(0, 3), RowRange::new(3, 6), RowRange::new(6, 10)]
/// );
/// ```
pub fn partition_rows(height: usize, workers: usize) -> Vec<RowRange> {
    let mut workers = workers.max(1);
    let mut rows_per_worker = height / workers;
    if rows_per_worker == 0 {
        rows_per_worker = 1;
        workers = height;
    }

    let ranges: Vec<RowRange> = (0..workers)
        .map(|w| {
            let start = w * rows_per_worker;
            let end = if w == workers - 1 {
                height
            } else {
                (w + 1) * rows_per_worker
            };
            RowRange::new(start, end)
        })
        .collect();

    debug_assert!(
        covers_exactly_once(&ranges, height),
        "Row partition must be contiguous and cover [0, {height}) exactly once: {ranges:?}"
    );
    ranges
}

/// Ranges start at 0, follow each other without gap or overlap, and end at `height`
fn covers_exactly_once(ranges: &[RowRange], height: usize) -> bool {
    let mut next_row = 0;
    for range in ranges {
        if range.start != next_row || range.end < range.start {
            return false;
        }
        next_row = range.end;
    }
    next_row == height
}
