//! Wall-clock timing for simulation runs.
//!
//! Provides an RAII step scope and the summary returned by a timed run.

use std::time::{Duration, Instant};
use tracing::trace;

/// A per-step timing scope.
///
/// The step duration is logged at `trace` level when dropped.
pub struct StepTimer {
    start: Instant,
    step: usize,
}

impl StepTimer {
    /// Starts timing step number `step`.
    pub fn new(step: usize) -> Self {
        Self {
            start: Instant::now(),
            step,
        }
    }

    /// Step number this scope is timing.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Time spent in the step so far.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for StepTimer {
    fn drop(&mut self) {
        trace!(step = self.step, elapsed = ?self.elapsed(), "Step complete");
    }
}

/// Total wall-clock time of a run of sequential steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTiming {
    pub elapsed: Duration,
    pub steps: usize,
}

impl RunTiming {
    /// Average duration of one step, zero for a run of no steps.
    pub fn per_step(&self) -> Duration {
        if self.steps == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos((self.elapsed.as_nanos() / self.steps as u128) as u64)
        }
    }

    /// Total elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
