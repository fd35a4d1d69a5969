//! Run configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Parameters of a single simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Probability that a cell starts as a tree
    pub density: f64,
    /// Number of steps to run
    pub steps: usize,
    /// Row partitions per step (`None` = one per logical processor)
    pub workers: Option<usize>,
    /// Seed for initial tree placement (`None` = chosen by the caller)
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            density: 0.6,
            steps: 100,
            workers: None,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Default configuration on a `size` x `size` grid
    pub fn square(size: usize) -> Self {
        Self {
            width: size,
            height: size,
            ..Self::default()
        }
    }

    /// Check the parameters the simulation relies on
    ///
    /// A density outside `[0, 1]`, infinities included, is accepted and
    /// yields an all-tree or all-empty forest.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDimension`] for an empty grid and
    /// [`ConfigError::NanDensity`] if the density is NaN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.density.is_nan() {
            return Err(ConfigError::NanDensity);
        }
        Ok(())
    }
}
