//! Error types for grid construction, configuration and metrics output
//!
//! Stepping the simulation is infallible. These errors only come from building
//! a grid out of caller-supplied cells, validating a run configuration, and
//! appending the optional metrics record.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error raised when an injected grid does not describe a valid forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height was zero
    ZeroDimension { width: usize, height: usize },
    /// Cell count did not equal `width * height`
    LengthMismatch { expected: usize, actual: usize },
    /// A text row had a different number of cells than the first row
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A text cell symbol was not one of `.`, `E`, `T`, `F`
    UnknownSymbol { row: usize, symbol: String },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "Grid dimensions must be at least 1x1, got {width}x{height}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Grid expects {expected} cells, got {actual}")
            }
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => write!(f, "Row {row} has {actual} cells, expected {expected}"),
            Self::UnknownSymbol { row, symbol } => {
                write!(f, "Unknown cell symbol '{symbol}' in row {row}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Error raised by [`SimulationConfig::validate`](crate::SimulationConfig::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height was zero
    ZeroDimension { width: usize, height: usize },
    /// Density was NaN, so no draw can be compared against it
    NanDensity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "Grid size must be at least 1x1, got {width}x{height}")
            }
            Self::NanDensity => f.write_str("Tree density must be a number, got NaN"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error raised while appending a run record to the metrics file.
#[derive(Debug)]
pub enum ReportError {
    /// The metrics file could not be opened or created
    Open { path: PathBuf, source: io::Error },
    /// The record could not be written
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "Error opening file {}: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Error writing to file {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Write { source, .. } => Some(source),
        }
    }
}
