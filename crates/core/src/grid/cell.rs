//! Cell states of the forest automaton

use serde::{Deserialize, Serialize};

/// State of a single grid cell
///
/// Stored as one byte per cell so a row of the grid stays cache-friendly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Bare ground or burnt-out cell, never ignites
    #[default]
    Empty = 0,
    /// Unburnt fuel, ignites when a cardinal neighbour is burning
    Tree = 1,
    /// Burning this step, always empty on the next
    Fire = 2,
}

impl CellState {
    /// Numeric encoding of the state
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode a state from its numeric encoding
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Empty),
            1 => Some(Self::Tree),
            2 => Some(Self::Fire),
            _ => None,
        }
    }

    /// Single-character symbol used by the text grid format
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Tree => 'T',
            Self::Fire => 'F',
        }
    }

    /// Parse a text grid symbol (`E` is accepted as an alias for `.`)
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | 'E' => Some(Self::Empty),
            'T' => Some(Self::Tree),
            'F' => Some(Self::Fire),
            _ => None,
        }
    }

    /// Check if the cell is currently burning
    #[inline]
    #[must_use]
    pub const fn is_burning(self) -> bool {
        matches!(self, Self::Fire)
    }
}
