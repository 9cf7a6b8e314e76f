//! First-class record of a successful move.

use super::types::Marker;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A marker placed on the board during a match.
///
/// Placements are only created for moves the board accepted, so the
/// history of a match is a replayable list of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Placement {
    /// Row of the cell.
    pub row: usize,
    /// Column of the cell.
    pub column: usize,
    /// Marker that was placed.
    pub marker: Marker,
    /// Turn number the placement was made on (first turn is 1).
    pub turn: u32,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at ({}, {}) on turn {}",
            self.marker, self.row, self.column, self.turn
        )
    }
}
