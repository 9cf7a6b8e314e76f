//! Error types for the match engine.

use super::types::Marker;

/// Why a set of players cannot start a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlayerSetProblem {
    /// A match needs exactly two players.
    #[display("expected 2 players, got {}", _0)]
    WrongCount(usize),

    /// Both players were given the same marker.
    #[display("both players use marker {}", _0)]
    DuplicateMarker(Marker),
}

/// Error returned by board and match operations.
///
/// Every variant is recoverable: the same input always fails the same way,
/// so callers re-prompt for different input rather than retrying.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Row or column outside `0..=2`.
    #[display("Invalid space ({}, {})", row, column)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The target cell already holds a marker.
    #[display("Space ({}, {}) is already taken", row, column)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// A symbol that is neither `x` nor `o`.
    #[display("Invalid marker '{}'", symbol)]
    InvalidMarker {
        /// The rejected symbol.
        symbol: String,
    },

    /// The players handed to `start` cannot form a match.
    #[display("Invalid player set: {}", _0)]
    InvalidPlayerSet(PlayerSetProblem),

    /// A turn was attempted while no match is running.
    #[display("No match in progress")]
    NotInProgress,

    /// A postcondition failed after a turn (debug builds only).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}
