//! Match lifecycle states.

use super::types::Marker;
use serde::{Deserialize, Serialize};

/// Where a match is in its lifecycle.
///
/// `NotStarted -> InProgress -> Finished`, and back to `NotStarted` on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchStatus {
    /// No players assigned yet.
    #[default]
    NotStarted,
    /// Accepting turns.
    InProgress,
    /// Terminal: no further turns accepted.
    Finished(Outcome),
}

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player with this marker completed a line.
    Winner(Marker),
    /// The board filled up without a line.
    Draw,
}

impl Outcome {
    /// Returns the winning marker if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Winner(marker) => Some(*marker),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the match was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(marker) => write!(f, "{} wins", marker),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
