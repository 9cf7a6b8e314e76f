//! Core domain types for tic-tac-toe.

use super::error::GameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::EnumIter;
use tracing::instrument;

/// Marker a player puts on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    derive_more::Display,
)]
pub enum Marker {
    /// Cross.
    X,
    /// Nought.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Lowercase symbol used in rendered boards.
    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'x',
            Marker::O => 'o',
        }
    }
}

impl TryFrom<char> for Marker {
    type Error = GameError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol.to_ascii_lowercase() {
            'x' => Ok(Marker::X),
            'o' => Ok(Marker::O),
            _ => Err(GameError::InvalidMarker {
                symbol: symbol.to_string(),
            }),
        }
    }
}

impl FromStr for Marker {
    type Err = GameError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Marker::try_from(symbol),
            _ => Err(GameError::InvalidMarker {
                symbol: s.to_string(),
            }),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Holds a player's marker.
    Marked(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Symbol used in rendered boards: `x`, `o` or `-`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Marked(marker) => marker.symbol(),
        }
    }
}

impl From<Marker> for Cell {
    fn from(marker: Marker) -> Self {
        Cell::Marked(marker)
    }
}

impl TryFrom<Cell> for Marker {
    type Error = GameError;

    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        cell.marker().ok_or_else(|| GameError::InvalidMarker {
            symbol: cell.symbol().to_string(),
        })
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_marker_parses_either_case() {
        assert_eq!("x".parse::<Marker>(), Ok(Marker::X));
        assert_eq!(" O ".parse::<Marker>(), Ok(Marker::O));
    }

    #[test]
    fn test_marker_rejects_unknown_symbols() {
        for input in ["-", "", "xo", "z"] {
            assert!(
                matches!(input.parse::<Marker>(), Err(GameError::InvalidMarker { .. })),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_empty_cell_is_not_a_marker() {
        assert_eq!(
            Marker::try_from(Cell::Empty),
            Err(GameError::InvalidMarker {
                symbol: "-".to_string()
            })
        );
        assert_eq!(Marker::try_from(Cell::Marked(Marker::O)), Ok(Marker::O));
    }

    #[test]
    fn test_opponent_is_involutive() {
        for marker in Marker::iter() {
            assert_ne!(marker.opponent(), marker);
            assert_eq!(marker.opponent().opponent(), marker);
        }
    }
}
