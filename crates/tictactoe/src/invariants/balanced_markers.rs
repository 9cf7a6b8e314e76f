//! Balanced markers invariant: the first player is never behind.

use super::super::Cell;
use super::{Invariant, Snapshot};
use tracing::warn;

/// Invariant: Marker counts on the board stay balanced.
///
/// The first player has placed as many markers as the second, or one more.
pub struct BalancedMarkersInvariant;

impl Invariant<Snapshot<'_>> for BalancedMarkersInvariant {
    fn holds(snapshot: &Snapshot<'_>) -> bool {
        let Some([first, second]) = snapshot.game.players() else {
            return true;
        };

        let count = |marker| {
            snapshot
                .board
                .cells()
                .filter(|cell| *cell == Cell::Marked(marker))
                .count()
        };
        let first_count = count(first.marker());
        let second_count = count(second.marker());

        let valid = first_count == second_count || first_count == second_count + 1;
        if !valid {
            warn!(first_count, second_count, "Marker balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "First player's markers equal the second's or lead by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Marker, Match, Player};

    #[test]
    fn test_extra_second_marker_violates() {
        let mut game = Match::new();
        let mut board = Board::new();
        game.start([Player::new(Marker::X), Player::new(Marker::O)])
            .unwrap();
        assert!(BalancedMarkersInvariant::holds(&Snapshot::new(&game, &board)));

        board.place(2, 2, Marker::O).unwrap();
        assert!(!BalancedMarkersInvariant::holds(&Snapshot::new(&game, &board)));
    }
}
