//! Monotonic board invariant: cells never change once set.

use super::super::Board;
use super::{Invariant, Snapshot};

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must succeed without
/// touching any cell twice and must reproduce the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<Snapshot<'_>> for MonotonicBoardInvariant {
    fn holds(snapshot: &Snapshot<'_>) -> bool {
        let mut reconstructed = Board::new();

        for placement in snapshot.game.history() {
            if reconstructed
                .place(placement.row, placement.column, placement.marker)
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *snapshot.board
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Marker, Match, Player};

    fn started() -> (Match, Board) {
        let mut game = Match::new();
        game.start([Player::new(Marker::X), Player::new(Marker::O)])
            .unwrap();
        (game, Board::new())
    }

    #[test]
    fn test_empty_game_holds() {
        let (game, board) = started();
        assert!(MonotonicBoardInvariant::holds(&Snapshot::new(&game, &board)));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let (mut game, mut board) = started();
        for (row, column) in [(0, 0), (1, 1), (0, 2), (2, 0)] {
            game.take_turn(&mut board, row, column).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&Snapshot::new(&game, &board)));
    }

    #[test]
    fn test_cleared_board_violates() {
        let (mut game, mut board) = started();
        game.take_turn(&mut board, 1, 1).unwrap();

        board.reset();

        assert!(!MonotonicBoardInvariant::holds(&Snapshot::new(&game, &board)));
    }
}
