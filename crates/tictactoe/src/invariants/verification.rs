//! Formal verification of board rules using the Kani model checker.
//!
//! These proof harnesses check properties for every coordinate and marker
//! rather than a handful of samples.

#[cfg(kani)]
mod proofs {
    use crate::{Board, Cell, GameError, Marker, check_winner};

    fn any_marker() -> Marker {
        if kani::any() { Marker::X } else { Marker::O }
    }

    /// Proves: coordinates off the board are rejected and leave it untouched.
    #[kani::proof]
    fn verify_out_of_bounds_rejected() {
        let row: usize = kani::any();
        let column: usize = kani::any();
        kani::assume(row > 2 || column > 2);

        let mut board = Board::new();
        assert_eq!(
            board.place(row, column, any_marker()),
            Err(GameError::OutOfBounds { row, column })
        );
        assert_eq!(board, Board::new());
    }

    /// Proves: a cell accepts exactly one placement.
    #[kani::proof]
    fn verify_single_assignment() {
        let row: usize = kani::any();
        let column: usize = kani::any();
        kani::assume(row <= 2 && column <= 2);
        let marker = any_marker();

        let mut board = Board::new();
        assert!(board.place(row, column, marker).is_ok());
        assert_eq!(board.marker_at(row, column), Ok(Cell::Marked(marker)));
        assert_eq!(
            board.place(row, column, any_marker()),
            Err(GameError::CellOccupied { row, column })
        );
    }

    /// Proves: one marker alone never completes a line.
    #[kani::proof]
    fn verify_single_marker_never_wins() {
        let row: usize = kani::any();
        let column: usize = kani::any();
        kani::assume(row <= 2 && column <= 2);

        let mut board = Board::new();
        let _ = board.place(row, column, any_marker());
        assert!(check_winner(&board).is_none());
    }
}
