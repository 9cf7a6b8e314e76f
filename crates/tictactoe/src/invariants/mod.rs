//! Consistency checks between a [`Match`] and the board it plays on.
//!
//! Each check reads a [`Snapshot`] and answers yes or no. [`Match::take_turn`]
//! runs [`MatchInvariants`] on every staged move in debug builds.

#[cfg(kani)]
mod verification;

use super::{Board, Match};

/// One yes/no check over a snapshot type `S`.
pub trait Invariant<S> {
    /// True if `state` passes the check.
    fn holds(state: &S) -> bool;

    /// Sentence naming what the check expects, used in error messages.
    fn description() -> &'static str;
}

/// A failed check, named by its description.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// What the failed check expected.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps the description of a failed check.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several checks run as one. Tuples of [`Invariant`]s implement it.
pub trait InvariantSet<S> {
    /// Runs every check; `Err` lists each one that failed, in tuple order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(failed: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<InvariantViolation> = failed
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

/// A match together with the board it is played on.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// The match controller.
    pub game: &'a Match,
    /// The board lent to it.
    pub board: &'a Board,
}

impl<'a> Snapshot<'a> {
    /// Pairs a match with its board.
    pub fn new(game: &'a Match, board: &'a Board) -> Self {
        Self { game, board }
    }
}

pub mod alternating_turn;
pub mod balanced_markers;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use balanced_markers::BalancedMarkersInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All match invariants as a composable set.
pub type MatchInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    BalancedMarkersInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Marker, Player};

    fn started() -> (Match, Board) {
        let mut game = Match::new();
        game.start([Player::new(Marker::O), Player::new(Marker::X)])
            .unwrap();
        (game, Board::new())
    }

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        let (game, board) = started();
        assert!(MatchInvariants::check_all(&Snapshot::new(&game, &board)).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let (mut game, mut board) = started();
        for (row, column) in [(0, 0), (1, 1), (0, 2)] {
            game.take_turn(&mut board, row, column).unwrap();
        }
        assert!(MatchInvariants::check_all(&Snapshot::new(&game, &board)).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let (mut game, mut board) = started();
        game.take_turn(&mut board, 1, 1).unwrap();

        // A marker the history knows nothing about.
        board.place(0, 0, Marker::X).unwrap();

        let violations = MatchInvariants::check_all(&Snapshot::new(&game, &board)).unwrap_err();
        assert!(!violations.is_empty());
        assert!(game.verify(&board).is_err());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let (game, board) = started();

        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&Snapshot::new(&game, &board)).is_ok());
    }
}
