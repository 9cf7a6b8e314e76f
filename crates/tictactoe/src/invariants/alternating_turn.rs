//! Alternating turn invariant: first player, second player, first player, ...

use super::super::MatchStatus;
use super::{Invariant, Snapshot};

/// Invariant: Players alternate turns.
///
/// The history must alternate between the first and second player's
/// markers, starting with the first player, with turn numbers 1, 2, 3, ...
/// The counter sits one past the history while the match runs and on the
/// last placement once it is finished.
pub struct AlternatingTurnInvariant;

impl Invariant<Snapshot<'_>> for AlternatingTurnInvariant {
    fn holds(snapshot: &Snapshot<'_>) -> bool {
        let game = snapshot.game;
        let history = game.history();

        let Some([first, second]) = game.players() else {
            return history.is_empty() && game.current_turn() == 0;
        };

        let alternates = history.iter().enumerate().all(|(i, placement)| {
            let expected = if i % 2 == 0 { first } else { second };
            placement.marker == expected.marker() && placement.turn as usize == i + 1
        });
        if !alternates {
            return false;
        }

        let turn = game.current_turn() as usize;
        match game.status() {
            MatchStatus::InProgress => turn == history.len() + 1,
            MatchStatus::Finished(_) => !history.is_empty() && turn == history.len(),
            MatchStatus::NotStarted => false,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns, first player first"
    }
}
