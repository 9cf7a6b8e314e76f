//! Game session: one board and one match, owned together.

use super::board::{Board, BoardView};
use super::error::GameError;
use super::game::{Match, TurnOutcome};
use super::player::Player;
use super::types::Marker;
use tracing::{debug, info, instrument};

/// A single game as a UI layer holds it.
///
/// Each session owns its own [`Board`] and [`Match`], so any number of
/// games can run side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    game: Match,
}

impl GameSession {
    /// Creates a session with an empty board and no match.
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating new game session");
        Self::default()
    }

    /// Clears the board and starts a match between `first` and `second`.
    ///
    /// `first` acts on turn 1.
    #[instrument(skip(self))]
    pub fn start(&mut self, first: Player, second: Player) -> Result<(), GameError> {
        self.game.start([first, second])?;
        self.board.reset();
        Ok(())
    }

    /// Starts a match between X (first) and O using names typed into a UI.
    ///
    /// Blank names keep the defaults.
    #[instrument(skip(self))]
    pub fn start_with_names(&mut self, x_name: &str, o_name: &str) -> Result<(), GameError> {
        self.start(
            Player::named(Marker::X, x_name),
            Player::named(Marker::O, o_name),
        )
    }

    /// Plays the current player's marker at (row, column).
    pub fn take_turn(&mut self, row: usize, column: usize) -> Result<TurnOutcome, GameError> {
        self.game.take_turn(&mut self.board, row, column)
    }

    /// Returns to the pre-match state: no players, empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
        self.board.reset();
        info!("Session reset");
    }

    /// Starts a fresh session and plays `moves` in order.
    ///
    /// Stops at the first rejected move.
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(
        first: Player,
        second: Player,
        moves: &[(usize, usize)],
    ) -> Result<Self, GameError> {
        let mut session = Self::new();
        session.start(first, second)?;
        for &(row, column) in moves {
            session.take_turn(row, column)?;
        }
        Ok(session)
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The match controller.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Mutable match access, for renaming players.
    pub fn game_mut(&mut self) -> &mut Match {
        &mut self.game
    }

    /// Board snapshot for a UI layer.
    pub fn render(&self) -> BoardView {
        self.board.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_clears_previous_board() {
        let mut session = GameSession::new();
        session.start_with_names("", "").unwrap();
        session.take_turn(0, 0).unwrap();

        session.start_with_names("Ada", "Grace").unwrap();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.game().current_turn(), 1);
    }

    #[test]
    fn test_failed_start_keeps_board() {
        let mut session = GameSession::new();
        session.start_with_names("", "").unwrap();
        session.take_turn(0, 0).unwrap();

        let result = session.start(Player::new(Marker::X), Player::new(Marker::X));
        assert!(matches!(result, Err(GameError::InvalidPlayerSet(_))));
        assert_eq!(session.board().filled_count(), 1);
        assert_eq!(session.game().current_turn(), 2);
    }

    #[test]
    fn test_replay_stops_at_first_error() {
        let result = GameSession::replay(
            Player::new(Marker::X),
            Player::new(Marker::O),
            &[(0, 0), (0, 0), (1, 1)],
        );
        assert_eq!(result, Err(GameError::CellOccupied { row: 0, column: 0 }));
    }
}
