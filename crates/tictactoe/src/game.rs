//! Match controller: turn order and win/draw detection.

use super::action::Placement;
use super::board::Board;
use super::error::{GameError, PlayerSetProblem};
use super::invariants::{InvariantSet, MatchInvariants, Snapshot};
use super::line::Line;
use super::phases::{MatchStatus, Outcome};
use super::player::Player;
use super::rules::check_winner;
use super::types::Marker;
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

/// The player who completed a line, and the line they completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Winner {
    /// The winning player.
    pub player: Player,
    /// First completed line in scan order.
    pub line: Line,
}

/// What a successful turn did to the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TurnOutcome {
    /// The match goes on.
    Continue {
        /// The accepted move.
        placement: Placement,
        /// Who acts on the next turn.
        next: Player,
    },
    /// The move completed a line.
    Won {
        /// The accepted move.
        placement: Placement,
        /// The player who won.
        winner: Winner,
    },
    /// The move filled the board without completing a line.
    Draw {
        /// The accepted move.
        placement: Placement,
    },
}

impl TurnOutcome {
    /// The move this turn placed.
    pub fn placement(&self) -> &Placement {
        match self {
            TurnOutcome::Continue { placement, .. }
            | TurnOutcome::Won { placement, .. }
            | TurnOutcome::Draw { placement } => placement,
        }
    }

    /// True if the turn ended the match.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TurnOutcome::Continue { .. })
    }
}

/// Tic-tac-toe match controller.
///
/// Holds the two players, the turn counter and the move history. The board
/// is owned by the caller and lent to [`Match::take_turn`], which is the only
/// operation that mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Match {
    players: Option<[Player; 2]>,
    turn: u32,
    status: MatchStatus,
    history: Vec<Placement>,
}

impl Match {
    /// Creates a controller in the `NotStarted` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a match with exactly two players.
    ///
    /// The first player acts on odd turns whatever their marker. Starting
    /// again discards the previous players and history; clearing the board
    /// is up to the caller.
    ///
    /// # Errors
    ///
    /// `InvalidPlayerSet` if there are not exactly two players or both use
    /// the same marker. The controller is left unchanged.
    #[instrument(skip(self, players))]
    pub fn start<I>(&mut self, players: I) -> Result<(), GameError>
    where
        I: IntoIterator<Item = Player>,
    {
        let players: Vec<Player> = players.into_iter().collect();
        let [first, second]: [Player; 2] = players.try_into().map_err(|rejected: Vec<Player>| {
            warn!(count = rejected.len(), "Invalid number of players");
            GameError::InvalidPlayerSet(PlayerSetProblem::WrongCount(rejected.len()))
        })?;

        if first.marker() == second.marker() {
            warn!(marker = %first.marker(), "Players share a marker");
            return Err(GameError::InvalidPlayerSet(
                PlayerSetProblem::DuplicateMarker(first.marker()),
            ));
        }

        info!(first = %first, second = %second, "Starting match");
        self.players = Some([first, second]);
        self.turn = 1;
        self.status = MatchStatus::InProgress;
        self.history.clear();
        Ok(())
    }

    /// Plays the current player's marker at (row, column).
    ///
    /// The acting player is chosen by turn parity. A rejected move leaves the
    /// turn counter alone, so the same player acts again on the next call.
    /// The counter advances after a successful move unless that move ended
    /// the match, in which case it stays on the deciding turn.
    ///
    /// Debug builds play the move on copies of the match and board and check
    /// the match invariants before committing, so an `Err` never leaves a
    /// move applied.
    ///
    /// # Errors
    ///
    /// `NotInProgress` outside a running match, otherwise whatever
    /// [`Board::place`] rejects the move with. Debug builds also return
    /// `InvariantViolation` when the board does not match the history, for
    /// example after [`Match::reset`] without a [`Board::reset`].
    #[instrument(skip(self, board), fields(turn = self.turn))]
    pub fn take_turn(
        &mut self,
        board: &mut Board,
        row: usize,
        column: usize,
    ) -> Result<TurnOutcome, GameError> {
        if !cfg!(debug_assertions) {
            return self.apply_turn(board, row, column);
        }

        let mut staged = self.clone();
        let mut staged_board = board.clone();
        let outcome = staged.apply_turn(&mut staged_board, row, column)?;
        if let Err(err) = staged.verify(&staged_board) {
            error!(%err, "Move discarded");
            return Err(err);
        }

        *self = staged;
        *board = staged_board;
        Ok(outcome)
    }

    fn apply_turn(
        &mut self,
        board: &mut Board,
        row: usize,
        column: usize,
    ) -> Result<TurnOutcome, GameError> {
        if self.status != MatchStatus::InProgress {
            warn!(status = ?self.status, "Turn attempted outside a running match");
            return Err(GameError::NotInProgress);
        }

        let player = self.current_player().ok_or(GameError::NotInProgress)?.clone();
        let marker = player.marker();

        if let Err(err) = board.place(row, column, marker) {
            warn!(player = %player.name(), %err, "Turn unsuccessful");
            return Err(err);
        }

        let placement = Placement::new(row, column, marker, self.turn);
        self.history.push(placement);
        debug!(%placement, "Move accepted");

        if let Some(winner) = self.check_board(board) {
            info!(winner = %winner.player.name(), line = %winner.line, "Game over");
            self.status = MatchStatus::Finished(Outcome::Winner(winner.player.marker()));
            return Ok(TurnOutcome::Won { placement, winner });
        }
        if board.is_full() {
            info!("Game over: draw");
            self.status = MatchStatus::Finished(Outcome::Draw);
            return Ok(TurnOutcome::Draw { placement });
        }

        self.turn += 1;
        let next = self
            .current_player()
            .cloned()
            .ok_or(GameError::NotInProgress)?;
        Ok(TurnOutcome::Continue { placement, next })
    }

    /// Finds the winner on `board`, scanning rows, columns, then diagonals.
    ///
    /// Does not look for draws. Returns `None` when no line is complete or
    /// the completed line's marker belongs to neither player.
    #[instrument(skip(self, board))]
    pub fn check_board(&self, board: &Board) -> Option<Winner> {
        let completed = check_winner(board)?;
        let player = self.player_for_marker(completed.marker)?;
        Some(Winner {
            player: player.clone(),
            line: completed.line,
        })
    }

    /// Returns to `NotStarted`, forgetting players, turn and history.
    ///
    /// The board is not touched.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting match");
        *self = Self::default();
    }

    /// Finds the player using `marker`.
    pub fn player_for_marker(&self, marker: Marker) -> Option<&Player> {
        self.players
            .as_ref()?
            .iter()
            .find(|player| player.marker() == marker)
    }

    /// Turn counter: 0 before a match starts, 1 on the first turn.
    pub fn current_turn(&self) -> u32 {
        self.turn
    }

    /// The player who acts on the current turn, while the match runs.
    pub fn current_player(&self) -> Option<&Player> {
        if self.status != MatchStatus::InProgress {
            return None;
        }
        let [first, second] = self.players.as_ref()?;
        if self.turn % 2 == 1 {
            Some(first)
        } else {
            Some(second)
        }
    }

    /// Both players, first player first.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Mutable access to the players, for renaming mid-match.
    ///
    /// Markers are fixed on [`Player`], so this cannot break the pairing.
    pub fn players_mut(&mut self) -> Option<&mut [Player; 2]> {
        self.players.as_mut()
    }

    /// Current lifecycle state.
    pub fn status(&self) -> &MatchStatus {
        &self.status
    }

    /// The winning player of a finished match.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            MatchStatus::Finished(outcome) => self.player_for_marker(outcome.winner()?),
            _ => None,
        }
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// True while turns are accepted.
    pub fn is_in_progress(&self) -> bool {
        self.status == MatchStatus::InProgress
    }

    /// True once a line completed or the board filled up.
    pub fn is_finished(&self) -> bool {
        matches!(self.status, MatchStatus::Finished(_))
    }

    /// Checks every match invariant against `board`.
    #[instrument(skip(self, board))]
    pub fn verify(&self, board: &Board) -> Result<(), GameError> {
        MatchInvariants::check_all(&Snapshot::new(self, board)).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
