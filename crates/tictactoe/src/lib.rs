//! Tic-tac-toe match engine.
//!
//! The engine keeps a 3x3 board, alternates turns between two players and
//! detects completed lines. It never draws anything itself: a UI layer calls
//! the operations below and reacts to the structured results.
//!
//! # Architecture
//!
//! - **Board**: the grid of cells and cell-level rules (bounds, occupancy)
//! - **Match**: the two players, turn order and win/draw detection
//! - **GameSession**: one owned Board plus one Match, the handle a UI keeps
//! - **Invariants**: properties re-checked after every turn in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameSession, Marker, Player, TurnOutcome};
//!
//! # fn main() -> Result<(), tictactoe::GameError> {
//! let mut session = GameSession::new();
//! session.start(Player::named(Marker::X, "Ada"), Player::new(Marker::O))?;
//!
//! for (row, column) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     session.take_turn(row, column)?;
//! }
//!
//! match session.take_turn(0, 2)? {
//!     TurnOutcome::Won { winner, .. } => assert_eq!(winner.player.name(), "Ada"),
//!     other => panic!("expected a win, got {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod error;
mod game;
mod invariants;
mod line;
mod phases;
mod player;
mod rules;
mod session;
mod types;

// Crate-level exports - Core types
pub use action::Placement;
pub use board::{BOARD_SIZE, Board, BoardView};
pub use line::{Line, LineIndex};
pub use player::Player;
pub use types::{Cell, Marker};

// Crate-level exports - Errors
pub use error::{GameError, PlayerSetProblem};

// Crate-level exports - Match controller
pub use game::{Match, TurnOutcome, Winner};
pub use phases::{MatchStatus, Outcome};

// Crate-level exports - Rules
pub use rules::{CompletedLine, check_winner, is_draw};

// Crate-level exports - Session management
pub use session::GameSession;

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, BalancedMarkersInvariant, Invariant, InvariantSet,
    InvariantViolation, MatchInvariants, MonotonicBoardInvariant, Snapshot,
};
