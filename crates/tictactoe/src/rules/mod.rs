//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They know nothing about
//! players or turns, which keeps them usable from the match controller and
//! from the invariant checks alike.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{CompletedLine, check_winner};
