//! Terminal front end for the tic-tac-toe match engine.
//!
//! The engine in the `tictactoe` crate does all the game logic; this crate
//! only reads moves, prints boards and loads configuration.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::{Cli, Command};
pub use config::{ConfigError, MatchConfig};
pub use runner::{
    DEMO_MOVES, MoveInputError, RejectedMove, ScriptReport, parse_move, play, run_demo,
    run_script, start_session, write_report,
};
