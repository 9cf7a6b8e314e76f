//! Command-line interface for the tic-tac-toe terminal front end.

use crate::config::{ConfigError, MatchConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe::Marker;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML match configuration
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Name of the player who moves first
    #[arg(long, global = true)]
    pub first: Option<String>,

    /// Name of the player who moves second
    #[arg(long, global = true)]
    pub second: Option<String>,

    /// Marker of the player who moves first (x or o)
    #[arg(long, global = true)]
    pub first_marker: Option<Marker>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one `row column` move per line
    Play,

    /// Apply a fixed list of moves and print the result
    Script {
        /// Moves as `row,column` (e.g. `0,0 1,1 0,1`)
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a short sample round, rejected moves included
    Demo,
}

impl Cli {
    /// Resolves the match configuration: file first, then flags.
    pub fn match_config(&self) -> Result<MatchConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => MatchConfig::from_file(path)?,
            None => MatchConfig::default(),
        };
        Ok(base.with_overrides(self.first.clone(), self.second.clone(), self.first_marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_with_flags() {
        let cli = Cli::parse_from([
            "tictactoe",
            "script",
            "0,0",
            "1,1",
            "--json",
            "--first-marker",
            "o",
            "--first",
            "Ada",
        ]);
        assert_eq!(cli.first_marker, Some(Marker::O));
        match cli.command {
            Command::Script { ref moves, json } => {
                assert_eq!(*moves, vec!["0,0", "1,1"]);
                assert!(json);
            }
            other => panic!("Expected script, got {other:?}"),
        }

        let config = cli.match_config().unwrap();
        assert_eq!(config.first_name(), "Ada");
        assert_eq!(*config.first_marker(), Marker::O);
    }

    #[test]
    fn test_invalid_marker_flag_rejected() {
        let result = Cli::try_parse_from(["tictactoe", "demo", "--first-marker", "z"]);
        assert!(result.is_err());
    }
}
