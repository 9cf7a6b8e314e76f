//! Drives a game session from terminal input.

use crate::config::MatchConfig;
use anyhow::Result;
use serde::Serialize;
use std::io::{BufRead, Write};
use tictactoe::{BoardView, GameSession, MatchStatus, TurnOutcome};
use tracing::{debug, info, instrument, warn};

/// Moves of the sample round played by `demo`, rejected ones included.
pub const DEMO_MOVES: [(usize, usize); 8] = [
    (0, 2),
    (0, 1),
    (0, 1), // taken
    (1, 0),
    (1, 1),
    (3, 1), // off the board
    (1, 2),
    (2, 1),
];

/// Error turning typed text into coordinates.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveInputError {
    /// Not two whole numbers.
    #[display("Expected `row column` or `row,column`, got '{}'", input)]
    Malformed {
        /// The rejected text.
        input: String,
    },

    /// A coordinate below zero.
    #[display("Coordinates cannot be negative, got '{}'", input)]
    Negative {
        /// The rejected text.
        input: String,
    },
}

/// Parses `row column` or `row,column`.
#[instrument]
pub fn parse_move(input: &str) -> Result<(usize, usize), MoveInputError> {
    let malformed = || MoveInputError::Malformed {
        input: input.to_string(),
    };

    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let [row, column] = parts.as_slice() else {
        return Err(malformed());
    };

    let row: i64 = row.parse().map_err(|_| malformed())?;
    let column: i64 = column.parse().map_err(|_| malformed())?;
    if row < 0 || column < 0 {
        return Err(MoveInputError::Negative {
            input: input.to_string(),
        });
    }

    Ok((
        usize::try_from(row).map_err(|_| malformed())?,
        usize::try_from(column).map_err(|_| malformed())?,
    ))
}

/// Starts a session with the configured players.
#[instrument(skip(config))]
pub fn start_session(config: &MatchConfig) -> Result<GameSession> {
    let (first, second) = config.players();
    let mut session = GameSession::new();
    session.start(first, second)?;
    Ok(session)
}

fn describe(session: &GameSession, outcome: &TurnOutcome) -> String {
    match outcome {
        TurnOutcome::Continue { next, .. } => format!("{} to move.", next),
        TurnOutcome::Won { winner, .. } => {
            format!("Game over! {} wins with {}!", winner.player.name(), winner.line)
        }
        TurnOutcome::Draw { .. } => {
            format!("Game over! Draw after {} turns.", session.game().current_turn())
        }
    }
}

fn prompt<W: Write>(session: &GameSession, output: &mut W) -> Result<()> {
    if let Some(player) = session.game().current_player() {
        write!(output, "{} > ", player)?;
        output.flush()?;
    }
    Ok(())
}

/// Interactive loop: one command or move per input line.
///
/// Commands: `board`, `reset`, `quit`. Anything else is read as a move.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(
    config: &MatchConfig,
    input: R,
    mut output: W,
) -> Result<GameSession> {
    let mut session = start_session(config)?;
    let (first, second) = config.players();
    writeln!(output, "{} vs {}", first, second)?;
    write!(output, "{}", session.board())?;
    prompt(&session, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        debug!(line, "Read input");

        match line {
            "" => {}
            "quit" | "q" => break,
            "board" => write!(output, "{}", session.board())?,
            "reset" => {
                session.reset();
                session.start(first.clone(), second.clone())?;
                writeln!(output, "Board cleared.")?;
                write!(output, "{}", session.board())?;
            }
            _ => match parse_move(line) {
                Err(err) => writeln!(output, "{}", err)?,
                Ok((row, column)) => match session.take_turn(row, column) {
                    Ok(outcome) => {
                        write!(output, "{}", session.board())?;
                        writeln!(output, "{}", describe(&session, &outcome))?;
                        if outcome.is_terminal() {
                            writeln!(output, "Type `reset` to play again or `quit` to leave.")?;
                        }
                    }
                    Err(err) => {
                        warn!(%err, "Move rejected");
                        writeln!(output, "Move rejected: {}", err)?;
                    }
                },
            },
        }

        prompt(&session, &mut output)?;
    }

    info!(turn = session.game().current_turn(), "Leaving interactive play");
    Ok(session)
}

/// A move the script could not play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// The move as typed.
    pub input: String,
    /// Why it was rejected.
    pub reason: String,
}

/// Final state of a scripted match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    /// Board at the end of the script.
    pub board: BoardView,
    /// Match status at the end of the script.
    pub status: MatchStatus,
    /// Turn counter at the end of the script.
    pub turn: u32,
    /// Name of the winner, if any.
    pub winner: Option<String>,
    /// The move that stopped the script early, if any.
    pub rejected: Option<RejectedMove>,
}

impl ScriptReport {
    fn new(session: &GameSession, rejected: Option<RejectedMove>) -> Self {
        Self {
            board: session.render(),
            status: *session.game().status(),
            turn: session.game().current_turn(),
            winner: session.game().winner().map(|p| p.name().clone()),
            rejected,
        }
    }

    /// True if every move in the script was accepted.
    pub fn played_all(&self) -> bool {
        self.rejected.is_none()
    }
}

/// Plays `moves` in order, stopping at the first one that is rejected.
#[instrument(skip(config))]
pub fn run_script(config: &MatchConfig, moves: &[String]) -> Result<ScriptReport> {
    let mut session = start_session(config)?;

    for input in moves {
        let played = parse_move(input)
            .map_err(|e| e.to_string())
            .and_then(|(row, column)| {
                session
                    .take_turn(row, column)
                    .map_err(|e| e.to_string())
            });

        if let Err(reason) = played {
            warn!(%input, %reason, "Script stopped");
            let rejected = RejectedMove {
                input: input.clone(),
                reason,
            };
            return Ok(ScriptReport::new(&session, Some(rejected)));
        }
    }

    Ok(ScriptReport::new(&session, None))
}

/// Writes a script report as text or JSON.
pub fn write_report<W: Write>(report: &ScriptReport, json: bool, mut output: W) -> Result<()> {
    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(report)?)?;
        return Ok(());
    }

    for row in &report.board.rows {
        for symbol in row {
            write!(output, "{} ", symbol)?;
        }
        writeln!(output)?;
    }
    if let Some(rejected) = &report.rejected {
        writeln!(output, "Stopped at '{}': {}", rejected.input, rejected.reason)?;
    }
    match (&report.status, &report.winner) {
        (MatchStatus::Finished(_), Some(winner)) => writeln!(output, "Game over! {} wins!", winner)?,
        (MatchStatus::Finished(_), None) => writeln!(output, "Game over! Draw.")?,
        _ => writeln!(output, "In progress, turn {}.", report.turn)?,
    }
    Ok(())
}

/// Plays the sample round, narrating each attempt.
#[instrument(skip_all)]
pub fn run_demo<W: Write>(config: &MatchConfig, mut output: W) -> Result<GameSession> {
    let mut session = start_session(config)?;

    for (row, column) in DEMO_MOVES {
        let Some(player) = session.game().current_player().cloned() else {
            break;
        };
        match session.take_turn(row, column) {
            Ok(outcome) => {
                writeln!(output, "{} plays ({}, {})", player, row, column)?;
                write!(output, "{}", session.board())?;
                writeln!(output, "{}", describe(&session, &outcome))?;
            }
            Err(err) => writeln!(output, "Turn unsuccessful for {}: {}", player.name(), err)?,
        }
    }

    Ok(session)
}
