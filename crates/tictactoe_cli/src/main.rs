//! Tic-tac-toe - terminal front end

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tictactoe_cli::{Cli, Command, play, run_demo, run_script, write_report};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = cli.match_config()?;
    info!(?config, "Match configuration resolved");

    let code = match cli.command {
        Command::Play => {
            play(&config, io::stdin().lock(), io::stdout().lock())?;
            ExitCode::SUCCESS
        }
        Command::Script { moves, json } => run_script_command(&config, &moves, json)?,
        Command::Demo => {
            run_demo(&config, io::stdout().lock())?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}

/// Logs go to stderr so they never mix with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Fails with exit code 1 when the script stopped at a rejected move.
#[instrument(skip(config))]
fn run_script_command(
    config: &tictactoe_cli::MatchConfig,
    moves: &[String],
    json: bool,
) -> Result<ExitCode> {
    let report = run_script(config, moves)?;
    write_report(&report, json, io::stdout().lock())?;
    if report.played_all() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
