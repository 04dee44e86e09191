//! Minimax Games - console tic-tac-toe.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use minimax_games::{Cli, Command, ConsoleSession, GameConfig, GameMode, run_simulation};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command() {
        Command::Play { mode, show_scores } => run_play(config, mode, show_scores),
        Command::Simulate { games, seed, json } => run_simulate(games, seed, json),
    }
}

/// Run an interactive session on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: GameConfig, mode: Option<GameMode>, show_scores: bool) -> Result<()> {
    let show_scores = show_scores || *config.show_scores();
    let config = config.with_show_scores(show_scores);
    info!("Starting console session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock(), config);
    session.run(mode)
}

/// Run AI vs random self-play and print the tally
#[instrument]
fn run_simulate(games: usize, seed: u64, json: bool) -> Result<()> {
    let report = run_simulation(games, seed)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    if report.ai_losses > 0 {
        anyhow::bail!("AI lost {} of {} games", report.ai_losses, report.games);
    }
    Ok(())
}
