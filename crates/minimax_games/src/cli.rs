//! Command-line interface for minimax_games.

use crate::GameMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Minimax Games - console tic-tac-toe against an unbeatable AI
#[derive(Parser, Debug)]
#[command(name = "minimax_games")]
#[command(about = "Tic-tac-toe against a minimax AI, or against a friend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play at the console
    Play {
        /// Skip the mode menu
        #[arg(long, value_enum)]
        mode: Option<GameMode>,

        /// Print the AI's score for every candidate square
        #[arg(long)]
        show_scores: bool,
    },

    /// Pit the AI (O) against a random X and tally the results
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "20")]
        games: usize,

        /// Seed for the random player
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Returns the subcommand, falling back to an interactive `play`.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play {
            mode: None,
            show_scores: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["minimax_games"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Play {
                mode: None,
                show_scores: false
            }
        );
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_play_with_mode() {
        let cli =
            Cli::try_parse_from(["minimax_games", "play", "--mode", "two", "--show-scores"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Play {
                mode: Some(GameMode::TwoPlayer),
                show_scores: true
            }
        );
    }

    #[test]
    fn test_simulate_args() {
        let cli = Cli::try_parse_from([
            "minimax_games",
            "--config",
            "games.toml",
            "simulate",
            "--games",
            "5",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("games.toml")));
        assert_eq!(
            cli.command(),
            Command::Simulate {
                games: 5,
                seed: 42,
                json: false
            }
        );
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["minimax_games", "play", "--mode", "three"]).is_err());
    }
}
