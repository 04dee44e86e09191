//! AI vs random self-play.

use anyhow::Result;
use minimax_tictactoe::{AiPlayer, Matchup, Outcome, Player, RandomPlayer, Round};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, instrument, warn};

/// Tally of a batch of simulated games, from the AI's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Games played.
    pub games: usize,
    /// Games won by the AI (O).
    pub ai_wins: usize,
    /// Drawn games.
    pub draws: usize,
    /// Games lost by the AI. Always zero for a correct engine.
    pub ai_losses: usize,
}

impl SimulationReport {
    fn record(&mut self, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Won(Player::O) => self.ai_wins += 1,
            Outcome::Won(Player::X) => self.ai_losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => anyhow::bail!("Cannot record an unfinished game"),
        }
        self.games += 1;
        Ok(())
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: AI won {}, drew {}, lost {}",
            self.games, self.ai_wins, self.draws, self.ai_losses
        )
    }
}

/// Plays `games` rounds of a seeded random X against the minimax AI.
///
/// Game `i` uses seed `seed + i`, so a run is reproducible.
#[instrument]
pub fn run_simulation(games: usize, seed: u64) -> Result<SimulationReport> {
    let mut report = SimulationReport::default();
    let mut ai = AiPlayer::new("AI");

    for game in 0..games {
        let mut random = RandomPlayer::seeded("Random", seed.wrapping_add(game as u64));
        let mut matchup = Matchup::new(&mut random, &mut ai);
        let outcome = Round::new().play(&mut matchup)?;
        if outcome == Outcome::Won(Player::X) {
            warn!(game, "AI lost a game");
        }
        report.record(outcome)?;
    }

    info!(%report, "Simulation finished");
    Ok(report)
}
