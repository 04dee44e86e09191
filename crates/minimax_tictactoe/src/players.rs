//! Player trait and implementations.

use super::{Board, MinimaxEngine, MoveError, Player, Position};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use tracing::{debug, instrument};

/// Trait for players that can make moves.
///
/// Implementations return a position that is empty on `board`; the
/// coordinator re-validates and rejects anything else.
pub trait MovePlayer {
    /// Gets a move from this player for `mark`.
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// AI player backed by the minimax engine.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    name: String,
    engine: MinimaxEngine,
}

impl AiPlayer {
    /// Creates an AI that plays O.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_engine(name, MinimaxEngine::new())
    }

    /// Creates an AI using a specific engine.
    pub fn with_engine(name: impl Into<String>, engine: MinimaxEngine) -> Self {
        Self {
            name: name.into(),
            engine,
        }
    }

    /// Returns the underlying engine.
    pub fn engine(&self) -> &MinimaxEngine {
        &self.engine
    }
}

impl MovePlayer for AiPlayer {
    #[instrument(skip(self, board), fields(ai = %self.name))]
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<Position> {
        if mark != self.engine.maximizer() {
            return Err(MoveError::WrongPlayer(mark).into());
        }

        // The engine simulates on a scratch copy; the caller's board stays shared.
        let mut scratch = *board;
        let position = self
            .engine
            .best_move(&mut scratch)
            .ok_or(MoveError::NoMovesAvailable)?;
        debug_assert_eq!(scratch, *board);

        debug!(position = %position, "AI chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Player that picks a uniformly random empty square.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player seeded from OS entropy.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible random player.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MovePlayer for RandomPlayer {
    fn choose_move(&mut self, board: &Board, _mark: Player) -> Result<Position> {
        let position = board
            .empty_cells()
            .choose(&mut self.rng)
            .ok_or(MoveError::NoMovesAvailable)?;
        debug!(player = %self.name, position = %position, "Random player chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_player_completes_line() {
        let board = Board::from_rows(["XX ", "OO ", "   "]).unwrap();
        let mut ai = AiPlayer::new("AI");
        assert_eq!(ai.choose_move(&board, Player::O).unwrap(), Position::MiddleRight);
    }

    #[test]
    fn test_ai_player_refuses_other_mark() {
        let board = Board::new();
        let mut ai = AiPlayer::new("AI");
        let err = ai.choose_move(&board, Player::X).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MoveError>(),
            Some(&MoveError::WrongPlayer(Player::X))
        );
    }

    #[test]
    fn test_ai_player_full_board() {
        let board = Board::from_rows(["XOX", "XOO", "OXX"]).unwrap();
        let mut ai = AiPlayer::new("AI");
        assert!(ai.choose_move(&board, Player::O).is_err());
    }

    #[test]
    fn test_random_player_is_reproducible() {
        let board = Board::from_rows(["X  ", " O ", "   "]).unwrap();
        let mut a = RandomPlayer::seeded("a", 7);
        let mut b = RandomPlayer::seeded("b", 7);
        for _ in 0..5 {
            let pa = a.choose_move(&board, Player::X).unwrap();
            let pb = b.choose_move(&board, Player::X).unwrap();
            assert_eq!(pa, pb);
            assert!(board.is_cell_empty(pa));
        }
    }

    #[test]
    fn test_random_player_last_square() {
        let board = Board::from_rows(["XOX", "XOO", "OX "]).unwrap();
        let mut player = RandomPlayer::new("rand");
        assert_eq!(
            player.choose_move(&board, Player::X).unwrap(),
            Position::BottomRight
        );
    }
}
