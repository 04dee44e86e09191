//! Move coordination: applying moves, alternating turns, running rounds.
//!
//! A round moves through `AwaitingMove(player)` and ends in
//! `Terminal(outcome)`. Each accepted move is evaluated for the player who
//! just moved: a completed line wins, a full board draws, anything else
//! hands the turn to the opponent.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, RoundInvariants};
use super::players::MovePlayer;
use super::{Board, Outcome, Player, Position};
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Stateless move application.
#[derive(Debug, Clone, Copy, Default)]
pub struct Coordinator;

impl Coordinator {
    /// Places `player`'s mark and evaluates the board for that player.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the board is already terminal
    /// - `MoveError::SquareOccupied` if `position` is taken
    #[instrument(skip(board))]
    pub fn apply_move(board: &mut Board, player: Player, position: Position) -> Result<Outcome, MoveError> {
        if board.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }

        board.place(position, player)?;

        let outcome = if board.has_won(player) {
            Outcome::Won(player)
        } else if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        };
        debug!(%outcome, "Move applied");
        Ok(outcome)
    }
}

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for this player to move.
    AwaitingMove(Player),
    /// The round is over; absorbing.
    Terminal(Outcome),
}

/// One game from an empty board to a terminal outcome.
///
/// The round owns its board exclusively; move providers only ever see a
/// shared reference.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    state: RoundState,
    history: Vec<Move>,
}

impl Round {
    /// Creates a round on an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: RoundState::AwaitingMove(Player::X),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Returns the current state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Player to move, or `None` once the round is over.
    pub fn to_move(&self) -> Option<Player> {
        match self.state {
            RoundState::AwaitingMove(player) => Some(player),
            RoundState::Terminal(_) => None,
        }
    }

    /// Current outcome (`InProgress` until the round ends).
    pub fn outcome(&self) -> Outcome {
        match self.state {
            RoundState::AwaitingMove(_) => Outcome::InProgress,
            RoundState::Terminal(outcome) => outcome,
        }
    }

    /// Places the current player's mark at `position`.
    pub fn place(&mut self, position: Position) -> Result<Outcome, MoveError> {
        let player = self.to_move().ok_or(MoveError::GameOver)?;
        self.play_move(Move::new(player, position))
    }

    /// Applies a fully specified move.
    ///
    /// Preconditions are checked always; postconditions in debug builds only.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` once the round is terminal
    /// - `MoveError::WrongPlayer` if `action.player` is not to move
    /// - `MoveError::SquareOccupied` if the square is taken
    #[instrument(skip(self, action), fields(action = %action))]
    pub fn play_move(&mut self, action: Move) -> Result<Outcome, MoveError> {
        let expected = match self.state {
            RoundState::AwaitingMove(player) => player,
            RoundState::Terminal(_) => return Err(MoveError::GameOver),
        };
        if action.player != expected {
            return Err(MoveError::WrongPlayer(action.player));
        }

        let outcome = Coordinator::apply_move(&mut self.board, action.player, action.position)?;
        self.history.push(action);

        self.state = if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Round finished");
            RoundState::Terminal(outcome)
        } else {
            RoundState::AwaitingMove(action.player.opponent())
        };

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        Ok(outcome)
    }

    /// Verifies all round invariants.
    pub fn check_invariants(&self) -> Result<(), MoveError> {
        RoundInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }

    /// Replays moves from an empty board.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut round = Self::new();
        for action in moves {
            round.play_move(*action)?;
        }
        Ok(round)
    }

    /// Runs the round to completion, asking `source` for every move.
    ///
    /// A source is only asked for a move while the round is awaiting one, so
    /// an engine-backed source never sees a terminal board.
    #[instrument(skip_all)]
    pub fn play(&mut self, source: &mut impl MoveSource) -> Result<Outcome> {
        while let RoundState::AwaitingMove(player) = self.state {
            let position = source.next_move(&self.board, player)?;
            let outcome = self.place(position)?;
            source.on_move(&self.board, Move::new(player, position), outcome)?;
        }
        Ok(self.outcome())
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

/// Supplies moves to a round and observes the board after each one.
pub trait MoveSource {
    /// Returns the position `player` wants to mark.
    fn next_move(&mut self, board: &Board, player: Player) -> Result<Position>;

    /// Called after every accepted move.
    fn on_move(&mut self, _board: &Board, _action: Move, _outcome: Outcome) -> Result<()> {
        Ok(())
    }
}

/// Two independent players, one per mark.
#[derive(derive_new::new)]
pub struct Matchup<'a> {
    player_x: &'a mut dyn MovePlayer,
    player_o: &'a mut dyn MovePlayer,
}

impl Matchup<'_> {
    /// Name of the player holding `mark`.
    pub fn name(&self, mark: Player) -> &str {
        match mark {
            Player::X => self.player_x.name(),
            Player::O => self.player_o.name(),
        }
    }
}

impl MoveSource for Matchup<'_> {
    fn next_move(&mut self, board: &Board, player: Player) -> Result<Position> {
        let seat = match player {
            Player::X => &mut *self.player_x,
            Player::O => &mut *self.player_o,
        };
        debug!(player = %seat.name(), mark = %player, "Waiting for move");
        seat.choose_move(board, player)
    }
}
