//! History consistency invariant: history and board tell the same story.

use super::Invariant;
use crate::{Player, Round, Square};

/// Invariant: every recorded move is on the board, marks alternate
/// starting with X, and the number of filled squares equals the number of
/// moves played.
pub struct HistoryConsistentInvariant;

impl Invariant<Round> for HistoryConsistentInvariant {
    fn holds(round: &Round) -> bool {
        let history = round.history();
        let board = round.board();

        if board.filled() != history.len() {
            return false;
        }

        if history.first().is_some_and(|first| first.player != Player::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        history
            .iter()
            .all(|mv| board.get(mv.position) == Square::Occupied(mv.player))
    }

    fn description() -> &'static str {
        "Move history matches the board and alternates X, O, X, ..."
    }
}
