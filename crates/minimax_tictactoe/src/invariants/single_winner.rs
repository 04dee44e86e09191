//! Single winner invariant: both marks never hold a line at once.

use super::Invariant;
use crate::{Player, Round};

/// Invariant: `has_won(X)` and `has_won(O)` are never both true.
pub struct SingleWinnerInvariant;

impl Invariant<Round> for SingleWinnerInvariant {
    fn holds(round: &Round) -> bool {
        let board = round.board();
        !(board.has_won(Player::X) && board.has_won(Player::O))
    }

    fn description() -> &'static str {
        "At most one player holds a completed line"
    }
}
