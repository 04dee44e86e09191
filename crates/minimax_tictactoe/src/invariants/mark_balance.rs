//! Mark balance invariant: X leads O by at most one mark.

use super::Invariant;
use crate::{Player, Round};

/// Invariant: X has as many marks as O, or exactly one more.
///
/// Follows from X always moving first and turns alternating.
pub struct MarkBalanceInvariant;

impl Invariant<Round> for MarkBalanceInvariant {
    fn holds(round: &Round) -> bool {
        let x = round.board().count(Player::X);
        let o = round.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by at most one mark"
    }
}
