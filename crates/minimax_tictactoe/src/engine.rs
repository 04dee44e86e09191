//! Exhaustive minimax search.
//!
//! The search walks the full game tree below the current board. Every
//! candidate move is placed, scored recursively, and cleared again, so the
//! board handed to the engine is identical before and after a search.
//!
//! Terminal positions are scored from the maximizer's point of view:
//! a maximizer win at depth `d` is worth `WIN_SCORE - d`, a minimizer win
//! `d - WIN_SCORE`, a draw `0`. Shallower wins beat deeper ones and deeper
//! losses beat shallower ones.

use super::{Board, Player, Position};
use tracing::{debug, instrument, warn};

/// Score of a maximizer win found at depth 0.
pub const WIN_SCORE: i32 = 10;

/// Score of a minimizer win found at depth 0.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Counters gathered during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions evaluated, including terminal leaves.
    pub nodes: u64,
    /// Terminal positions reached.
    pub leaves: u64,
}

/// Full-depth minimax move selector.
///
/// The maximizing side defaults to `Player::O`, the AI in single-player games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxEngine {
    maximizer: Player,
}

impl MinimaxEngine {
    /// Creates an engine that plays (and maximizes for) O.
    pub fn new() -> Self {
        Self::for_player(Player::O)
    }

    /// Creates an engine that maximizes for `maximizer`.
    pub fn for_player(maximizer: Player) -> Self {
        Self { maximizer }
    }

    /// The side this engine plays.
    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    /// Returns the optimal move for the maximizer, or `None` if the board
    /// has no empty square.
    ///
    /// Candidates are tried in row-major order and only a strictly greater
    /// score replaces the current best, so ties go to the earliest square.
    #[instrument(skip(self, board), fields(maximizer = %self.maximizer))]
    pub fn best_move(&self, board: &mut Board) -> Option<Position> {
        let (scores, stats) = self.score_moves_with_stats(board);

        let mut best: Option<(Position, i32)> = None;
        for (pos, score) in scores {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        match best {
            Some((pos, score)) => {
                debug!(
                    position = %pos,
                    score,
                    nodes = stats.nodes,
                    leaves = stats.leaves,
                    "Engine chose move"
                );
                Some(pos)
            }
            None => {
                debug_assert!(board.empty_cells().next().is_none());
                warn!("Engine asked to move on a full board");
                None
            }
        }
    }

    /// Root scores for every empty square, in row-major order.
    pub fn score_moves(&self, board: &mut Board) -> Vec<(Position, i32)> {
        self.score_moves_with_stats(board).0
    }

    /// Root scores plus the search counters.
    #[instrument(skip(self, board), fields(empty = board.empty_cells().count()))]
    pub fn score_moves_with_stats(&self, board: &mut Board) -> (Vec<(Position, i32)>, SearchStats) {
        #[cfg(debug_assertions)]
        let before = *board;

        let mut stats = SearchStats::default();
        let candidates: Vec<Position> = board.empty_cells().collect();
        let mut scores = Vec::with_capacity(candidates.len());

        for pos in candidates {
            if let Err(e) = board.place(pos, self.maximizer) {
                warn!(error = %e, "Skipping candidate");
                continue;
            }
            let score = self.search(board, 0, false, &mut stats);
            board.clear(pos);
            scores.push((pos, score));
        }

        #[cfg(debug_assertions)]
        debug_assert_eq!(before, *board, "search must restore the board");

        debug!(nodes = stats.nodes, leaves = stats.leaves, "Scored root moves");
        (scores, stats)
    }

    /// Minimax value of `board` with `depth` plies already simulated.
    ///
    /// `maximizing` says whose turn it is on `board`: the maximizer's when
    /// true, the opponent's when false.
    pub fn minimax(&self, board: &mut Board, depth: i32, maximizing: bool) -> i32 {
        let mut stats = SearchStats::default();
        self.search(board, depth, maximizing, &mut stats)
    }

    /// Score of a terminal board at `depth`, or `None` if play continues.
    pub fn evaluate_terminal(&self, board: &Board, depth: i32) -> Option<i32> {
        if board.has_won(self.maximizer) {
            Some(WIN_SCORE - depth)
        } else if board.has_won(self.maximizer.opponent()) {
            Some(depth - WIN_SCORE)
        } else if board.is_full() {
            Some(0)
        } else {
            None
        }
    }

    fn search(&self, board: &mut Board, depth: i32, maximizing: bool, stats: &mut SearchStats) -> i32 {
        stats.nodes += 1;
        if let Some(score) = self.evaluate_terminal(board, depth) {
            stats.leaves += 1;
            return score;
        }

        let side = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in Position::ALL {
            // Occupied squares are rejected by `place` and skipped.
            if board.place(pos, side).is_err() {
                continue;
            }
            let score = self.search(board, depth + 1, !maximizing, stats);
            board.clear(pos);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_scores() {
        let engine = MinimaxEngine::new();
        let o_wins = Board::from_rows(["OOO", "XX ", "X  "]).unwrap();
        let x_wins = Board::from_rows(["XXX", "OO ", "O  "]).unwrap();
        let draw = Board::from_rows(["XOX", "XOO", "OXX"]).unwrap();

        assert_eq!(engine.evaluate_terminal(&o_wins, 2), Some(8));
        assert_eq!(engine.evaluate_terminal(&x_wins, 3), Some(-7));
        assert_eq!(engine.evaluate_terminal(&draw, 5), Some(0));
        assert_eq!(engine.evaluate_terminal(&Board::new(), 0), None);
    }

    #[test]
    fn test_immediate_win_scores_ten() {
        let engine = MinimaxEngine::new();
        let mut board = Board::from_rows(["XX ", "OO ", "   "]).unwrap();
        let scores = engine.score_moves(&mut board);
        assert!(scores.contains(&(Position::MiddleRight, WIN_SCORE)));
    }

    #[test]
    fn test_takes_winning_square() {
        let engine = MinimaxEngine::new();
        let mut board = Board::from_rows(["XX ", "OO ", "   "]).unwrap();
        assert_eq!(engine.best_move(&mut board), Some(Position::MiddleRight));
    }

    #[test]
    fn test_blocks_when_no_win_available() {
        let engine = MinimaxEngine::new();
        // X threatens the top row; O has nothing to finish.
        let mut board = Board::from_rows(["XX ", " O ", "   "]).unwrap();
        assert_eq!(engine.best_move(&mut board), Some(Position::TopRight));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let engine = MinimaxEngine::new();
        let mut board = Board::from_rows(["XOX", "XOO", "OXX"]).unwrap();
        assert_eq!(engine.best_move(&mut board), None);
    }

    #[test]
    fn test_engine_for_x_maximizes_x() {
        let engine = MinimaxEngine::for_player(Player::X);
        let mut board = Board::from_rows(["OO ", "XX ", "   "]).unwrap();
        assert_eq!(engine.best_move(&mut board), Some(Position::MiddleRight));
    }

    #[test]
    fn test_stats_count_nodes() {
        let engine = MinimaxEngine::new();
        let mut board = Board::from_rows(["XOX", "XOO", "  X"]).unwrap();
        let (scores, stats) = engine.score_moves_with_stats(&mut board);
        assert_eq!(scores.len(), 2);
        assert!(stats.nodes >= 2);
        assert!(stats.leaves >= 1);
    }
}
