//! Tic-tac-toe game logic with an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid with win and draw detection
//! - **Engine**: full-depth minimax search that picks the AI's move
//! - **Coordinator**: applies moves, alternates turns, reports outcomes
//! - **Players**: move providers (minimax AI, seeded random)
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{MinimaxEngine, Outcome, Player, Position, Round};
//!
//! let mut round = Round::new();
//! round.place(Position::TopLeft).unwrap();
//!
//! let mut scratch = *round.board();
//! let reply = MinimaxEngine::new().best_move(&mut scratch).unwrap();
//! assert_eq!(round.place(reply).unwrap(), Outcome::InProgress);
//! assert_eq!(round.to_move(), Some(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod coordinator;
mod engine;
pub mod invariants;
mod players;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use coordinator::{Coordinator, Matchup, MoveSource, Round, RoundState};
pub use engine::{LOSS_SCORE, MinimaxEngine, SearchStats, WIN_SCORE};
pub use players::{AiPlayer, MovePlayer, RandomPlayer};
pub use position::Position;
pub use types::{Board, Outcome, ParseBoardError, Player, Square};
