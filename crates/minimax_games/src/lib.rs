//! Console front end for minimax tic-tac-toe.
//!
//! # Architecture
//!
//! - **Cli**: command-line arguments (clap)
//! - **Config**: optional TOML file with player names and defaults
//! - **Console**: prompts, input validation, board rendering
//! - **Session**: menu, game loop and replay prompt
//! - **Simulate**: AI vs random self-play tallies
//!
//! # Example
//!
//! ```
//! use minimax_games::{ConsoleSession, GameConfig, GameMode};
//! use std::io::Cursor;
//!
//! // X takes the top row while O answers on the middle row.
//! let input = Cursor::new("0\n0\n1\n0\n0\n1\n1\n1\n0\n2\nn\n");
//! let mut output = Vec::new();
//! let mut session = ConsoleSession::new(input, &mut output, GameConfig::default());
//! session.run(Some(GameMode::TwoPlayer)).unwrap();
//!
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("Player X wins!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod mode;
mod render;
mod session;
mod simulate;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use console::{InputError, parse_coordinate, validate_move};
pub use mode::GameMode;
pub use render::render_board;
pub use session::ConsoleSession;
pub use simulate::{SimulationReport, run_simulation};
