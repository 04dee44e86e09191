//! Interactive console session: mode menu, game loop, replay prompt.

use crate::console::{Console, InputError, mark_label};
use crate::{GameConfig, GameMode, render_board};
use anyhow::Result;
use minimax_tictactoe::{AiPlayer, Board, Move, MoveSource, MovePlayer, Outcome, Player, Position, Round};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const BANNER: &str = "Welcome to the Enhanced Tic-Tac-Toe Game!";

/// A console session that plays rounds until the players stop.
///
/// In single-player mode the human plays X and the minimax AI plays O. In
/// two-player mode both marks are typed in at the same console.
pub struct ConsoleSession<R, W> {
    console: Console<R, W>,
    config: GameConfig,
    ai: AiPlayer,
    mode: GameMode,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Creates a session reading moves from `input` and printing to `output`.
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        let ai = AiPlayer::new(config.ai_name().clone());
        Self {
            console: Console::new(input, output),
            config,
            ai,
            mode: GameMode::default(),
        }
    }

    /// Runs rounds until the players decline a replay or input ends.
    ///
    /// With `mode` set the menu is skipped for every round.
    #[instrument(skip(self))]
    pub fn run(&mut self, mode: Option<GameMode>) -> Result<()> {
        match self.run_rounds(mode) {
            Err(e) if e.downcast_ref::<InputError>() == Some(&InputError::Closed) => {
                info!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn run_rounds(&mut self, mode: Option<GameMode>) -> Result<()> {
        self.console.say(BANNER)?;
        loop {
            self.mode = match mode {
                Some(mode) => mode,
                None => self.select_mode()?,
            };
            self.play_round()?;

            let replay = self.console.prompt("Do you want to play again? (y/n): ")?;
            if !replay.trim().eq_ignore_ascii_case("y") {
                self.console.say("Thanks for playing!")?;
                return Ok(());
            }
        }
    }

    /// Shows the mode menu until a valid choice is entered.
    fn select_mode(&mut self) -> Result<GameMode> {
        loop {
            self.console.say("Select mode:")?;
            for mode in [GameMode::SinglePlayer, GameMode::TwoPlayer] {
                self.console.say(format!("{}. {}", mode.menu_key(), mode.name()))?;
            }
            let choice = self.console.prompt("Enter 1 or 2: ")?;
            match GameMode::from_menu_choice(&choice) {
                Some(mode) => return Ok(mode),
                None => self.console.say("Invalid selection. Please enter 1 or 2.")?,
            }
        }
    }

    /// Plays one round from an empty board and announces the result.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    fn play_round(&mut self) -> Result<Outcome> {
        let mut round = Round::new();
        self.console.write(&render_board(round.board()))?;

        let outcome = round.play(self)?;
        let message = match outcome {
            Outcome::Won(Player::O) if self.mode.ai_plays_o() => "AI wins!".to_string(),
            Outcome::Won(player) => format!("Player {} wins!", self.label(player)),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress => anyhow::bail!("Round stopped before reaching a result"),
        };
        self.console.say(message)?;
        info!(%outcome, moves = round.history().len(), "Round over");
        Ok(outcome)
    }

    fn label(&self, mark: Player) -> String {
        let name = match mark {
            Player::X => self.config.player_x_name(),
            Player::O => self.config.player_o_name(),
        };
        mark_label(mark, Some(name.as_str()).filter(|n| !n.is_empty()))
    }

    fn print_scores(&mut self, board: &Board) -> Result<()> {
        let mut scratch = *board;
        let scores = self.ai.engine().score_moves(&mut scratch);
        let line = scores
            .iter()
            .map(|(pos, score)| {
                let (row, col) = pos.coords();
                format!("({row}, {col})={score}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.console.say(format!("AI scores: {line}"))
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleSession<R, W> {
    fn next_move(&mut self, board: &Board, player: Player) -> Result<Position> {
        if self.mode.ai_plays_o() && player == Player::O {
            self.console.say("AI is making a move...")?;
            if *self.config.show_scores() {
                self.print_scores(board)?;
            }
            return self.ai.choose_move(board, player);
        }

        let label = self.label(player);
        let position = self.console.read_move(board, &label)?;
        debug!(player = %label, position = %position, "Human chose position");
        Ok(position)
    }

    fn on_move(&mut self, board: &Board, _action: Move, _outcome: Outcome) -> Result<()> {
        self.console.write(&render_board(board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, mode: Option<GameMode>, config: GameConfig) -> String {
        let mut output = Vec::new();
        let mut session = ConsoleSession::new(Cursor::new(input.to_string()), &mut output, config);
        session.run(mode).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_reprompts_on_invalid_choice() {
        let text = run("7\n", None, GameConfig::default());
        assert!(text.starts_with(BANNER));
        assert_eq!(text.matches("Select mode:").count(), 2);
        assert!(text.contains("Invalid selection. Please enter 1 or 2."));
        assert!(text.contains("1. Single Player (You vs AI)"));
        assert!(text.contains("2. Two Players (Player X vs Player O)"));
    }

    #[test]
    fn test_configured_names_in_prompts() {
        let config: GameConfig = toml::from_str("player_x_name = \"Ada\"").unwrap();
        let text = run(
            "0\n0\n1\n0\n0\n1\n1\n1\n0\n2\nn\n",
            Some(GameMode::TwoPlayer),
            config,
        );
        assert!(text.contains("Player Ada, enter row (0-2): "));
        assert!(text.contains("Player O, enter column (0-2): "));
        assert!(text.contains("Player Ada wins!"));
    }

    #[test]
    fn test_eof_mid_game_ends_quietly() {
        let text = run("1\n1\n", None, GameConfig::default());
        assert!(!text.contains("Thanks for playing!"));
    }
}
