//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use super::rules;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, the AI in single-player games).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used for this square in text layouts.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }

    /// Parses a layout character. Space, `.` and `_` mean empty.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            ' ' | '.' | '_' => Some(Square::Empty),
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }
}

/// Outcome of a round, derived from the board after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// No winner yet and empty squares remain.
    #[display("in progress")]
    InProgress,
    /// A player completed a line.
    #[display("{_0} wins")]
    Won(Player),
    /// Board is full with no winner.
    #[display("draw")]
    Draw,
}

impl Outcome {
    /// Returns true for wins and draws.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from three rows of layout characters.
    ///
    /// ```
    /// use minimax_tictactoe::{Board, Player, Position};
    ///
    /// let board = Board::from_rows(["XX ", "OO ", "   "]).unwrap();
    /// assert!(board.is_cell_empty(Position::MiddleRight));
    /// assert_eq!(board.count(Player::O), 2);
    /// ```
    pub fn from_rows(rows: [&str; 3]) -> Result<Self, ParseBoardError> {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != 3 {
                return Err(ParseBoardError::RowLength {
                    row,
                    len: chars.len(),
                });
            }
            for (col, c) in chars.into_iter().enumerate() {
                board.squares[row * 3 + col] =
                    Square::from_symbol(c).ok_or(ParseBoardError::Symbol { symbol: c })?;
            }
        }
        Ok(board)
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Overwrites a square without any occupancy check.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places `mark` on an empty square.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::SquareOccupied` if the square already holds a mark.
    pub fn place(&mut self, pos: Position, mark: Player) -> Result<(), MoveError> {
        if !self.is_cell_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.set(pos, Square::Occupied(mark));
        Ok(())
    }

    /// Resets a square to empty.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// Returns true if `mark` holds any full row, column or diagonal.
    pub fn has_won(&self, mark: Player) -> bool {
        rules::has_won(self, mark)
    }

    /// Returns the player holding a full line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Empty positions in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_cell_empty(*pos))
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Derives the outcome from the current squares.
    #[instrument(level = "trace")]
    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = self.winner() {
            Outcome::Won(winner)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Squares grouped into rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(3)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine layout characters in row-major order; `/` and newlines
    /// between rows are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| *c != '/' && *c != '\n').collect();
        if chars.len() != 9 {
            return Err(ParseBoardError::Length { len: chars.len() });
        }
        let mut board = Self::new();
        for (i, c) in chars.into_iter().enumerate() {
            board.squares[i] = Square::from_symbol(c).ok_or(ParseBoardError::Symbol { symbol: c })?;
        }
        Ok(board)
    }
}

/// Error building a board from a text layout.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Layout does not hold exactly nine cells.
    #[display("expected 9 cells, got {len}")]
    Length {
        /// Number of cells found.
        len: usize,
    },
    /// A row does not hold exactly three cells.
    #[display("row {row} has {len} cells, expected 3")]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found.
        len: usize,
    },
    /// Unknown layout character.
    #[display("invalid cell symbol {symbol:?}")]
    Symbol {
        /// Offending character.
        symbol: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_then_clear_restores_cell() {
        let mut board = Board::from_rows(["X  ", " O ", "   "]).unwrap();
        let before = board;

        board.place(Position::BottomRight, Player::X).unwrap();
        assert!(!board.is_cell_empty(Position::BottomRight));

        board.clear(Position::BottomRight);
        assert!(board.is_cell_empty(Position::BottomRight));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_rejects_occupied() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X).unwrap();
        assert_eq!(
            board.place(Position::Center, Player::O),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_rows(["X O", " X ", "O  "]).unwrap();
        let cells: Vec<_> = board.empty_cells().collect();
        assert_eq!(
            cells,
            vec![
                Position::TopCenter,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomCenter,
                Position::BottomRight,
            ]
        );
    }

    #[test]
    fn test_outcome_derivation() {
        assert_eq!(Board::new().outcome(), Outcome::InProgress);
        assert_eq!(
            "XXXOO    ".parse::<Board>().unwrap().outcome(),
            Outcome::Won(Player::X)
        );
        assert_eq!("XOXXOOOXX".parse::<Board>().unwrap().outcome(), Outcome::Draw);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::Length { len: 2 })
        );
        assert_eq!(
            Board::from_rows(["XQ ", "   ", "   "]),
            Err(ParseBoardError::Symbol { symbol: 'Q' })
        );
        assert_eq!(
            Board::from_rows(["X", "   ", "   "]),
            Err(ParseBoardError::RowLength { row: 0, len: 1 })
        );
    }

    #[test]
    fn test_slash_separated_layout() {
        let board: Board = "X../.O./..X".parse().unwrap();
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
        assert_eq!(board.filled(), 3);
    }
}
