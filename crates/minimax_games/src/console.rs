//! Console input: prompting, parsing and validating moves.
//!
//! Everything typed by a human is checked here. The game core only ever
//! receives positions that are in range and empty.

use derive_more::{Display, Error};
use minimax_tictactoe::{Board, Player, Position};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, instrument};

/// Why a line of input was not accepted as a move.
///
/// The display text is what the player sees before being asked again.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Row or column outside 0-2.
    #[display("Invalid input! Please enter numbers between 0 and 2.")]
    OutOfRange {
        /// Row as typed.
        row: i64,
        /// Column as typed.
        col: i64,
    },

    /// Target square already holds a mark.
    #[display("This cell is already taken. Choose another.")]
    Occupied(#[error(not(source))] Position),

    /// Input was not a whole number.
    #[display("Please enter a valid number.")]
    Malformed(#[error(not(source))] String),

    /// Input stream ended.
    #[display("Input closed.")]
    Closed,
}

/// Parses one coordinate as typed (surrounding whitespace allowed).
///
/// Integers too large for `i64` saturate, so they are later reported as out
/// of range rather than malformed.
pub fn parse_coordinate(input: &str) -> Result<i64, InputError> {
    let text = input.trim();
    match text.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(InputError::Malformed(text.to_string())),
        },
    }
}

/// Checks range, then occupancy, and returns the position.
#[instrument(skip(board))]
pub fn validate_move(board: &Board, row: i64, col: i64) -> Result<Position, InputError> {
    let position = usize::try_from(row)
        .ok()
        .zip(usize::try_from(col).ok())
        .and_then(|(r, c)| Position::from_coords(r, c))
        .ok_or(InputError::OutOfRange { row, col })?;

    if !board.is_cell_empty(position) {
        return Err(InputError::Occupied(position));
    }
    Ok(position)
}

/// Line-oriented console shared by prompts and the game loop.
#[derive(Debug)]
pub(crate) struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` without a newline and reads one line back.
    pub(crate) fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed.into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Writes one line.
    pub(crate) fn say(&mut self, text: impl std::fmt::Display) -> anyhow::Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes text as-is.
    pub(crate) fn write(&mut self, text: &str) -> anyhow::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Asks `label` for a row and a column until they name an empty square.
    ///
    /// A malformed row is reported before the column is asked for.
    pub(crate) fn read_move(&mut self, board: &Board, label: &str) -> anyhow::Result<Position> {
        loop {
            let attempt = self
                .prompt(&format!("Player {label}, enter row (0-2): "))
                .and_then(|row| Ok(parse_coordinate(&row)?))
                .and_then(|row| {
                    let col = self.prompt(&format!("Player {label}, enter column (0-2): "))?;
                    Ok((row, parse_coordinate(&col)?))
                })
                .and_then(|(row, col)| Ok(validate_move(board, row, col)?));

            match attempt {
                Ok(position) => return Ok(position),
                Err(e) => match e.downcast::<InputError>() {
                    Ok(InputError::Closed) => return Err(InputError::Closed.into()),
                    Ok(rejected) => {
                        debug!(error = ?rejected, "Rejected move input");
                        self.say(&rejected)?;
                    }
                    Err(other) => return Err(other),
                },
            }
        }
    }
}

/// Label shown in prompts for `mark`: the configured name, or the mark.
pub(crate) fn mark_label(mark: Player, name: Option<&str>) -> String {
    name.map(str::to_string).unwrap_or_else(|| mark.to_string())
}
