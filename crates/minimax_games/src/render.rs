//! Plain-text board rendering.

use minimax_tictactoe::Board;

/// Renders the board as rows of ` | `-separated cells with dashed
/// separators, with a blank line above and below the rows.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .rows()
        .map(|row| {
            row.iter()
                .map(|square| square.symbol().to_string())
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect();

    format!("\n\n{}\n\n\n", rows.join(&format!("\n{}\n", "-".repeat(9))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let text = render_board(&Board::new());
        assert_eq!(text, "\n\n  |   |  \n---------\n  |   |  \n---------\n  |   |  \n\n\n");
    }

    #[test]
    fn test_render_marks() {
        let board = Board::from_rows(["X O", " X ", "O  "]).unwrap();
        let text = render_board(&board);
        let lines: Vec<&str> = text.trim_matches('\n').lines().collect();
        assert_eq!(lines, ["X |   | O", "---------", "  | X |  ", "---------", "O |   |  "]);
    }
}
