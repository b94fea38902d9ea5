//! Board rendering for the text console.

use std::fmt::Write;

use crate::board::{Board, BOARD_SIZE};

/// How to enter a move, shown at the start of a game and after bad input.
pub const INSTRUCTIONS: &str = "\
To make a move, enter the location of the piece you want to move,
and the direction you want it to move. Locations are indicated as a
letter (A, B, C, D, or E) followed by an integer (1, 2, 3, 4, or 5).
Directions are indicated as left, right, up, or down (or simply L, R,
U, or D). For example, to move the Musketeer from the top right-hand
corner to the row below, enter 'A5 down' (without quotes).

For convenience in typing, you may use lowercase letters.
Type 'board' to see the board again, 'help' for these instructions,
or 'quit' to leave the game.";

/// Renders the board as a labelled grid:
///
/// ```text
///     1  2  3  4  5
///   ---------------
/// A | R  R  R  R  M
/// ```
pub fn render_board(board: &Board) -> String {
    let mut s = String::new();
    s.push_str("    1  2  3  4  5\n");
    s.push_str("  ---------------\n");
    for (i, row) in board.cells().chunks(BOARD_SIZE).enumerate() {
        let label = (b'A' + i as u8) as char;
        let cells: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
        let _ = writeln!(s, "{} | {}", label, cells.join("  "));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_initial_board() {
        let text = render_board(&Board::initial());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "    1  2  3  4  5");
        assert_eq!(lines[2], "A | R  R  R  R  M");
        assert_eq!(lines[4], "C | R  R  M  R  R");
        assert_eq!(lines[6], "E | M  R  R  R  R");
    }

    #[test]
    fn instructions_mention_notation() {
        assert!(INSTRUCTIONS.contains("L, R"));
        assert!(INSTRUCTIONS.contains("'A5 down'"));
    }
}
