//! Win conditions.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Side};
use crate::movegen::has_some_legal_move;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// All three Musketeers share a row or a column.
    EnemyWin,
    /// The side to move had no legal move.
    MusketeerWin,
}

impl Outcome {
    /// The winning side.
    pub const fn winner(self) -> Side {
        match self {
            Outcome::EnemyWin => Side::Enemy,
            Outcome::MusketeerWin => Side::Musketeer,
        }
    }

    /// Announcement printed at the end of a console game.
    pub const fn announcement(self) -> &'static str {
        match self {
            Outcome::EnemyWin => "Cardinal Richleau's men win!",
            Outcome::MusketeerWin => "The Musketeers win!",
        }
    }
}

/// Returns true if all three Musketeers share a row or share a column.
pub fn is_enemy_win(board: &Board) -> bool {
    let [a, b, c] = board.musketeers();
    (a.row == b.row && b.row == c.row) || (a.col == b.col && b.col == c.col)
}

/// Returns the outcome of the game if it is over with `to_move` on turn.
///
/// Alignment is checked first. Otherwise, a side that cannot move loses the
/// game to the Musketeers, whichever side it is.
pub fn game_outcome(board: &Board, to_move: Side) -> Option<Outcome> {
    if is_enemy_win(board) {
        return Some(Outcome::EnemyWin);
    }
    if !has_some_legal_move(board, to_move) {
        return Some(Outcome::MusketeerWin);
    }
    None
}
