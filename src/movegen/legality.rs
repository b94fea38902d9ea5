//! Per-piece move legality.
//!
//! Musketeers may only step onto an adjacent enemy, capturing it. Enemies
//! may only step onto an adjacent empty cell. Neither may leave the board.

use crate::board::{is_within_board, Board, Cell, Direction, Location, ALL_DIRECTIONS};

/// Returns whether the Musketeer at `location` may move in `direction`.
///
/// Panics if `location` does not hold a Musketeer.
pub fn is_legal_move_by_musketeer(board: &Board, location: Location, direction: Direction) -> bool {
    assert_eq!(
        board.get(location),
        Cell::Musketeer,
        "no musketeer at {:?}",
        location
    );
    is_within_board(location, direction) && board.get(location.adjacent(direction)) == Cell::Enemy
}

/// Returns whether the enemy at `location` may move in `direction`.
///
/// Panics if `location` does not hold an enemy.
pub fn is_legal_move_by_enemy(board: &Board, location: Location, direction: Direction) -> bool {
    assert_eq!(
        board.get(location),
        Cell::Enemy,
        "no enemy at {:?}",
        location
    );
    is_within_board(location, direction) && board.get(location.adjacent(direction)) == Cell::Empty
}

/// Returns whether the piece at `location` may move in `direction`.
/// An empty cell has no legal moves.
pub fn is_legal_move(board: &Board, location: Location, direction: Direction) -> bool {
    match board.get(location) {
        Cell::Musketeer => is_legal_move_by_musketeer(board, location, direction),
        Cell::Enemy => is_legal_move_by_enemy(board, location, direction),
        Cell::Empty => false,
    }
}

/// Directions in which the piece at `location` may legally move, in
/// up/down/left/right order. Empty if the cell holds no piece.
pub fn possible_moves_from(board: &Board, location: Location) -> Vec<Direction> {
    ALL_DIRECTIONS
        .into_iter()
        .filter(|&d| is_legal_move(board, location, d))
        .collect()
}

/// Returns whether the piece at `location` has at least one legal move.
pub fn can_move_piece_at(board: &Board, location: Location) -> bool {
    ALL_DIRECTIONS
        .into_iter()
        .any(|d| is_legal_move(board, location, d))
}
