//! Side-specific move heuristics.
//!
//! Enemies push to the right whenever they can. Musketeers prefer a move
//! that lands them off every row and column still held by another
//! Musketeer. Either side falls back to its first legal move.

use crate::board::{Board, Direction, Location, Move, Side};
use crate::movegen::all_possible_moves_for;

/// Chooses a move for `side`. Deterministic for a given board.
///
/// Panics if `side` has no legal move; check
/// [`crate::movegen::has_some_legal_move`] first.
pub fn choose_computer_move(board: &Board, side: Side) -> Move {
    let moves = all_possible_moves_for(board, side);
    assert!(!moves.is_empty(), "{:?} has no legal move", side);

    let preferred = match side {
        Side::Enemy => moves.iter().find(|m| m.direction == Direction::Right),
        Side::Musketeer => {
            let musketeers = board.musketeers();
            moves.iter().find(|m| isolates_mover(&musketeers, **m))
        }
    };

    preferred.copied().unwrap_or(moves[0])
}

/// Returns true if the Musketeer making `mv` ends up sharing neither a row
/// nor a column with any other Musketeer in `musketeers`. The other
/// Musketeers are taken at their current locations.
pub fn isolates_mover(musketeers: &[Location], mv: Move) -> bool {
    let dest = mv.dest();
    musketeers
        .iter()
        .filter(|&&ally| ally != mv.from)
        .all(|&ally| !dest.is_aligned_with(ally))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::layout::parse_layout;

    use crate::board::Direction::{Down, Left};

    const MIXED: &str = "---M-/--RM-/-RMR-/-R---/---R-";

    fn mv(row: i8, col: i8, direction: Direction) -> Move {
        Move::new(Location::new(row, col), direction)
    }

    #[test]
    fn musketeer_avoids_alignment() {
        let board = parse_layout(MIXED).unwrap();
        assert_eq!(choose_computer_move(&board, Side::Musketeer), mv(2, 2, Left));
    }

    #[test]
    fn enemy_prefers_right() {
        let board = parse_layout(MIXED).unwrap();
        assert_eq!(choose_computer_move(&board, Side::Enemy), mv(2, 3, Direction::Right));
    }

    #[test]
    fn enemy_falls_back_to_first_move() {
        let board = parse_layout("--RMR/---MM/-----/-----/-----").unwrap();
        assert_eq!(choose_computer_move(&board, Side::Enemy), mv(0, 2, Down));
    }

    #[test]
    fn musketeer_first_isolating_move() {
        let board = parse_layout("--RMR/---MM/-----/-----/-----").unwrap();
        assert_eq!(choose_computer_move(&board, Side::Musketeer), mv(0, 3, Left));
    }

    #[test]
    fn musketeer_falls_back_when_every_move_aligns() {
        // Every capture lands on a row or column of another Musketeer.
        let board = parse_layout("-MR--/-----/-----/-----/--MM-").unwrap();
        let moves = all_possible_moves_for(&board, Side::Musketeer);
        assert_eq!(moves, vec![mv(0, 1, Direction::Right)]);
        assert_eq!(choose_computer_move(&board, Side::Musketeer), moves[0]);
    }

    #[test]
    fn deterministic() {
        let board = parse_layout(MIXED).unwrap();
        for side in [Side::Musketeer, Side::Enemy] {
            let first = choose_computer_move(&board, side);
            for _ in 0..5 {
                assert_eq!(choose_computer_move(&board, side), first);
            }
        }
    }

    #[test]
    fn opening_move() {
        // B5 is clear of C3 and E1.
        assert_eq!(
            choose_computer_move(&Board::initial(), Side::Musketeer),
            mv(0, 4, Down)
        );
    }

    #[test]
    #[should_panic(expected = "no legal move")]
    fn no_moves_panics() {
        choose_computer_move(&Board::initial(), Side::Enemy);
    }
}
