//! Legal move generation.
//!
//! Enumerates every legal move for a side in a fixed order: pieces are
//! scanned row-major and, for each piece, directions are tried up, down,
//! left, right. The computer strategy relies on first-match semantics over
//! this order.

pub mod legality;

use rand::Rng;

use crate::board::{Board, Move, Side};

pub use legality::{
    can_move_piece_at, is_legal_move, is_legal_move_by_enemy, is_legal_move_by_musketeer,
    possible_moves_from,
};

/// Returns every legal move for `side`, in enumeration order.
pub fn all_possible_moves_for(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    for location in board.locations_of(side) {
        for direction in possible_moves_from(board, location) {
            moves.push(Move::new(location, direction));
        }
    }
    moves
}

/// Returns whether `side` has at least one legal move.
pub fn has_some_legal_move(board: &Board, side: Side) -> bool {
    board
        .locations_of(side)
        .into_iter()
        .any(|location| can_move_piece_at(board, location))
}

/// Picks a uniformly random legal move for `side`, or `None` if the side
/// cannot move.
pub fn random_move(board: &Board, side: Side, rng: &mut impl Rng) -> Option<Move> {
    let legal = all_possible_moves_for(board, side);
    if legal.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..legal.len());
    Some(legal[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{all_locations, Direction, Location};
    use crate::protocol::layout::parse_layout;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use crate::board::Direction::{Down, Left, Right, Up};

    fn mv(row: i8, col: i8, direction: Direction) -> Move {
        Move::new(Location::new(row, col), direction)
    }

    #[test]
    fn enumeration_order_is_row_major_then_direction() {
        let board = parse_layout("--RMR/---MM/-----/-----/-----").unwrap();
        assert_eq!(
            all_possible_moves_for(&board, Side::Musketeer),
            vec![mv(0, 3, Left), mv(0, 3, Right), mv(1, 4, Up)]
        );
        assert_eq!(
            all_possible_moves_for(&board, Side::Enemy),
            vec![mv(0, 2, Down), mv(0, 2, Left)]
        );
    }

    #[test]
    fn opening_moves() {
        let board = Board::initial();
        let moves = all_possible_moves_for(&board, Side::Musketeer);
        assert_eq!(
            moves,
            vec![
                mv(0, 4, Down),
                mv(0, 4, Left),
                mv(2, 2, Up),
                mv(2, 2, Down),
                mv(2, 2, Left),
                mv(2, 2, Right),
                mv(4, 0, Up),
                mv(4, 0, Right),
            ]
        );
        assert!(all_possible_moves_for(&board, Side::Enemy).is_empty());
        assert!(!has_some_legal_move(&board, Side::Enemy));
    }

    #[test]
    fn stuck_musketeers() {
        let board = parse_layout("---M-/-R-M-/--M-R/-R---/---R-").unwrap();
        assert!(!has_some_legal_move(&board, Side::Musketeer));
        assert!(has_some_legal_move(&board, Side::Enemy));
    }

    #[test]
    fn has_some_legal_move_agrees_with_enumeration() {
        let boards = [
            Board::initial(),
            parse_layout("--RMR/---MM/-----/-----/-----").unwrap(),
            parse_layout("---M-/-R-M-/--M-R/-R---/---R-").unwrap(),
            parse_layout("M-M-M/-----/-----/-----/-----").unwrap(),
            parse_layout("MRRRR/RMRRR/RRMRR/RRRRR/RRRRR").unwrap(),
        ];
        for board in &boards {
            for side in [Side::Musketeer, Side::Enemy] {
                assert_eq!(
                    has_some_legal_move(board, side),
                    !all_possible_moves_for(board, side).is_empty()
                );
            }
        }
    }

    #[test]
    fn every_enumerated_move_is_legal() {
        let board = parse_layout("R-RMR/-R-M-/RR-R-/M-R--/-R---").unwrap();
        for side in [Side::Musketeer, Side::Enemy] {
            for m in all_possible_moves_for(&board, side) {
                assert_eq!(board.get(m.from), side.cell());
                assert!(is_legal_move(&board, m.from, m.direction));
            }
        }
        let total: usize = all_locations()
            .iter()
            .map(|&l| possible_moves_from(&board, l).len())
            .sum();
        assert_eq!(
            total,
            all_possible_moves_for(&board, Side::Musketeer).len()
                + all_possible_moves_for(&board, Side::Enemy).len()
        );
    }

    #[test]
    fn random_move_is_legal_and_seeded() {
        let board = Board::initial();
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            let m = random_move(&board, Side::Musketeer, &mut a).unwrap();
            assert!(is_legal_move(&board, m.from, m.direction));
            assert_eq!(Some(m), random_move(&board, Side::Musketeer, &mut b));
        }
        assert_eq!(random_move(&board, Side::Enemy, &mut a), None);
    }
}
