//! Board geometry.
//!
//! Locations, directions, and the pure coordinate arithmetic that relates
//! them. Nothing here looks at piece placement.

use serde::{Deserialize, Serialize};

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 5;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A (row, column) coordinate pair.
///
/// Coordinates are signed so that stepping off the board in any direction
/// still yields a representable value; use [`Location::is_legal`] before
/// indexing a board with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: i8,
    pub col: i8,
}

impl Location {
    /// Creates a location. The result is not validated.
    pub const fn new(row: i8, col: i8) -> Self {
        Location { row, col }
    }

    /// Returns the location one step away in `direction`. The result may be
    /// off the board.
    pub const fn adjacent(self, direction: Direction) -> Location {
        let (dr, dc) = direction.delta();
        Location {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Returns true if both coordinates are in `0..BOARD_SIZE`.
    pub const fn is_legal(self) -> bool {
        self.row >= 0
            && self.row < BOARD_SIZE as i8
            && self.col >= 0
            && self.col < BOARD_SIZE as i8
    }

    /// Returns true if this location shares a row or a column with `other`.
    pub const fn is_aligned_with(self, other: Location) -> bool {
        self.row == other.row || self.col == other.col
    }

    /// Row-major cell index. Panics if the location is off the board.
    pub fn index(self) -> usize {
        assert!(self.is_legal(), "location {:?} is off the board", self);
        self.row as usize * BOARD_SIZE + self.col as usize
    }
}

/// One of the four orthogonal unit steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// All directions in canonical scan order. Move enumeration and the
/// computer strategy depend on this order.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// Returns the (row delta, column delta) of a single step.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Returns the lowercase word used in move descriptions.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Returns the single uppercase letter used in compact move notation.
    pub const fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Parses a direction from its single-letter abbreviation.
    pub fn from_letter(c: char) -> Option<Direction> {
        match c {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Returns true if stepping from `location` in `direction` stays on the board.
pub const fn is_within_board(location: Location, direction: Direction) -> bool {
    location.adjacent(direction).is_legal()
}

/// Returns all 25 board locations in row-major order.
pub fn all_locations() -> [Location; CELL_COUNT] {
    let mut locations = [Location::new(0, 0); CELL_COUNT];
    for (i, slot) in locations.iter_mut().enumerate() {
        *slot = Location::new((i / BOARD_SIZE) as i8, (i % BOARD_SIZE) as i8);
    }
    locations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_applies_delta() {
        assert_eq!(Location::new(3, 2).adjacent(Direction::Right), Location::new(3, 3));
        assert_eq!(Location::new(0, 2).adjacent(Direction::Down), Location::new(1, 2));
        assert_eq!(Location::new(1, 1).adjacent(Direction::Up), Location::new(0, 1));
        assert_eq!(Location::new(0, 0).adjacent(Direction::Left), Location::new(0, -1));
    }

    #[test]
    fn legal_location_bounds() {
        assert!(Location::new(1, 3).is_legal());
        assert!(Location::new(0, 0).is_legal());
        assert!(Location::new(4, 4).is_legal());
        assert!(!Location::new(5, 3).is_legal());
        assert!(!Location::new(-1, 0).is_legal());
        assert!(!Location::new(2, 5).is_legal());
    }

    #[test]
    fn within_board_matches_adjacent_legality() {
        for row in -2..7 {
            for col in -2..7 {
                let loc = Location::new(row, col);
                for dir in ALL_DIRECTIONS {
                    assert_eq!(is_within_board(loc, dir), loc.adjacent(dir).is_legal());
                }
            }
        }
        assert!(!is_within_board(Location::new(0, 0), Direction::Up));
        assert!(is_within_board(Location::new(0, 0), Direction::Down));
    }

    #[test]
    fn all_locations_row_major() {
        let locs = all_locations();
        assert_eq!(locs.len(), 25);
        assert_eq!(locs[0], Location::new(0, 0));
        assert_eq!(locs[7], Location::new(1, 2));
        assert_eq!(locs[20], Location::new(4, 0));
        for (i, loc) in locs.iter().enumerate() {
            assert!(loc.is_legal());
            assert_eq!(loc.index(), i);
        }
    }

    #[test]
    fn direction_letter_roundtrip() {
        for d in ALL_DIRECTIONS {
            assert_eq!(Direction::from_letter(d.letter()), Some(d));
        }
        assert_eq!(Direction::from_letter('X'), None);
    }

    #[test]
    fn alignment() {
        assert!(Location::new(1, 3).is_aligned_with(Location::new(1, 0)));
        assert!(Location::new(1, 3).is_aligned_with(Location::new(4, 3)));
        assert!(!Location::new(1, 3).is_aligned_with(Location::new(2, 2)));
    }
}
