//! Move representation.
//!
//! A move is an intent to step the piece at a location one cell in a
//! direction. Whether it is legal depends on the board it is played on.

use super::location::{Direction, Location};

/// A (location, direction) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Location,
    pub direction: Direction,
}

impl Move {
    /// Creates a move.
    pub const fn new(from: Location, direction: Direction) -> Self {
        Move { from, direction }
    }

    /// The location the piece lands on.
    pub const fn dest(self) -> Location {
        self.from.adjacent(self.direction)
    }
}

impl From<(Location, Direction)> for Move {
    fn from((from, direction): (Location, Direction)) -> Self {
        Move { from, direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dest_steps_once() {
        let mv = Move::new(Location::new(2, 2), Direction::Left);
        assert_eq!(mv.dest(), Location::new(2, 1));
    }

    #[test]
    fn from_tuple() {
        let mv: Move = (Location::new(0, 4), Direction::Down).into();
        assert_eq!(mv, Move::new(Location::new(0, 4), Direction::Down));
    }
}
