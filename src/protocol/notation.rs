//! Location, direction and move notation.
//!
//! A location is written as a row letter `A`-`E` followed by a column digit
//! `1`-`5`, so `A5` is row 0, column 4. Directions are written as `L`, `R`,
//! `U`, `D` or as the full words. A move is a location followed by a
//! direction, with optional whitespace: `A5L`, `a5 left`.

use thiserror::Error;

use crate::board::{Direction, Location, Move, Side, BOARD_SIZE};

/// Errors that can occur when parsing notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid location '{0}'")]
    InvalidLocation(String),

    #[error("invalid direction '{0}'")]
    InvalidDirection(String),

    #[error("invalid move '{0}'")]
    InvalidMove(String),
}

const FIRST_ROW: u8 = b'A';
const FIRST_COL: u8 = b'1';

/// Parses a two-character location such as `A5`.
///
/// Only uppercase row letters are accepted; callers that want to be lenient
/// should uppercase first.
pub fn parse_location(s: &str) -> Result<Location, NotationError> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::InvalidLocation(s.to_string()));
    }
    let row = bytes[0].wrapping_sub(FIRST_ROW);
    let col = bytes[1].wrapping_sub(FIRST_COL);
    if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
        return Err(NotationError::InvalidLocation(s.to_string()));
    }
    Ok(Location::new(row as i8, col as i8))
}

/// Formats a location as `A1`..`E5`. Panics if the location is off the board.
pub fn format_location(location: Location) -> String {
    assert!(location.is_legal(), "cannot format off-board location {:?}", location);
    let mut s = String::with_capacity(2);
    s.push((FIRST_ROW + location.row as u8) as char);
    s.push((FIRST_COL + location.col as u8) as char);
    s
}

/// Parses a direction from a letter or a word, ignoring case.
pub fn parse_direction(s: &str) -> Result<Direction, NotationError> {
    match s.to_ascii_uppercase().as_str() {
        "U" | "UP" => Ok(Direction::Up),
        "D" | "DOWN" => Ok(Direction::Down),
        "L" | "LEFT" => Ok(Direction::Left),
        "R" | "RIGHT" => Ok(Direction::Right),
        _ => Err(NotationError::InvalidDirection(s.to_string())),
    }
}

/// Parses a move such as `A5 left` or `c3u`. Whitespace is ignored and
/// letters may be either case.
pub fn parse_move(s: &str) -> Result<Move, NotationError> {
    let compact: String = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if compact.len() < 3 || !compact.is_char_boundary(2) {
        return Err(NotationError::InvalidMove(s.to_string()));
    }
    let (loc_part, dir_part) = compact.split_at(2);
    let from = parse_location(loc_part).map_err(|_| NotationError::InvalidMove(s.to_string()))?;
    let direction =
        parse_direction(dir_part).map_err(|_| NotationError::InvalidMove(s.to_string()))?;
    Ok(Move::new(from, direction))
}

/// Formats a move in canonical form, e.g. `A5 left`.
pub fn format_move(mv: Move) -> String {
    format!("{} {}", format_location(mv.from), mv.direction.name())
}

/// Describes a played move, e.g. `Musketeer moves down from A5 to B5.`
pub fn describe_move(side: Side, mv: Move) -> String {
    format!(
        "{} moves {} from {} to {}.",
        side.name(),
        mv.direction.name(),
        format_location(mv.from),
        format_location(mv.dest())
    )
}
