//! Board layout strings.
//!
//! A layout is a compact, single-line snapshot of a board: five rows of
//! five cell symbols (`M` Musketeer, `R` enemy, `-` empty), top row first,
//! separated by `/`.
//!
//! The opening position is `RRRRM/RRRRR/RRMRR/RRRRR/MRRRR`.

use thiserror::Error;

use crate::board::{Board, BoardError, Cell, BOARD_SIZE, CELL_COUNT};

/// Errors that can occur during layout parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("expected 5 rows separated by '/', got {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {len} cells, expected 5")]
    WrongRowLength { row: usize, len: usize },

    #[error("invalid cell character: '{0}'")]
    InvalidCell(char),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Parses a layout string into a board.
pub fn parse_layout(s: &str) -> Result<Board, LayoutError> {
    let rows: Vec<&str> = s.trim().split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(LayoutError::WrongRowCount(rows.len()));
    }

    let mut cells = [Cell::Empty; CELL_COUNT];
    for (r, row) in rows.iter().enumerate() {
        let len = row.chars().count();
        if len != BOARD_SIZE {
            return Err(LayoutError::WrongRowLength { row: r, len });
        }
        for (c, ch) in row.chars().enumerate() {
            cells[r * BOARD_SIZE + c] = Cell::from_symbol(ch).ok_or(LayoutError::InvalidCell(ch))?;
        }
    }

    Ok(Board::from_cells(cells)?)
}

/// Encodes a board as a layout string.
pub fn encode_layout(board: &Board) -> String {
    let mut s = String::with_capacity(CELL_COUNT + BOARD_SIZE - 1);
    for (i, row) in board.cells().chunks(BOARD_SIZE).enumerate() {
        if i > 0 {
            s.push('/');
        }
        s.extend(row.iter().map(|c| c.symbol()));
    }
    s
}
