//! Board state representation.
//!
//! Holds the 5×5 grid of cells. A board always contains exactly three
//! Musketeers: every constructor checks it, and the only mutator,
//! [`Board::apply_move`], never removes one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::location::{all_locations, Location, CELL_COUNT};
use super::moves::Move;

/// Number of Musketeer pieces on every board.
pub const MUSKETEER_COUNT: usize = 3;

/// Errors raised when building a board from raw cells.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("a board needs exactly 3 musketeers, found {0}")]
    MusketeerCount(usize),
}

/// The contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Musketeer,
    Enemy,
}

impl Cell {
    /// Returns the single-character layout symbol.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Musketeer => 'M',
            Cell::Enemy => 'R',
        }
    }

    /// Parses a cell from its layout symbol.
    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '-' => Some(Cell::Empty),
            'M' => Some(Cell::Musketeer),
            'R' => Some(Cell::Enemy),
            _ => None,
        }
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Musketeer,
    Enemy,
}

impl Side {
    /// The cell value occupied by this side's pieces.
    pub const fn cell(self) -> Cell {
        match self {
            Side::Musketeer => Cell::Musketeer,
            Side::Enemy => Cell::Enemy,
        }
    }

    /// The other side.
    pub const fn opponent(self) -> Side {
        match self {
            Side::Musketeer => Side::Enemy,
            Side::Enemy => Side::Musketeer,
        }
    }

    /// Capitalized name used when describing moves.
    pub const fn name(self) -> &'static str {
        match self {
            Side::Musketeer => "Musketeer",
            Side::Enemy => "Enemy",
        }
    }

    /// Parses a side from its symbol, `M` or `R`.
    pub fn from_symbol(c: char) -> Option<Side> {
        match c {
            'M' => Some(Side::Musketeer),
            'R' => Some(Side::Enemy),
            _ => None,
        }
    }

    /// Returns the side owning a cell, if any.
    pub const fn of_cell(cell: Cell) -> Option<Side> {
        match cell {
            Cell::Musketeer => Some(Side::Musketeer),
            Cell::Enemy => Some(Side::Enemy),
            Cell::Empty => None,
        }
    }
}

/// The 5×5 playing grid.
///
/// Cells are stored row-major. The grid is small enough to be `Copy`, so
/// callers that want to look ahead can simply copy it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates the canonical opening position: Musketeers on A5, C3 and E1,
    /// enemies everywhere else.
    pub fn initial() -> Self {
        let mut cells = [Cell::Enemy; CELL_COUNT];
        for loc in [Location::new(0, 4), Location::new(2, 2), Location::new(4, 0)] {
            cells[loc.index()] = Cell::Musketeer;
        }
        Board { cells }
    }

    /// Builds a board from row-major cells. Fails unless exactly three cells
    /// hold a Musketeer.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Result<Self, BoardError> {
        let musketeers = cells.iter().filter(|c| **c == Cell::Musketeer).count();
        if musketeers != MUSKETEER_COUNT {
            return Err(BoardError::MusketeerCount(musketeers));
        }
        Ok(Board { cells })
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns the cell at `location`. Panics if the location is off the board.
    pub fn get(&self, location: Location) -> Cell {
        self.cells[location.index()]
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Locations of all pieces belonging to `side`, in row-major order.
    pub fn locations_of(&self, side: Side) -> Vec<Location> {
        let cell = side.cell();
        all_locations()
            .into_iter()
            .filter(|loc| self.cells[loc.index()] == cell)
            .collect()
    }

    /// The three Musketeer locations in row-major order.
    pub fn musketeers(&self) -> [Location; MUSKETEER_COUNT] {
        let mut found = [Location::new(0, 0); MUSKETEER_COUNT];
        let mut n = 0;
        for loc in all_locations() {
            if self.cells[loc.index()] == Cell::Musketeer {
                found[n] = loc;
                n += 1;
            }
        }
        debug_assert_eq!(n, MUSKETEER_COUNT);
        found
    }

    /// Plays `mv`: the mover's piece lands on the destination (replacing any
    /// enemy standing there) and the source becomes empty.
    ///
    /// The move must be legal on this board.
    pub fn apply_move(&mut self, mv: Move) {
        debug_assert!(
            crate::movegen::is_legal_move(self, mv.from, mv.direction),
            "illegal move {:?} applied",
            mv
        );
        let mover = self.get(mv.from);
        self.cells[mv.dest().index()] = mover;
        self.cells[mv.from.index()] = Cell::Empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}
