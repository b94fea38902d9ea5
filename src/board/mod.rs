//! Board representation and game-state types.
//!
//! Contains the geometry of the 5×5 grid, the move type, and the board
//! state itself.

pub mod location;
pub mod moves;
pub mod state;

pub use location::{
    all_locations, is_within_board, Direction, Location, ALL_DIRECTIONS, BOARD_SIZE, CELL_COUNT,
};
pub use moves::Move;
pub use state::{Board, BoardError, Cell, Side, MUSKETEER_COUNT};
