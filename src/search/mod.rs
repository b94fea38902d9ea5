//! Computer move selection.
//!
//! A single-ply, first-match heuristic over the enumeration order of
//! [`crate::movegen::all_possible_moves_for`]. There is no lookahead.

pub mod heuristic;

pub use heuristic::{choose_computer_move, isolates_mover};
