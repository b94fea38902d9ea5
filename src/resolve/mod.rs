//! Game-end detection.
//!
//! Decides whether the enemies have aligned the Musketeers, or whether the
//! side to move is stuck.

pub mod outcome;

pub use outcome::{game_outcome, is_enemy_win, Outcome};
