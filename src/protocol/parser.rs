//! Console command parser.
//!
//! Parses lines typed at the console into structured `Command` variants
//! that the interactive session can dispatch on.

use crate::board::{Move, Side};

use super::notation::{parse_move, NotationError};

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a move for the human side.
    Move(Move),

    /// Print the instructions again.
    Help,

    /// Print the current board.
    Board,

    /// Leave the game.
    Quit,
}

/// Parses a single line of console input.
///
/// Keywords (`help`, `board`, `quit`, `exit`) are matched case-insensitively.
/// Anything else must be a move in [`parse_move`] notation.
pub fn parse_command(line: &str) -> Result<Command, NotationError> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "help" | "?" => Ok(Command::Help),
        "board" => Ok(Command::Board),
        "quit" | "exit" => Ok(Command::Quit),
        _ => parse_move(trimmed).map(Command::Move),
    }
}

/// Interprets an answer to the side prompt. Only the first non-blank
/// character matters: `M` for Musketeer, `R` for enemy, in either case.
pub fn parse_side_choice(answer: &str) -> Option<Side> {
    let first = answer.trim().chars().next()?;
    Side::from_symbol(first.to_ascii_uppercase())
}
