//! Game state management and the turn loop.
//!
//! `Game` owns the board and knows whose turn it is. `Console` drives an
//! interactive session over any line reader and writer, alternating human
//! and computer turns until the game ends or input runs out.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::board::{Board, Move, Side};
use crate::movegen::is_legal_move;
use crate::protocol::notation::describe_move;
use crate::protocol::parser::{parse_command, parse_side_choice, Command};
use crate::protocol::render::{render_board, INSTRUCTIONS};
use crate::resolve::{game_outcome, Outcome};
use crate::search::choose_computer_move;

/// Reasons a move can be refused by [`Game::play`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,

    #[error("no {0:?} piece to move at that location")]
    NotYourPiece(Side),

    #[error("illegal move")]
    IllegalMove,
}

/// A game in progress: the board plus the side to move. Musketeers move
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Side,
    plies: usize,
}

impl Game {
    /// Starts a game from the opening position.
    pub fn new() -> Self {
        Game::from_board(Board::initial(), Side::Musketeer)
    }

    /// Starts a game from an arbitrary position.
    pub fn from_board(board: Board, to_move: Side) -> Self {
        Game {
            board,
            to_move,
            plies: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Number of moves played so far.
    pub fn plies(&self) -> usize {
        self.plies
    }

    /// Returns the outcome if the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        game_outcome(&self.board, self.to_move)
    }

    /// Checks whether `mv` may be played by the side to move.
    pub fn validate(&self, mv: Move) -> Result<(), GameError> {
        if self.outcome().is_some() {
            return Err(GameError::GameOver);
        }
        if !mv.from.is_legal() || self.board.get(mv.from) != self.to_move.cell() {
            return Err(GameError::NotYourPiece(self.to_move));
        }
        if !is_legal_move(&self.board, mv.from, mv.direction) {
            return Err(GameError::IllegalMove);
        }
        Ok(())
    }

    /// Plays `mv` for the side to move and passes the turn.
    pub fn play(&mut self, mv: Move) -> Result<(), GameError> {
        self.validate(mv)?;
        self.board.apply_move(mv);
        self.to_move = self.to_move.opponent();
        self.plies += 1;
        Ok(())
    }

    /// The computer's choice for the side to move, or `None` once the game
    /// is over.
    pub fn computer_move(&self) -> Option<Move> {
        if self.outcome().is_some() {
            return None;
        }
        Some(choose_computer_move(&self.board, self.to_move))
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

/// Who makes the moves for a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Human,
    Computer,
}

/// Seat assignment for a console session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seats {
    /// Ask the user which side to play.
    Prompt,
    /// The user plays the given side; the computer plays the other.
    Human(Side),
    /// The computer plays both sides.
    ComputerOnly,
}

/// An interactive text session.
pub struct Console<R, W> {
    input: R,
    out: W,
    seats: Seats,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W, seats: Seats) -> Self {
        Console { input, out, seats }
    }

    /// Consumes the console and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Plays one game. Returns the outcome, or `None` if the user quit or
    /// input ended first.
    pub fn run(&mut self) -> io::Result<Option<Outcome>> {
        let human = match self.seats {
            Seats::Prompt => match self.choose_side()? {
                Some(side) => Some(side),
                None => return Ok(None),
            },
            Seats::Human(side) => Some(side),
            Seats::ComputerOnly => None,
        };
        if human.is_some() {
            writeln!(self.out)?;
            writeln!(self.out, "{}", INSTRUCTIONS)?;
            writeln!(self.out)?;
        }
        let mut game = Game::new();
        write!(self.out, "{}", render_board(game.board()))?;
        writeln!(self.out)?;

        loop {
            if let Some(outcome) = game.outcome() {
                writeln!(self.out, "{}", outcome.announcement())?;
                self.out.flush()?;
                return Ok(Some(outcome));
            }

            let side = game.to_move();
            let player = match human {
                Some(h) if h == side => Player::Human,
                _ => Player::Computer,
            };
            let mv = match player {
                Player::Human => match self.read_human_move(&game)? {
                    Some(mv) => mv,
                    None => {
                        self.out.flush()?;
                        return Ok(None);
                    }
                },
                Player::Computer => choose_computer_move(game.board(), side),
            };

            game.play(mv)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(self.out, "{}", describe_move(side, mv))?;
            writeln!(self.out)?;
            write!(self.out, "{}", render_board(game.board()))?;
            writeln!(self.out)?;
        }
    }

    /// Prompts until the user picks a side. `None` on end of input.
    fn choose_side(&mut self) -> io::Result<Option<Side>> {
        loop {
            write!(self.out, "Would you like to play Musketeer (M) or enemy (R)? ")?;
            self.out.flush()?;
            let line = match self.read_line()? {
                Some(l) => l,
                None => return Ok(None),
            };
            if let Some(side) = parse_side_choice(&line) {
                return Ok(Some(side));
            }
        }
    }

    /// Prompts until the user enters a move the side to move may play.
    /// `None` if the user quits or input ends.
    fn read_human_move(&mut self, game: &Game) -> io::Result<Option<Move>> {
        loop {
            write!(self.out, "Your move? ")?;
            self.out.flush()?;
            let line = match self.read_line()? {
                Some(l) => l,
                None => return Ok(None),
            };

            match parse_command(&line) {
                Ok(Command::Move(mv)) => match game.validate(mv) {
                    Ok(()) => return Ok(Some(mv)),
                    Err(GameError::NotYourPiece(_)) => {
                        writeln!(self.out, "You can't move there!")?;
                    }
                    Err(_) => self.reject(&line)?,
                },
                Ok(Command::Help) => writeln!(self.out, "{}", INSTRUCTIONS)?,
                Ok(Command::Board) => write!(self.out, "{}", render_board(game.board()))?,
                Ok(Command::Quit) => return Ok(None),
                Err(_) => self.reject(&line)?,
            }
        }
    }

    fn reject(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "Illegal move--'{}'", line.trim())?;
        writeln!(self.out, "{}", INSTRUCTIONS)?;
        writeln!(self.out)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
