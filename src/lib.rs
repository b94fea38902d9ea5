//! Three Musketeers engine library.
//!
//! Exposes the board representation, move generation, win detection,
//! computer strategy, and text protocol modules for use by the binaries,
//! integration tests and benchmarks.

pub mod board;
pub mod engine;
pub mod movegen;
pub mod protocol;
pub mod resolve;
pub mod search;
pub mod selfplay;
