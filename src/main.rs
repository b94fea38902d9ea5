//! Three Musketeers -- play against the computer at the console.
//!
//! This binary reads moves from stdin and writes the board and the
//! computer's replies to stdout.
//!
//! Usage:
//!   musketeers [--side M|R] [--computer]

use std::env;
use std::io::{self, BufWriter};
use std::process;

use musketeers::engine::{Console, Seats};
use musketeers::protocol::parser::parse_side_choice;

fn print_usage() {
    eprintln!("Usage: musketeers [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --side M|R   Play the Musketeers (M) or the enemy (R) without being asked");
    eprintln!("  --computer   Let the computer play both sides");
    eprintln!("  --help       Show this help");
}

/// Runs one interactive game on stdin/stdout.
fn main() {
    let args: Vec<String> = env::args().collect();
    let mut seats = Seats::Prompt;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--side" => {
                i += 1;
                match args.get(i).and_then(|s| parse_side_choice(s)) {
                    Some(side) => seats = Seats::Human(side),
                    None => {
                        eprintln!("invalid --side value, expected M or R");
                        print_usage();
                        process::exit(1);
                    }
                }
            }
            "--computer" => {
                seats = Seats::ComputerOnly;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    let mut console = Console::new(stdin.lock(), out, seats);

    if let Err(e) = console.run() {
        eprintln!("console error: {}", e);
        process::exit(1);
    }
}
