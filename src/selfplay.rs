//! Self-play game generation.
//!
//! Plays complete computer-vs-computer games and records every position
//! and move. A few random opening plies give each game a different start;
//! after that both sides use the deterministic computer strategy.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::board::Side;
use crate::engine::Game;
use crate::movegen::random_move;
use crate::protocol::layout::encode_layout;
use crate::protocol::notation::format_move;
use crate::resolve::Outcome;

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Number of opening plies chosen uniformly at random.
    pub opening_plies: usize,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            opening_plies: 4,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// A single recorded ply.
#[derive(Debug, Clone, Serialize)]
pub struct PlyRecord {
    /// Layout of the board before the move.
    pub layout: String,
    /// Side that moved.
    pub side: Side,
    /// The move in canonical notation, e.g. `A5 down`.
    #[serde(rename = "move")]
    pub mv: String,
    /// Whether the move was picked at random.
    pub random: bool,
}

/// A complete self-play game record.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// How the game ended.
    pub outcome: Outcome,
    /// The winning side.
    pub winner: Side,
    /// Number of moves played.
    pub plies: usize,
    /// Layout of the final position.
    pub final_layout: String,
    /// All plies in order.
    pub moves: Vec<PlyRecord>,
}

/// Plays a single game from the opening position.
pub fn play_game(config: &SelfPlayConfig, game_id: usize, rng: &mut impl Rng) -> GameRecord {
    let mut game = Game::new();
    let mut moves = Vec::new();

    let outcome = loop {
        if let Some(outcome) = game.outcome() {
            break outcome;
        }
        let side = game.to_move();
        let random = game.plies() < config.opening_plies;
        let chosen = if random {
            random_move(game.board(), side, rng)
        } else {
            game.computer_move()
        };
        // outcome() was None, so the side to move has a legal move.
        let Some(mv) = chosen else {
            unreachable!("{:?} to move without a legal move", side);
        };

        moves.push(PlyRecord {
            layout: encode_layout(game.board()),
            side,
            mv: format_move(mv),
            random,
        });
        if let Err(e) = game.play(mv) {
            unreachable!("generated move {:?} rejected: {}", mv, e);
        }
    };

    GameRecord {
        game_id,
        outcome,
        winner: outcome.winner(),
        plies: game.plies(),
        final_layout: encode_layout(game.board()),
        moves,
    }
}

fn seeded_rng(seed: u64, game_id: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Runs self-play generation, producing `config.num_games` records ordered
/// by game ID.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
/// Each game seeds its own generator from `seed + game_id`, so a non-zero
/// seed gives the same games regardless of thread count.
pub fn run_self_play(config: &SelfPlayConfig) -> Vec<GameRecord> {
    if config.threads > 1 {
        run_self_play_parallel(config)
    } else {
        run_self_play_sequential(config)
    }
}

/// Sequential self-play: plays games one at a time.
fn run_self_play_sequential(config: &SelfPlayConfig) -> Vec<GameRecord> {
    (0..config.num_games)
        .map(|i| {
            let start = Instant::now();
            let mut rng = seeded_rng(config.seed, i);
            let game = play_game(config, i, &mut rng);
            if !config.quiet {
                report(&game, i + 1, config.num_games, start);
            }
            game
        })
        .collect()
}

/// Parallel self-play: plays games concurrently on a dedicated rayon pool.
fn run_self_play_parallel(config: &SelfPlayConfig) -> Vec<GameRecord> {
    use rayon::prelude::*;

    let completed = AtomicUsize::new(0);
    let play = || -> Vec<GameRecord> {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| {
                let start = Instant::now();
                let mut rng = seeded_rng(config.seed, i);
                let game = play_game(config, i, &mut rng);
                if !config.quiet {
                    let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    report(&game, n, config.num_games, start);
                }
                game
            })
            .collect()
    };

    match rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
    {
        Ok(pool) => pool.install(play),
        Err(e) => {
            eprintln!("failed to build thread pool ({}), using the global pool", e);
            play()
        }
    }
}

fn report(game: &GameRecord, n: usize, total: usize, start: Instant) {
    eprintln!(
        "Game {}/{}: {:?} wins after {} plies ({:.3}s)",
        n,
        total,
        game.winner,
        game.plies,
        start.elapsed().as_secs_f64(),
    );
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints a summary of self-play results to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let total = games.len();
    let enemy_wins = games.iter().filter(|g| g.outcome == Outcome::EnemyWin).count();
    let musketeer_wins = total - enemy_wins;
    let total_plies: usize = games.iter().map(|g| g.plies).sum();

    eprintln!("=== Self-Play Summary ===");
    eprintln!("Games: {}", total);
    eprintln!(
        "Avg plies/game: {:.1}",
        total_plies as f64 / total.max(1) as f64
    );
    eprintln!(
        "  Musketeers: {} ({:.1}%)",
        musketeer_wins,
        100.0 * musketeer_wins as f64 / total.max(1) as f64
    );
    eprintln!(
        "  Enemies:    {} ({:.1}%)",
        enemy_wins,
        100.0 * enemy_wins as f64 / total.max(1) as f64
    );
}
