use criterion::{black_box, criterion_group, criterion_main, Criterion};

use musketeers::board::{Board, Side};
use musketeers::engine::Game;
use musketeers::movegen::{all_possible_moves_for, has_some_legal_move};
use musketeers::protocol::layout::parse_layout;
use musketeers::resolve::is_enemy_win;
use musketeers::search::choose_computer_move;
use musketeers::selfplay::{play_game, SelfPlayConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// A mid-game position with a mix of empty cells, enemies and Musketeers.
const MIDGAME_LAYOUT: &str = "R-RMR/-R-M-/RR-R-/M-R--/-R-RR";

fn bench_movegen(c: &mut Criterion) {
    let opening = Board::initial();
    let midgame = parse_layout(MIDGAME_LAYOUT).unwrap();

    c.bench_function("movegen_opening_musketeer", |b| {
        b.iter(|| all_possible_moves_for(black_box(&opening), black_box(Side::Musketeer)))
    });
    c.bench_function("movegen_midgame_enemy", |b| {
        b.iter(|| all_possible_moves_for(black_box(&midgame), black_box(Side::Enemy)))
    });
    c.bench_function("has_some_legal_move_midgame", |b| {
        b.iter(|| has_some_legal_move(black_box(&midgame), black_box(Side::Musketeer)))
    });
}

fn bench_strategy(c: &mut Criterion) {
    let midgame = parse_layout(MIDGAME_LAYOUT).unwrap();

    c.bench_function("choose_computer_move_musketeer", |b| {
        b.iter(|| choose_computer_move(black_box(&midgame), black_box(Side::Musketeer)))
    });
    c.bench_function("choose_computer_move_enemy", |b| {
        b.iter(|| choose_computer_move(black_box(&midgame), black_box(Side::Enemy)))
    });
    c.bench_function("is_enemy_win", |b| b.iter(|| is_enemy_win(black_box(&midgame))));
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("computer_game_from_opening", |b| {
        b.iter(|| {
            let mut game = Game::new();
            while let Some(mv) = game.computer_move() {
                game.play(mv).unwrap();
            }
            black_box(game.outcome())
        })
    });

    let config = SelfPlayConfig {
        quiet: true,
        ..Default::default()
    };
    c.bench_function("selfplay_game_with_random_opening", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| play_game(black_box(&config), 0, &mut rng))
    });
}

criterion_group!(benches, bench_movegen, bench_strategy, bench_full_game);
criterion_main!(benches);
