use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use conquest::analysis::{find_path, island_of};
use conquest::board::{snapshot_with_units, Board, Coord, Player, UnitType};
use conquest::config::GameConfig;
use conquest::engine::Game;
use conquest::mapgen::generate_board;
use conquest::movegen::choose_move;

fn seeded_board(seed: u64) -> Board {
    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_board(&config, &mut rng).unwrap()
}

/// Board after a few days of play so both sides have units in the field.
fn midgame_board() -> Board {
    let config = GameConfig { seed: 4, max_days: 15, ..GameConfig::default() };
    let mut game = Game::new(&config).unwrap();
    game.play();
    game.board().clone()
}

fn first_land(board: &Board) -> Coord {
    board.cities[0].position
}

fn bench_generate_board(c: &mut Criterion) {
    let config = GameConfig::default();
    c.bench_function("generate_board_25x55", |b| {
        let mut rng = SmallRng::seed_from_u64(1);
        b.iter(|| generate_board(black_box(&config), &mut rng))
    });
}

fn bench_island_of(c: &mut Criterion) {
    let board = seeded_board(2);
    let start = first_land(&board);
    c.bench_function("island_of_home", |b| {
        b.iter(|| island_of(black_box(&board.grid), black_box(start)))
    });
}

fn bench_find_path_fighter(c: &mut Criterion) {
    let board = seeded_board(3);
    let start = Coord::new(0, 0);
    let target = Coord::new(24, 54);
    c.bench_function("find_path_fighter_corner_to_corner", |b| {
        b.iter(|| find_path(black_box(&board.grid), start, target, UnitType::Fighter))
    });
}

fn bench_choose_move(c: &mut Criterion) {
    let board = midgame_board();
    let units: Vec<_> = board.units_owned_by(Player::One).cloned().collect();
    c.bench_function("choose_move_all_units", |b| {
        let mut rng = SmallRng::seed_from_u64(5);
        b.iter(|| {
            for unit in &units {
                black_box(choose_move(&board, unit, &mut rng));
            }
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_game");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));
    let config = GameConfig { seed: 6, max_days: 100, ..GameConfig::default() };
    group.bench_function("play_100_days", |b| {
        b.iter(|| {
            let mut game = Game::new(black_box(&config)).unwrap();
            game.play()
        })
    });
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("snapshot_with_units", |b| {
        b.iter(|| snapshot_with_units(black_box(&board), true))
    });
}

fn bench_board_clone(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("board_clone", |b| b.iter(|| black_box(&board).clone()));
}

criterion_group!(
    benches,
    bench_generate_board,
    bench_island_of,
    bench_find_path_fighter,
    bench_choose_move,
    bench_full_game,
    bench_snapshot,
    bench_board_clone,
);
criterion_main!(benches);
