//! Batch AI-vs-AI games.
//!
//! Plays many independent games, each on its own map with its own seeded
//! RNG, and records a per-day history of city and unit counts. Games run in
//! parallel on a rayon pool when more than one thread is requested.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::{Board, Player, ALL_PLAYERS};
use crate::config::GameConfig;
use crate::engine::{Game, GameError};
use crate::mapgen::generate_board;

/// Configuration for a batch of games.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Base seed; game `i` uses `seed + i`. 0 draws each game from entropy.
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
    /// Map and rule parameters shared by every game. Its own seed is ignored.
    pub game: GameConfig,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            threads: 4,
            seed: 0,
            quiet: false,
            game: GameConfig::default(),
        }
    }
}

/// Board totals at the end of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    pub day: u32,
    /// Cities held by player one and player two.
    pub cities: [usize; 2],
    /// Units fielded by player one and player two.
    pub units: [usize; 2],
}

impl DayRecord {
    fn capture(board: &Board) -> Self {
        DayRecord {
            day: board.day,
            cities: ALL_PLAYERS.map(|p| board.cities_owned_by(p).count()),
            units: ALL_PLAYERS.map(|p| board.units_owned_by(p).count()),
        }
    }
}

/// A complete game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    /// Seed the game was played with, when it was seeded.
    pub seed: Option<u64>,
    /// Winning player id (1 or 2), if any.
    pub winner: Option<u8>,
    pub days: u32,
    pub land_cells: usize,
    pub total_cities: usize,
    pub history: Vec<DayRecord>,
}

impl GameRecord {
    pub fn final_day(&self) -> Option<&DayRecord> {
        self.history.last()
    }
}

/// Plays one game to completion.
pub fn play_game(
    config: &GameConfig,
    game_id: usize,
    seed: Option<u64>,
    mut rng: SmallRng,
) -> Result<GameRecord, GameError> {
    config.validate()?;
    let board = generate_board(config, &mut rng)?;
    let land_cells = board.grid.land_count();
    let total_cities = board.cities.len();
    let mut game = Game::from_board(board, rng, config.max_days);

    let mut history = Vec::new();
    let mut winner = None;
    while game.day() < game.max_days() {
        winner = game.play_day();
        history.push(DayRecord::capture(game.board()));
        if winner.is_some() {
            break;
        }
    }

    Ok(GameRecord {
        game_id,
        seed,
        winner: winner.map(Player::id),
        days: game.day(),
        land_cells,
        total_cities,
        history,
    })
}

fn game_rng(base_seed: u64, game_id: usize) -> (Option<u64>, SmallRng) {
    if base_seed != 0 {
        let seed = base_seed.wrapping_add(game_id as u64);
        (Some(seed), SmallRng::seed_from_u64(seed))
    } else {
        (None, SmallRng::from_entropy())
    }
}

fn report(game: &GameRecord, n: usize, total: usize, secs: f64) {
    let outcome = match game.winner {
        Some(id) => format!("player {id} wins"),
        None => "draw".to_string(),
    };
    eprintln!("Game {n}/{total}: {outcome} on day {} ({secs:.2}s)", game.days);
}

/// Runs a batch and collects every game that could be generated.
pub fn run_self_play(config: &SelfPlayConfig) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(config.num_games);
    run_self_play_with_callback(config, |game| games.push(game));
    games.sort_by_key(|g| g.game_id);
    games
}

/// Runs a batch, handing each finished game to `on_game` as it completes.
/// Games whose map cannot be generated are logged and skipped.
pub fn run_self_play_with_callback<F>(config: &SelfPlayConfig, on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    if config.threads > 1 {
        run_self_play_parallel(config, on_game);
    } else {
        run_self_play_sequential(config, on_game);
    }
}

fn run_self_play_sequential<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    for i in 0..config.num_games {
        let (seed, rng) = game_rng(config.seed, i);
        let start = Instant::now();
        match play_game(&config.game, i, seed, rng) {
            Ok(game) => {
                if !config.quiet {
                    report(&game, i + 1, config.num_games, start.elapsed().as_secs_f64());
                }
                on_game(game);
            }
            Err(e) => tracing::warn!(game = i, ?seed, error = %e, "game skipped"),
        }
    }
}

fn run_self_play_parallel<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::warn!(error = %e, "thread pool unavailable, playing sequentially");
            return run_self_play_sequential(config, on_game);
        }
    };

    let completed = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<GameRecord>();

    std::thread::scope(|scope| {
        scope.spawn(|| {
            pool.install(|| {
                (0..config.num_games)
                    .into_par_iter()
                    .for_each_with(tx, |tx, i| {
                        let (seed, rng) = game_rng(config.seed, i);
                        let start = Instant::now();
                        match play_game(&config.game, i, seed, rng) {
                            Ok(game) => {
                                if !config.quiet {
                                    let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                                    report(&game, n, config.num_games, start.elapsed().as_secs_f64());
                                }
                                let _ = tx.send(game);
                            }
                            Err(e) => tracing::warn!(game = i, ?seed, error = %e, "game skipped"),
                        }
                    });
            });
        });

        for game in rx {
            on_game(game);
        }
    });
}

/// Writes game records as JSONL, one object per line.
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints win rates and game lengths to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let total = games.len();
    let mut wins = [0usize; 2];
    let mut draws = 0usize;
    let mut total_days = 0u64;

    for game in games {
        total_days += u64::from(game.days);
        match game.winner.and_then(Player::from_id) {
            Some(p) => wins[p.index()] += 1,
            None => draws += 1,
        }
    }

    eprintln!("=== Self-Play Summary ===");
    eprintln!("Games: {}", total);
    eprintln!("Avg days/game: {:.1}", total_days as f64 / total.max(1) as f64);
    eprintln!("Draws: {}", draws);
    for player in ALL_PLAYERS {
        let n = wins[player.index()];
        let pct = 100.0 * n as f64 / total.max(1) as f64;
        eprintln!("  {:>8}: {} ({:.1}%)", player.to_string(), n, pct);
    }
}
