//! Random map generation.
//!
//! A map is built in three steps: elliptical islands are stamped onto an
//! all-sea grid, cities are scattered over land so that no two touch, and
//! each player is handed a distinct home city.

use rand::Rng;

use crate::board::{Board, Coord, Grid, ALL_PLAYERS};
use crate::config::GameConfig;
use crate::movegen::choose_production;

/// Island X radius (columns) is drawn from this range.
pub const ISLAND_RADIUS_X: std::ops::RangeInclusive<i32> = 2..=9;
/// Island Y radius (rows) is drawn from this range.
pub const ISLAND_RADIUS_Y: std::ops::RangeInclusive<i32> = 2..=7;

/// Errors raised while building a map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapGenError {
    #[error("grid must be non-empty, got {rows}x{columns}")]
    EmptyGrid { rows: usize, columns: usize },

    #[error("placed only {placed} of {requested} cities after {attempts} attempts")]
    CityPlacement {
        placed: usize,
        requested: usize,
        attempts: usize,
    },

    #[error("need at least 2 cities to seed home cities, found {0}")]
    NotEnoughCities(usize),
}

/// Stamps `count` random ellipses of land onto the grid. Land is only ever
/// added, so overlapping islands merge.
pub fn generate_islands(grid: &mut Grid, count: usize, rng: &mut impl Rng) {
    let (rows, columns) = (grid.rows() as i32, grid.columns() as i32);
    if rows == 0 || columns == 0 {
        return;
    }

    for _ in 0..count {
        let center = Coord::new(rng.gen_range(0..rows), rng.gen_range(0..columns));
        let rx = rng.gen_range(ISLAND_RADIUS_X);
        let ry = rng.gen_range(ISLAND_RADIUS_Y);

        // Cells outside the bounding box can never satisfy the ellipse test.
        for x in (center.x - ry).max(0)..=(center.x + ry).min(rows - 1) {
            for y in (center.y - rx).max(0)..=(center.y + rx).min(columns - 1) {
                let dx = f64::from(y - center.y) / f64::from(rx);
                let dy = f64::from(x - center.x) / f64::from(ry);
                if dx * dx + dy * dy <= 1.0 {
                    grid[Coord::new(x, y)].is_land = true;
                }
            }
        }
    }
}

/// Scatters `count` cities over land by rejection sampling: a random cell is
/// accepted when it is land and its 3x3 block holds no city. Sampling stops
/// with an error once `max_attempts` cells have been tried in total.
pub fn place_cities(
    board: &mut Board,
    count: usize,
    max_attempts: usize,
    rng: &mut impl Rng,
) -> Result<(), MapGenError> {
    let (rows, columns) = (board.grid.rows() as i32, board.grid.columns() as i32);
    if count == 0 {
        return Ok(());
    }
    if rows == 0 || columns == 0 {
        return Err(MapGenError::EmptyGrid {
            rows: board.grid.rows(),
            columns: board.grid.columns(),
        });
    }

    let mut placed = 0;
    let mut attempts = 0;
    while placed < count {
        if attempts == max_attempts {
            return Err(MapGenError::CityPlacement {
                placed,
                requested: count,
                attempts,
            });
        }
        attempts += 1;

        let pos = Coord::new(rng.gen_range(0..rows), rng.gen_range(0..columns));
        if board.grid.is_land(pos) && !board.grid.has_neighboring_city(pos, false) {
            board.add_city(pos);
            placed += 1;
        }
    }

    tracing::debug!(cities = placed, attempts, "cities placed");
    Ok(())
}

/// Gives each player a distinct random home city, player one first. AI
/// players get a production target straight away. Fog lifts around each home.
pub fn seed_home_cities(board: &mut Board, rng: &mut impl Rng) -> Result<[Coord; 2], MapGenError> {
    let n = board.cities.len();
    if n < 2 {
        return Err(MapGenError::NotEnoughCities(n));
    }

    let first = rng.gen_range(0..n);
    let mut second = rng.gen_range(0..n - 1);
    if second >= first {
        second += 1;
    }

    let mut homes = [Coord::new(0, 0); 2];
    for (player, idx) in ALL_PLAYERS.into_iter().zip([first, second]) {
        let pos = board.cities[idx].position;
        board.occupy_city(pos, player);
        if board.controller(player).is_ai() {
            let unit_type = choose_production(board, pos, player, rng);
            board.set_production(pos, unit_type);
        }
        board.grid.reveal_around(pos, 1);
        homes[player.index()] = pos;
        tracing::info!(%player, home = %pos, "home city assigned");
    }
    Ok(homes)
}

/// Builds a ready-to-play board from `config`.
pub fn generate_board(config: &GameConfig, rng: &mut impl Rng) -> Result<Board, MapGenError> {
    if config.rows == 0 || config.columns == 0 {
        return Err(MapGenError::EmptyGrid {
            rows: config.rows,
            columns: config.columns,
        });
    }

    let mut board = Board::new(config.rows, config.columns);
    board.new_city_strength = config.new_city_strength;
    board.controllers = config.players;

    generate_islands(&mut board.grid, config.islands, rng);
    place_cities(&mut board, config.cities, config.max_placement_attempts, rng)?;
    seed_home_cities(&mut board, rng)?;

    tracing::info!(
        rows = config.rows,
        columns = config.columns,
        land = board.grid.land_count(),
        cities = board.cities.len(),
        "map generated"
    );
    Ok(board)
}
