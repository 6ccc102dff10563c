//! AI production policy.
//!
//! A city picks its next unit type from a weighted table chosen by three
//! facts about its island: whether the owner already holds every city on it,
//! whether the city touches the sea, and whether the owner has amassed enough
//! tanks there.

use rand::Rng;

use crate::analysis::{is_conquered, island_of, unit_count};
use crate::board::{Board, Coord, Player, UnitType};

/// Tanks on an island at which production shifts away from more tanks.
pub const TANK_SATURATION: usize = 10;

type Weights = &'static [(UnitType, u32)];

const CONQUERED_COASTAL: Weights = &[
    (UnitType::Tank, 1),
    (UnitType::Fighter, 1),
    (UnitType::Bomber, 1),
    (UnitType::Transport, 1),
    (UnitType::Destroyer, 2),
    (UnitType::Submarine, 2),
    (UnitType::Carrier, 2),
    (UnitType::Battleship, 3),
];
const CONQUERED_INLAND_SATURATED: Weights = &[
    (UnitType::Tank, 1),
    (UnitType::Fighter, 1),
    (UnitType::Bomber, 2),
];
const CONQUERED_INLAND: Weights = &[
    (UnitType::Tank, 5),
    (UnitType::Fighter, 1),
    (UnitType::Bomber, 1),
];
const CONTESTED_COASTAL_SATURATED: Weights = &[
    (UnitType::Tank, 1),
    (UnitType::Fighter, 2),
    (UnitType::Destroyer, 3),
];
const CONTESTED_COASTAL: Weights = &[
    (UnitType::Tank, 3),
    (UnitType::Fighter, 3),
    (UnitType::Destroyer, 3),
];
const CONTESTED_INLAND: Weights = &[(UnitType::Tank, 7), (UnitType::Fighter, 3)];

/// Selects the weight table for a city's situation.
pub fn production_weights(conquered: bool, coastal: bool, tanks: usize) -> &'static [(UnitType, u32)] {
    let saturated = tanks >= TANK_SATURATION;
    match (conquered, coastal) {
        (true, true) => CONQUERED_COASTAL,
        (true, false) if saturated => CONQUERED_INLAND_SATURATED,
        (true, false) => CONQUERED_INLAND,
        (false, true) if saturated => CONTESTED_COASTAL_SATURATED,
        (false, true) => CONTESTED_COASTAL,
        (false, false) => CONTESTED_INLAND,
    }
}

/// Draws `k` uniformly from `1..=total` and returns the first entry whose
/// cumulative weight reaches `k`.
pub fn weighted_choice(weights: &[(UnitType, u32)], rng: &mut impl Rng) -> UnitType {
    let total: u32 = weights.iter().map(|&(_, w)| w).sum();
    if total == 0 {
        return UnitType::Tank;
    }
    let k = rng.gen_range(1..=total);
    let mut acc = 0;
    for &(unit_type, w) in weights {
        acc += w;
        if k <= acc {
            return unit_type;
        }
    }
    UnitType::Tank
}

/// Chooses what the city at `position` should build next for `player`.
pub fn choose_production(board: &Board, position: Coord, player: Player, rng: &mut impl Rng) -> UnitType {
    let island = island_of(&board.grid, position);
    let conquered = is_conquered(board, &island, player);
    let coastal = board
        .city_at(position)
        .map_or_else(|| board.grid.is_next_to_sea(position), |c| c.is_coastal);
    let tanks = unit_count(board, UnitType::Tank, &island, player);
    let choice = weighted_choice(production_weights(conquered, coastal, tanks), rng);
    tracing::debug!(%position, %player, conquered, coastal, tanks, unit = %choice, "production chosen");
    choice
}
