//! AI move selection.
//!
//! For each activation the selector proposes exactly one destination for a
//! unit, walking a fixed list of objectives and taking the first that yields
//! a candidate:
//!
//! 1. explore fog
//! 2. attack an enemy unit
//! 3. attack an adjacent enemy city
//! 4. capture an adjacent unoccupied city (capturing units only)
//! 5. tanks on a conquered island head for a coastal city
//! 6. wander to a random neighbour the unit can enter
//!
//! Aircraft and ships look only at their eight neighbours. Land-bound units
//! reason over their whole island and step along a shortest path.

pub mod production;

use rand::Rng;

use crate::analysis::{
    coastal_city_on, enemy_unit_on, find_path, fog_on, is_conquered, island_of, next_step, Island,
};
use crate::board::{Board, Coord, Unit, UnitType};

pub use production::{choose_production, production_weights, weighted_choice, TANK_SATURATION};

/// Why a destination was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Objective {
    Explore,
    EnemyUnit,
    EnemyCity,
    NeutralCity,
    Staging,
    Wander,
}

/// A destination proposed for one activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChoice {
    pub dest: Coord,
    pub objective: Objective,
}

/// Island facts for a land-bound unit, computed once per activation.
struct IslandView {
    island: Island,
    conquered: bool,
}

/// Proposes a destination for `unit`, or `None` if it has nowhere to go.
pub fn choose_move(board: &Board, unit: &Unit, rng: &mut impl Rng) -> Option<MoveChoice> {
    let view = unit.unit_type.is_land_bound().then(|| {
        let island = island_of(&board.grid, unit.position);
        let conquered = is_conquered(board, &island, unit.owner);
        IslandView { island, conquered }
    });

    let pick = |dest: Option<Coord>, objective| dest.map(|dest| MoveChoice { dest, objective });

    pick(explore_target(board, unit, view.as_ref()), Objective::Explore)
        .or_else(|| pick(enemy_unit_target(board, unit, view.as_ref()), Objective::EnemyUnit))
        .or_else(|| pick(enemy_city_target(board, unit), Objective::EnemyCity))
        .or_else(|| pick(neutral_city_target(board, unit), Objective::NeutralCity))
        .or_else(|| pick(staging_target(board, unit, view.as_ref()), Objective::Staging))
        .or_else(|| pick(wander_target(board, unit, rng), Objective::Wander))
}

/// First step of a shortest path from the unit toward `target`.
fn step_toward(board: &Board, unit: &Unit, target: Coord) -> Option<Coord> {
    let path = find_path(&board.grid, unit.position, target, unit.unit_type)?;
    next_step(&path)
}

fn explore_target(board: &Board, unit: &Unit, view: Option<&IslandView>) -> Option<Coord> {
    match view {
        None => board.grid.neighbors(unit.position).find(|&c| board.grid[c].is_fog),
        Some(v) if !v.conquered => {
            let fog = fog_on(&board.grid, &v.island)?;
            step_toward(board, unit, fog)
        }
        Some(_) => None,
    }
}

fn enemy_unit_target(board: &Board, unit: &Unit, view: Option<&IslandView>) -> Option<Coord> {
    match view {
        None => board
            .grid
            .neighbors(unit.position)
            .find(|&c| board.enemy_unit_at(c, unit.owner).is_some()),
        Some(v) if !v.conquered => {
            let enemy = enemy_unit_on(board, &v.island, unit.owner)?;
            step_toward(board, unit, enemy)
        }
        Some(_) => None,
    }
}

fn enemy_city_target(board: &Board, unit: &Unit) -> Option<Coord> {
    board
        .grid
        .neighbors(unit.position)
        .find(|&c| board.city_at(c).is_some_and(|city| city.is_enemy_of(unit.owner)))
}

fn neutral_city_target(board: &Board, unit: &Unit) -> Option<Coord> {
    if !unit.can_capture_city() {
        return None;
    }
    board
        .grid
        .neighbors(unit.position)
        .find(|&c| board.city_at(c).is_some_and(|city| city.owner.is_none()))
}

fn staging_target(board: &Board, unit: &Unit, view: Option<&IslandView>) -> Option<Coord> {
    if unit.unit_type != UnitType::Tank {
        return None;
    }
    let v = view.filter(|v| v.conquered)?;
    let staging = coastal_city_on(board, &v.island)?;
    step_toward(board, unit, staging)
}

fn wander_target(board: &Board, unit: &Unit, rng: &mut impl Rng) -> Option<Coord> {
    let options: Vec<Coord> = board
        .grid
        .neighbors(unit.position)
        .filter(|&c| unit.unit_type.can_enter(&board.grid[c]))
        .collect();
    if options.is_empty() {
        return None;
    }
    Some(options[rng.gen_range(0..options.len())])
}
