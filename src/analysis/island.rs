//! Island connectivity.
//!
//! An island is a maximal 8-connected set of land cells. It is computed with
//! an iterative breadth-first flood fill, so cells come out in order of
//! increasing king-move distance from the starting cell and the start itself
//! is always first. Every "first match" query below walks that order (or the
//! unit registry order, for units), which keeps AI decisions reproducible.

use std::collections::{HashSet, VecDeque};

use crate::board::{Board, Coord, Grid, Player, UnitType};

/// The land cells of one island, in flood-fill order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Island {
    cells: Vec<Coord>,
    members: HashSet<Coord>,
}

impl Island {
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.members.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }
}

/// Flood-fills the island containing `start`. Empty if `start` is not land.
pub fn island_of(grid: &Grid, start: Coord) -> Island {
    let mut island = Island::default();
    if !grid.is_land(start) {
        return island;
    }

    let mut queue = VecDeque::new();
    island.members.insert(start);
    queue.push_back(start);

    while let Some(cur) = queue.pop_front() {
        island.cells.push(cur);
        for next in grid.neighbors(cur) {
            if grid[next].is_land && island.members.insert(next) {
                queue.push_back(next);
            }
        }
    }

    island
}

/// True when every city on the island belongs to `player`.
/// An island without cities is trivially conquered.
pub fn is_conquered(board: &Board, island: &Island, player: Player) -> bool {
    board
        .cities
        .iter()
        .filter(|c| island.contains(c.position))
        .all(|c| c.is_owned_by(player))
}

/// Position of the first unit, in registry order, standing on the island and
/// not owned by `player`.
pub fn enemy_unit_on(board: &Board, island: &Island, player: Player) -> Option<Coord> {
    board
        .units
        .iter()
        .find(|u| u.owner != player && island.contains(u.position))
        .map(|u| u.position)
}

/// First island cell still under fog.
pub fn fog_on(grid: &Grid, island: &Island) -> Option<Coord> {
    island.iter().find(|&c| grid[c].is_fog)
}

/// First island cell holding a coastal city.
pub fn coastal_city_on(board: &Board, island: &Island) -> Option<Coord> {
    island
        .iter()
        .filter(|&c| board.grid[c].has_city)
        .find(|&c| board.city_at(c).is_some_and(|city| city.is_coastal))
}

/// Number of `player`'s units of `unit_type` on the island.
pub fn unit_count(board: &Board, unit_type: UnitType, island: &Island, player: Player) -> usize {
    board
        .units
        .iter()
        .filter(|u| u.unit_type == unit_type && u.owner == player && island.contains(u.position))
        .count()
}
