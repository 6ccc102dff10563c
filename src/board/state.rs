//! Complete game state.
//!
//! The board owns the terrain grid and the city and unit registries. Units
//! are kept in creation order; "first unit" queries throughout the engine
//! rely on that order.

use super::city::{City, NEW_CITY_STRENGTH};
use super::coord::Coord;
use super::grid::Grid;
use super::player::{Controller, Player};
use super::unit::{Unit, UnitId, UnitType};

#[derive(Debug, Clone)]
pub struct Board {
    pub grid: Grid,
    pub cities: Vec<City>,
    pub units: Vec<Unit>,
    pub day: u32,
    /// Strength given to cities when placed or when they change hands.
    pub new_city_strength: u32,
    pub controllers: [Controller; 2],
    next_unit_id: u32,
}

impl Board {
    /// Creates an empty board of fogged sea with two AI players.
    pub fn new(rows: usize, columns: usize) -> Self {
        Board {
            grid: Grid::new(rows, columns),
            cities: Vec::new(),
            units: Vec::new(),
            day: 0,
            new_city_strength: NEW_CITY_STRENGTH,
            controllers: [Controller::Ai; 2],
            next_unit_id: 1,
        }
    }

    /// Wraps an existing grid. Cells already flagged `has_city` are not
    /// registered; use `add_city` for cities.
    pub fn from_grid(grid: Grid) -> Self {
        let mut board = Board::new(0, 0);
        board.grid = grid;
        board
    }

    pub fn controller(&self, player: Player) -> Controller {
        self.controllers[player.index()]
    }

    // ---- cities ----

    /// Registers a city at a land cell, marking the cell and computing the
    /// coastal flag. Returns the city's registry index.
    pub fn add_city(&mut self, position: Coord) -> usize {
        let is_coastal = self.grid.is_next_to_sea(position);
        self.grid[position].has_city = true;
        self.cities
            .push(City::new(position, self.new_city_strength, is_coastal));
        self.cities.len() - 1
    }

    pub fn city_index_at(&self, position: Coord) -> Option<usize> {
        if !self.grid.get(position).is_some_and(|c| c.has_city) {
            return None;
        }
        self.cities.iter().position(|c| c.position == position)
    }

    pub fn city_at(&self, position: Coord) -> Option<&City> {
        self.city_index_at(position).map(|i| &self.cities[i])
    }

    pub fn city_at_mut(&mut self, position: Coord) -> Option<&mut City> {
        self.city_index_at(position).map(move |i| &mut self.cities[i])
    }

    /// Hands the city at `position` to `player` without combat.
    /// Returns false if there is no city there.
    pub fn occupy_city(&mut self, position: Coord, player: Player) -> bool {
        let strength = self.new_city_strength;
        match self.city_at_mut(position) {
            Some(city) => {
                city.occupy(player, strength);
                true
            }
            None => false,
        }
    }

    /// Assigns a production target to the city at `position`.
    /// Returns false if there is no city there.
    pub fn set_production(&mut self, position: Coord, unit_type: UnitType) -> bool {
        match self.city_at_mut(position) {
            Some(city) => {
                city.set_production(unit_type);
                true
            }
            None => false,
        }
    }

    pub fn cities_owned_by(&self, player: Player) -> impl Iterator<Item = &City> {
        self.cities.iter().filter(move |c| c.is_owned_by(player))
    }

    // ---- units ----

    /// Creates a unit with a fresh id at the end of the registry.
    pub fn spawn_unit(&mut self, unit_type: UnitType, owner: Player, position: Coord) -> UnitId {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        self.units.push(Unit::new(id, unit_type, owner, position));
        id
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    /// Removes exactly the unit with `id`, preserving registry order.
    pub fn remove_unit(&mut self, id: UnitId) -> Option<Unit> {
        let idx = self.units.iter().position(|u| u.id == id)?;
        Some(self.units.remove(idx))
    }

    /// First unit at `position` not owned by `player`.
    pub fn enemy_unit_at(&self, position: Coord, player: Player) -> Option<&Unit> {
        self.units
            .iter()
            .find(|u| u.position == position && u.owner != player)
    }

    /// First unit of `player`, in registry order, that can still act today.
    pub fn next_active_unit(&self, player: Player) -> Option<UnitId> {
        self.units
            .iter()
            .find(|u| u.owner == player && u.moves_left > 0)
            .map(|u| u.id)
    }

    pub fn units_owned_by(&self, player: Player) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(move |u| u.owner == player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn land_board(rows: usize, columns: usize) -> Board {
        let mut board = Board::new(rows, columns);
        board.grid.for_each_mut(|_, cell| cell.is_land = true);
        board
    }

    #[test]
    fn add_city_marks_cell_and_coast() {
        let mut board = land_board(3, 3);
        board.grid[Coord::new(0, 0)].is_land = false;
        let idx = board.add_city(Coord::new(1, 1));
        assert!(board.grid[Coord::new(1, 1)].has_city);
        assert!(board.cities[idx].is_coastal);
        assert_eq!(board.city_index_at(Coord::new(1, 1)), Some(idx));
        assert!(board.city_at(Coord::new(0, 1)).is_none());
    }

    #[test]
    fn unit_ids_are_unique_and_removal_is_exact() {
        let mut board = land_board(3, 3);
        let pos = Coord::new(1, 1);
        let a = board.spawn_unit(UnitType::Tank, Player::One, pos);
        let b = board.spawn_unit(UnitType::Tank, Player::One, pos);
        let c = board.spawn_unit(UnitType::Tank, Player::One, pos);
        assert_ne!(a, b);

        let removed = board.remove_unit(b).unwrap();
        assert_eq!(removed.id, b);
        let ids: Vec<UnitId> = board.units.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert!(board.remove_unit(b).is_none());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut board = land_board(2, 2);
        let a = board.spawn_unit(UnitType::Tank, Player::One, Coord::new(0, 0));
        board.remove_unit(a);
        let b = board.spawn_unit(UnitType::Tank, Player::One, Coord::new(0, 0));
        assert_ne!(a, b);
    }

    #[test]
    fn enemy_unit_lookup_ignores_own_units() {
        let mut board = land_board(3, 3);
        let pos = Coord::new(2, 2);
        board.spawn_unit(UnitType::Tank, Player::One, pos);
        assert!(board.enemy_unit_at(pos, Player::One).is_none());
        let enemy = board.spawn_unit(UnitType::Tank, Player::Two, pos);
        assert_eq!(board.enemy_unit_at(pos, Player::One).map(|u| u.id), Some(enemy));
    }

    #[test]
    fn next_active_unit_skips_exhausted_and_foreign() {
        let mut board = land_board(3, 3);
        let a = board.spawn_unit(UnitType::Tank, Player::One, Coord::new(0, 0));
        let b = board.spawn_unit(UnitType::Tank, Player::Two, Coord::new(0, 1));
        let c = board.spawn_unit(UnitType::Tank, Player::One, Coord::new(0, 2));
        assert_eq!(board.next_active_unit(Player::One), Some(a));
        board.unit_mut(a).unwrap().moves_left = 0;
        assert_eq!(board.next_active_unit(Player::One), Some(c));
        assert_eq!(board.next_active_unit(Player::Two), Some(b));
    }

    #[test]
    fn occupy_and_set_production() {
        let mut board = land_board(3, 3);
        let pos = Coord::new(1, 1);
        board.add_city(pos);
        assert!(board.occupy_city(pos, Player::Two));
        assert!(board.set_production(pos, UnitType::Fighter));
        let city = board.city_at(pos).unwrap();
        assert_eq!(city.owner, Some(Player::Two));
        assert_eq!(city.days_until_ready, 6);
        assert!(!board.occupy_city(Coord::new(0, 0), Player::One));
        assert_eq!(board.cities_owned_by(Player::Two).count(), 1);
    }
}
