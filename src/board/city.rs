//! Cities and their production timer.
//!
//! An unoccupied city is idle. Once occupied and given a production target it
//! counts down one day per tick, reports a finished unit, and starts over on
//! the same target. Only a change of owner clears the target.

use super::coord::Coord;
use super::player::Player;
use super::unit::UnitType;

/// Strength of a freshly placed or freshly captured city.
pub const NEW_CITY_STRENGTH: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub position: Coord,
    pub strength: u32,
    pub owner: Option<Player>,
    pub production: Option<UnitType>,
    pub days_until_ready: u32,
    pub is_coastal: bool,
}

impl City {
    /// Creates an unoccupied, idle city.
    pub fn new(position: Coord, strength: u32, is_coastal: bool) -> Self {
        City {
            position,
            strength,
            owner: None,
            production: None,
            days_until_ready: 0,
            is_coastal,
        }
    }

    /// Hands the city to `player`, restoring its strength and clearing production.
    pub fn occupy(&mut self, player: Player, strength: u32) {
        self.owner = Some(player);
        self.strength = strength;
        self.production = None;
        self.days_until_ready = 0;
    }

    /// Sets the production target and restarts the timer.
    pub fn set_production(&mut self, unit_type: UnitType) {
        self.production = Some(unit_type);
        self.days_until_ready = unit_type.days_to_produce();
    }

    /// Advances production by one day. Returns the unit type when one is ready;
    /// the timer then restarts for the same target.
    pub fn tick_production(&mut self) -> Option<UnitType> {
        self.owner?;
        let unit_type = self.production?;
        if self.days_until_ready > 0 {
            self.days_until_ready -= 1;
        }
        if self.days_until_ready == 0 {
            self.days_until_ready = unit_type.days_to_produce();
            return Some(unit_type);
        }
        None
    }

    pub fn is_owned_by(&self, player: Player) -> bool {
        self.owner == Some(player)
    }

    /// Owned by someone other than `player` (unoccupied cities are not enemies).
    pub fn is_enemy_of(&self, player: Player) -> bool {
        matches!(self.owner, Some(owner) if owner != player)
    }

    /// Applies one point of damage. Returns true when the city falls.
    pub fn take_hit(&mut self) -> bool {
        self.strength = self.strength.saturating_sub(1);
        self.strength == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_city_is_unoccupied_and_idle() {
        let city = City::new(Coord::new(0, 0), NEW_CITY_STRENGTH, false);
        assert_eq!(city.owner, None);
        assert_eq!(city.production, None);
        assert_eq!(city.strength, 2);
    }

    #[test]
    fn unoccupied_city_never_produces() {
        let mut city = City::new(Coord::new(0, 0), NEW_CITY_STRENGTH, false);
        city.set_production(UnitType::Tank);
        for _ in 0..10 {
            assert_eq!(city.tick_production(), None);
        }
    }

    #[test]
    fn occupied_city_without_target_is_idle() {
        let mut city = City::new(Coord::new(0, 0), NEW_CITY_STRENGTH, false);
        city.occupy(Player::One, NEW_CITY_STRENGTH);
        assert_eq!(city.tick_production(), None);
        assert_eq!(city.days_until_ready, 0);
    }

    #[test]
    fn tank_ready_on_fourth_tick_then_restarts() {
        let mut city = City::new(Coord::new(0, 0), NEW_CITY_STRENGTH, false);
        city.occupy(Player::One, NEW_CITY_STRENGTH);
        city.set_production(UnitType::Tank);
        assert_eq!(city.days_until_ready, 4);

        for expected_left in [3, 2, 1] {
            assert_eq!(city.tick_production(), None);
            assert_eq!(city.production, Some(UnitType::Tank));
            assert_eq!(city.days_until_ready, expected_left);
        }

        assert_eq!(city.tick_production(), Some(UnitType::Tank));
        assert_eq!(city.production, Some(UnitType::Tank));
        assert_eq!(city.days_until_ready, 4);
    }

    #[test]
    fn occupy_resets_strength_and_production() {
        let mut city = City::new(Coord::new(1, 1), NEW_CITY_STRENGTH, true);
        city.occupy(Player::One, NEW_CITY_STRENGTH);
        city.set_production(UnitType::Fighter);
        city.strength = 1;
        city.occupy(Player::Two, NEW_CITY_STRENGTH);
        assert!(city.is_owned_by(Player::Two));
        assert!(city.is_enemy_of(Player::One));
        assert_eq!(city.strength, NEW_CITY_STRENGTH);
        assert_eq!(city.production, None);
        assert_eq!(city.days_until_ready, 0);
    }

    #[test]
    fn unoccupied_is_not_enemy() {
        let city = City::new(Coord::new(1, 1), NEW_CITY_STRENGTH, true);
        assert!(!city.is_enemy_of(Player::One));
        assert!(!city.is_owned_by(Player::One));
    }
}
