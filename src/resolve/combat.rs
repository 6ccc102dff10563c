//! Coin-flip attrition combat.
//!
//! Every attack costs the attacker one move (and one fuel for aircraft) and
//! is decided by a single fair flip. A winning flip against a unit only
//! counts when the attacker is at least as strong as the defender; against a
//! city the flip alone decides. The loser of an exchange loses one point of
//! strength and is removed (or the city captured) on reaching zero.

use rand::Rng;

use crate::board::{Board, Coord, Player, UnitId, UnitType};
use crate::movegen::choose_production;

/// What an attack did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatResult {
    /// Defender lost a point and survived.
    DefenderDamaged { defender: UnitId },
    /// Defender lost its last point and was removed.
    DefenderDestroyed { defender: UnitId },
    /// City lost a point and held.
    CityDamaged { city: Coord },
    /// City fell; the attacker was consumed taking it.
    CityCaptured {
        city: Coord,
        by: Player,
        production: Option<UnitType>,
    },
    /// Attacker lost the exchange and survived.
    AttackerDamaged,
    /// Attacker lost its last point and was removed.
    AttackerDestroyed,
}

impl CombatResult {
    pub fn attacker_won(&self) -> bool {
        matches!(
            self,
            CombatResult::DefenderDamaged { .. }
                | CombatResult::DefenderDestroyed { .. }
                | CombatResult::CityDamaged { .. }
                | CombatResult::CityCaptured { .. }
        )
    }
}

/// A fair coin: true means the attacker wins the flip.
pub fn attack_outcome(rng: &mut impl Rng) -> bool {
    rng.gen_bool(0.5)
}

/// Charges the attacker for an attack and returns (owner, strength).
fn charge_attacker(board: &mut Board, attacker: UnitId) -> Option<(Player, u32)> {
    let unit = board.unit_mut(attacker)?;
    unit.spend_move();
    Some((unit.owner, unit.strength))
}

/// Damages the attacker after a lost exchange.
fn attacker_loses(board: &mut Board, attacker: UnitId) -> Option<CombatResult> {
    let unit = board.unit_mut(attacker)?;
    if unit.take_hit() {
        let position = unit.position;
        board.remove_unit(attacker);
        tracing::info!(unit = attacker.0, %position, "attacker destroyed");
        Some(CombatResult::AttackerDestroyed)
    } else {
        Some(CombatResult::AttackerDamaged)
    }
}

/// Resolves one exchange between two units. `flip` is the attack outcome.
/// Returns `None` if either unit is no longer on the board.
pub fn resolve_unit_attack(
    board: &mut Board,
    attacker: UnitId,
    defender: UnitId,
    flip: bool,
) -> Option<CombatResult> {
    let defender_strength = board.unit(defender)?.strength;
    let (_, attacker_strength) = charge_attacker(board, attacker)?;

    if !(flip && attacker_strength >= defender_strength) {
        return attacker_loses(board, attacker);
    }

    let unit = board.unit_mut(defender)?;
    if unit.take_hit() {
        let position = unit.position;
        board.remove_unit(defender);
        tracing::info!(unit = defender.0, %position, "defender destroyed");
        Some(CombatResult::DefenderDestroyed { defender })
    } else {
        Some(CombatResult::DefenderDamaged { defender })
    }
}

/// Resolves one exchange against the city at `city`. On capture the city
/// changes hands, AI-controlled captors pick new production with `rng`, and
/// the attacker is removed. Returns `None` if the attacker or city is gone.
pub fn resolve_city_attack(
    board: &mut Board,
    attacker: UnitId,
    city: Coord,
    flip: bool,
    rng: &mut impl Rng,
) -> Option<CombatResult> {
    board.city_index_at(city)?;
    let (captor, _) = charge_attacker(board, attacker)?;

    if !flip {
        return attacker_loses(board, attacker);
    }

    let fell = board.city_at_mut(city)?.take_hit();
    if !fell {
        return Some(CombatResult::CityDamaged { city });
    }

    board.occupy_city(city, captor);
    // Production is chosen while the attacker still stands on the board.
    let mut production = None;
    if board.controller(captor).is_ai() {
        let unit_type = choose_production(board, city, captor, rng);
        board.set_production(city, unit_type);
        production = Some(unit_type);
    }
    board.remove_unit(attacker);
    tracing::info!(%city, player = %captor, ?production, "city captured");

    Some(CombatResult::CityCaptured {
        city,
        by: captor,
        production,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Controller;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn land_board() -> Board {
        let mut board = Board::new(3, 3);
        board.grid.for_each_mut(|_, c| c.is_land = true);
        board
    }

    #[test]
    fn coin_is_roughly_fair() {
        let mut rng = StdRng::seed_from_u64(9);
        let wins = (0..10_000).filter(|_| attack_outcome(&mut rng)).count();
        assert!((4_700..5_300).contains(&wins), "{wins}");
    }

    #[test]
    fn winning_flip_damages_defender_without_moving_attacker() {
        let mut board = land_board();
        let a = board.spawn_unit(UnitType::Tank, Player::One, Coord::new(0, 0));
        let d = board.spawn_unit(UnitType::Tank, Player::Two, Coord::new(0, 1));

        let result = resolve_unit_attack(&mut board, a, d, true).unwrap();
        assert_eq!(result, CombatResult::DefenderDamaged { defender: d });
        assert_eq!(board.unit(d).unwrap().strength, 1);
        let attacker = board.unit(a).unwrap();
        assert_eq!(attacker.position, Coord::new(0, 0));
        assert_eq!(attacker.moves_left, 1);

        let result = resolve_unit_attack(&mut board, a, d, true).unwrap();
        assert_eq!(result, CombatResult::DefenderDestroyed { defender: d });
        assert!(board.unit(d).is_none());
        assert_eq!(board.unit(a).unwrap().moves_left, 0);
    }

    #[test]
    fn weaker_attacker_cannot_win_even_with_flip() {
        let mut board = land_board();
        let a = board.spawn_unit(UnitType::Fighter, Player::One, Coord::new(0, 0));
        let d = board.spawn_unit(UnitType::Tank, Player::Two, Coord::new(0, 1));

        let result = resolve_unit_attack(&mut board, a, d, true).unwrap();
        assert_eq!(result, CombatResult::AttackerDestroyed);
        assert!(board.unit(a).is_none());
        assert_eq!(board.unit(d).unwrap().strength, 2);
    }

    #[test]
    fn losing_flip_damages_attacker_and_burns_fuel() {
        let mut board = land_board();
        let a = board.spawn_unit(UnitType::Bomber, Player::One, Coord::new(0, 0));
        let d = board.spawn_unit(UnitType::Fighter, Player::Two, Coord::new(0, 1));
        board.unit_mut(a).unwrap().strength = 2;

        let result = resolve_unit_attack(&mut board, a, d, false).unwrap();
        assert_eq!(result, CombatResult::AttackerDamaged);
        let bomber = board.unit(a).unwrap();
        assert_eq!(bomber.strength, 1);
        assert_eq!(bomber.moves_left, 9);
        assert_eq!(bomber.fuel, 29);
    }

    #[test]
    fn city_falls_after_two_wins_and_consumes_attacker() {
        let mut board = land_board();
        let city = Coord::new(1, 1);
        board.add_city(city);
        board.occupy_city(city, Player::Two);
        let a = board.spawn_unit(UnitType::Tank, Player::One, Coord::new(0, 0));
        let mut rng = StdRng::seed_from_u64(1);

        let first = resolve_city_attack(&mut board, a, city, true, &mut rng).unwrap();
        assert_eq!(first, CombatResult::CityDamaged { city });
        assert_eq!(board.city_at(city).unwrap().strength, 1);

        let second = resolve_city_attack(&mut board, a, city, true, &mut rng).unwrap();
        let CombatResult::CityCaptured { by, production, .. } = second else {
            panic!("expected capture, got {second:?}");
        };
        assert_eq!(by, Player::One);
        let captured = board.city_at(city).unwrap();
        assert_eq!(captured.owner, Some(Player::One));
        assert_eq!(captured.strength, 2);
        assert_eq!(captured.production, production);
        let unit_type = production.unwrap();
        assert_eq!(captured.days_until_ready, unit_type.days_to_produce());
        assert!(board.unit(a).is_none());
    }

    #[test]
    fn city_attack_ignores_strength() {
        let mut board = land_board();
        let city = Coord::new(1, 1);
        board.add_city(city);
        board.city_at_mut(city).unwrap().strength = 5;
        let a = board.spawn_unit(UnitType::Fighter, Player::One, Coord::new(0, 0));
        let mut rng = StdRng::seed_from_u64(1);

        let result = resolve_city_attack(&mut board, a, city, true, &mut rng).unwrap();
        assert_eq!(result, CombatResult::CityDamaged { city });
        assert_eq!(board.city_at(city).unwrap().strength, 4);
    }

    #[test]
    fn manual_captor_leaves_city_idle() {
        let mut board = land_board();
        board.controllers = [Controller::Manual, Controller::Ai];
        let city = Coord::new(1, 1);
        board.add_city(city);
        board.city_at_mut(city).unwrap().strength = 1;
        let a = board.spawn_unit(UnitType::Tank, Player::One, Coord::new(0, 0));
        let mut rng = StdRng::seed_from_u64(1);

        let result = resolve_city_attack(&mut board, a, city, true, &mut rng).unwrap();
        assert!(matches!(result, CombatResult::CityCaptured { production: None, .. }));
        assert_eq!(board.city_at(city).unwrap().production, None);
    }

    #[test]
    fn failed_city_attack_hurts_attacker() {
        let mut board = land_board();
        let city = Coord::new(1, 1);
        board.add_city(city);
        let a = board.spawn_unit(UnitType::Tank, Player::One, Coord::new(0, 0));
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            resolve_city_attack(&mut board, a, city, false, &mut rng),
            Some(CombatResult::AttackerDamaged)
        );
        assert_eq!(
            resolve_city_attack(&mut board, a, city, false, &mut rng),
            Some(CombatResult::AttackerDestroyed)
        );
        assert_eq!(board.city_at(city).unwrap().owner, None);
        assert!(board.units.is_empty());
    }

    #[test]
    fn missing_participants_are_no_ops() {
        let mut board = land_board();
        let a = board.spawn_unit(UnitType::Tank, Player::One, Coord::new(0, 0));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(resolve_unit_attack(&mut board, a, UnitId(77), true), None);
        assert_eq!(resolve_city_attack(&mut board, a, Coord::new(2, 2), true, &mut rng), None);
        assert_eq!(board.unit(a).unwrap().moves_left, 2);
    }
}
