//! Move dispatch: reveal, classify, then move or fight.

use rand::Rng;

use super::combat::{attack_outcome, resolve_city_attack, resolve_unit_attack, CombatResult};
use crate::board::{Board, Coord, Unit, UnitId};

/// How a unit's step into a cell is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Move,
    UnitAttack,
    CityAttack,
    Illegal,
}

/// Result of dispatching one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Moved { to: Coord },
    Combat(CombatResult),
    Illegal,
}

/// Classifies a step by `unit` into `dest`. Rules apply in order: an enemy
/// unit there is attacked; a city not held by the mover is attacked by
/// anything that can move on land; otherwise the step is a plain move if the
/// unit flies, if it is a capturing unit stepping onto land, or if it can
/// sail and `dest` is sea.
pub fn classify(board: &Board, unit: &Unit, dest: Coord) -> Action {
    let Some(cell) = board.grid.get(dest) else {
        return Action::Illegal;
    };
    if board.enemy_unit_at(dest, unit.owner).is_some() {
        return Action::UnitAttack;
    }
    let foreign_city = board.city_at(dest).is_some_and(|c| !c.is_owned_by(unit.owner));
    if foreign_city && unit.can_move_on_land() {
        return Action::CityAttack;
    }
    if unit.can_fly()
        || (cell.is_land && unit.can_capture_city())
        || (!cell.is_land && unit.can_move_on_water())
    {
        return Action::Move;
    }
    Action::Illegal
}

/// Reveals fog around `dest`, then classifies and performs the step.
/// Returns `None` if `unit` is not on the board.
pub fn attempt_move(
    board: &mut Board,
    unit: UnitId,
    dest: Coord,
    rng: &mut impl Rng,
) -> Option<ActionOutcome> {
    let mover = board.unit(unit)?.clone();
    board.grid.reveal_around(dest, 1);

    let outcome = match classify(board, &mover, dest) {
        Action::Move => {
            board.unit_mut(unit)?.move_to(dest);
            tracing::debug!(unit = unit.0, kind = %mover.unit_type, from = %mover.position, to = %dest, "move");
            ActionOutcome::Moved { to: dest }
        }
        Action::UnitAttack => {
            let defender = board.enemy_unit_at(dest, mover.owner)?.id;
            let flip = attack_outcome(rng);
            tracing::debug!(unit = unit.0, defender = defender.0, flip, "unit attack");
            ActionOutcome::Combat(resolve_unit_attack(board, unit, defender, flip)?)
        }
        Action::CityAttack => {
            let flip = attack_outcome(rng);
            tracing::debug!(unit = unit.0, city = %dest, flip, "city attack");
            ActionOutcome::Combat(resolve_city_attack(board, unit, dest, flip, rng)?)
        }
        Action::Illegal => {
            tracing::debug!(unit = unit.0, kind = %mover.unit_type, to = %dest, "illegal move");
            ActionOutcome::Illegal
        }
    };
    Some(outcome)
}
