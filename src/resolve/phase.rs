//! Day sequencing and the win condition.

use crate::board::{Board, Player, UnitId};

/// Starts a new day: every unit gets its full movement allowance, every city
/// ticks production, and each city that finishes a unit spawns it in place
/// with the fog around it lifted. Returns the ids of the spawned units.
pub fn next_day(board: &mut Board) -> Vec<UnitId> {
    board.day += 1;

    for unit in &mut board.units {
        unit.moves_left = unit.unit_type.moves_per_day();
    }

    let mut ready = Vec::new();
    for city in &mut board.cities {
        if let Some(unit_type) = city.tick_production() {
            if let Some(owner) = city.owner {
                ready.push((unit_type, owner, city.position));
            }
        }
    }

    let mut spawned = Vec::with_capacity(ready.len());
    for (unit_type, owner, position) in ready {
        let id = board.spawn_unit(unit_type, owner, position);
        board.grid.reveal_around(position, 1);
        tracing::debug!(day = board.day, unit = id.0, kind = %unit_type, %owner, %position, "unit produced");
        spawned.push(id);
    }
    spawned
}

/// A player has won once they own every city and no other player has a unit
/// left on the board.
pub fn has_player_won(board: &Board, player: Player) -> bool {
    board.cities.iter().all(|c| c.is_owned_by(player))
        && board.units.iter().all(|u| u.owner == player)
}
