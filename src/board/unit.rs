//! Unit types, their static stat table, and unit instances.
//!
//! Every capability and starting value of a unit is derived from its
//! `UnitType`; only position, strength, moves and fuel change in play.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::grid::Cell;
use super::player::Player;

/// The kinds of unit a city can manufacture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Tank,
    Fighter,
    Bomber,
    Transport,
    Destroyer,
    Submarine,
    Carrier,
    Battleship,
}

pub const ALL_UNIT_TYPES: [UnitType; 8] = [
    UnitType::Tank,
    UnitType::Fighter,
    UnitType::Bomber,
    UnitType::Transport,
    UnitType::Destroyer,
    UnitType::Submarine,
    UnitType::Carrier,
    UnitType::Battleship,
];

/// Row of the stat table for one unit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitStats {
    pub strength: u32,
    pub moves_per_day: u32,
    pub fuel: u32,
    pub can_move_on_land: bool,
    pub can_move_on_water: bool,
    pub can_fly: bool,
    pub attack_range: u32,
    pub can_capture_city: bool,
    pub days_to_produce: u32,
}

impl UnitType {
    pub const fn stats(self) -> UnitStats {
        match self {
            UnitType::Tank => UnitStats {
                strength: 2,
                moves_per_day: 2,
                fuel: 0,
                can_move_on_land: true,
                can_move_on_water: false,
                can_fly: false,
                attack_range: 1,
                can_capture_city: true,
                days_to_produce: 4,
            },
            UnitType::Fighter => UnitStats {
                strength: 1,
                moves_per_day: 20,
                fuel: 20,
                can_move_on_land: true,
                can_move_on_water: true,
                can_fly: true,
                attack_range: 1,
                can_capture_city: false,
                days_to_produce: 6,
            },
            UnitType::Bomber => UnitStats {
                strength: 1,
                moves_per_day: 10,
                fuel: 30,
                can_move_on_land: true,
                can_move_on_water: true,
                can_fly: true,
                attack_range: 1,
                can_capture_city: false,
                days_to_produce: 25,
            },
            UnitType::Transport => UnitStats::ship(3, 3, 1, 8),
            UnitType::Destroyer => UnitStats::ship(3, 4, 1, 8),
            UnitType::Submarine => UnitStats::ship(3, 3, 1, 8),
            UnitType::Carrier => UnitStats::ship(12, 3, 1, 10),
            UnitType::Battleship => UnitStats::ship(18, 3, 4, 20),
        }
    }

    pub const fn new_unit_strength(self) -> u32 {
        self.stats().strength
    }

    pub const fn moves_per_day(self) -> u32 {
        self.stats().moves_per_day
    }

    pub const fn fuel_per_day(self) -> u32 {
        self.stats().fuel
    }

    pub const fn can_move_on_land(self) -> bool {
        self.stats().can_move_on_land
    }

    pub const fn can_move_on_water(self) -> bool {
        self.stats().can_move_on_water
    }

    pub const fn can_fly(self) -> bool {
        self.stats().can_fly
    }

    pub const fn attack_range(self) -> u32 {
        self.stats().attack_range
    }

    pub const fn can_capture_city(self) -> bool {
        self.stats().can_capture_city
    }

    pub const fn days_to_produce(self) -> u32 {
        self.stats().days_to_produce
    }

    /// Moves only over land: explores and hunts by pathing across its island.
    pub const fn is_land_bound(self) -> bool {
        let s = self.stats();
        s.can_move_on_land && !s.can_move_on_water && !s.can_fly
    }

    /// Whether this unit type may occupy `cell`.
    #[inline]
    pub fn can_enter(self, cell: &Cell) -> bool {
        let s = self.stats();
        s.can_fly || (s.can_move_on_land && cell.is_land) || (s.can_move_on_water && !cell.is_land)
    }

    /// Map symbol used by board snapshots.
    pub const fn symbol(self) -> char {
        match self {
            UnitType::Tank => 'T',
            UnitType::Fighter => 'F',
            UnitType::Bomber => 'B',
            UnitType::Transport => 'R',
            UnitType::Destroyer => 'D',
            UnitType::Submarine => 'S',
            UnitType::Carrier => 'C',
            UnitType::Battleship => 'L',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            UnitType::Tank => "Tank",
            UnitType::Fighter => "Fighter",
            UnitType::Bomber => "Bomber",
            UnitType::Transport => "Transport",
            UnitType::Destroyer => "Destroyer",
            UnitType::Submarine => "Submarine",
            UnitType::Carrier => "Carrier",
            UnitType::Battleship => "Battleship",
        }
    }
}

impl UnitStats {
    const fn ship(strength: u32, moves_per_day: u32, attack_range: u32, days: u32) -> Self {
        UnitStats {
            strength,
            moves_per_day,
            fuel: 0,
            can_move_on_land: false,
            can_move_on_water: true,
            can_fly: false,
            attack_range,
            can_capture_city: false,
            days_to_produce: days,
        }
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Registry key of a unit. Allocated once per unit and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// A unit on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub id: UnitId,
    pub unit_type: UnitType,
    pub owner: Player,
    pub position: Coord,
    pub strength: u32,
    pub moves_left: u32,
    pub fuel: u32,
}

impl Unit {
    /// Creates a fresh unit with full strength, moves and fuel.
    pub fn new(id: UnitId, unit_type: UnitType, owner: Player, position: Coord) -> Self {
        let stats = unit_type.stats();
        Unit {
            id,
            unit_type,
            owner,
            position,
            strength: stats.strength,
            moves_left: stats.moves_per_day,
            fuel: stats.fuel,
        }
    }

    pub const fn can_fly(&self) -> bool {
        self.unit_type.can_fly()
    }

    pub const fn can_move_on_land(&self) -> bool {
        self.unit_type.can_move_on_land()
    }

    pub const fn can_move_on_water(&self) -> bool {
        self.unit_type.can_move_on_water()
    }

    pub const fn can_capture_city(&self) -> bool {
        self.unit_type.can_capture_city()
    }

    pub const fn symbol(&self) -> char {
        self.unit_type.symbol()
    }

    /// Spends one move (and one fuel for aircraft).
    pub fn spend_move(&mut self) {
        self.moves_left = self.moves_left.saturating_sub(1);
        if self.can_fly() {
            self.fuel = self.fuel.saturating_sub(1);
        }
    }

    /// Relocates the unit, spending one move.
    pub fn move_to(&mut self, dest: Coord) {
        self.position = dest;
        self.spend_move();
    }

    /// Applies one point of damage. Returns true if the unit is destroyed.
    pub fn take_hit(&mut self) -> bool {
        self.strength = self.strength.saturating_sub(1);
        self.strength == 0
    }
}
