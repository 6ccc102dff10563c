//! Board representation and game-state types.
//!
//! Contains the terrain grid, coordinates, players, cities, units and the
//! overall board state, plus read-only symbol snapshots.

pub mod city;
pub mod coord;
pub mod grid;
pub mod player;
pub mod snapshot;
pub mod state;
pub mod unit;

pub use city::{City, NEW_CITY_STRENGTH};
pub use coord::{Coord, NEIGHBOR_OFFSETS, PATH_KERNEL};
pub use grid::{Cell, Grid};
pub use player::{Controller, Player, ALL_PLAYERS};
pub use snapshot::{snapshot, snapshot_with_units};
pub use state::Board;
pub use unit::{Unit, UnitId, UnitStats, UnitType, ALL_UNIT_TYPES};
