//! Read-only board analysis used by the AI: island connectivity and
//! shortest paths.

pub mod island;
pub mod path;

pub use island::{
    coastal_city_on, enemy_unit_on, fog_on, is_conquered, island_of, unit_count, Island,
};
pub use path::{find_path, next_step};
