//! Action resolution.
//!
//! Turns a chosen destination into board changes (moves and coin-flip
//! combat) and sequences days.

pub mod action;
pub mod combat;
pub mod phase;

pub use action::{attempt_move, classify, Action, ActionOutcome};
pub use combat::{attack_outcome, resolve_city_attack, resolve_unit_attack, CombatResult};
pub use phase::{has_player_won, next_day};
