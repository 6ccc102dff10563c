//! Game driver.
//!
//! Owns the board and the game's single random number generator, and runs
//! days: production first, then each AI player moves every unit until it
//! runs out of moves.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::{snapshot, snapshot_with_units, Board, Player, UnitId, ALL_PLAYERS};
use crate::config::{ConfigError, GameConfig};
use crate::mapgen::{generate_board, MapGenError};
use crate::movegen::choose_move;
use crate::resolve::{self, attempt_move, ActionOutcome, CombatResult};

/// Errors raised while setting up a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    MapGen(#[from] MapGenError),
}

/// Tally of one player's turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TurnSummary {
    /// AI decisions taken, one per unit step.
    pub activations: u32,
    pub moves: u32,
    pub attacks: u32,
    pub captures: u32,
    /// Enemy units destroyed.
    pub kills: u32,
    /// Own units lost attacking.
    pub losses: u32,
    /// Activations that ended a unit's day without a legal step.
    pub idle: u32,
    pub won: bool,
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOutcome {
    /// `None` when the day limit was reached first.
    pub winner: Option<Player>,
    pub days: u32,
}

/// A game in progress.
pub struct Game {
    board: Board,
    rng: SmallRng,
    max_days: u32,
}

impl Game {
    /// Validates `config` and generates a fresh map with home cities seeded.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = if config.seed != 0 {
            SmallRng::seed_from_u64(config.seed)
        } else {
            SmallRng::from_entropy()
        };
        let board = generate_board(config, &mut rng)?;
        Ok(Game::from_board(board, rng, config.max_days))
    }

    /// Wraps a prepared board.
    pub fn from_board(board: Board, rng: SmallRng, max_days: u32) -> Self {
        Game {
            board,
            rng,
            max_days,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn day(&self) -> u32 {
        self.board.day
    }

    pub fn max_days(&self) -> u32 {
        self.max_days
    }

    /// Advances to the next day. Returns the units produced.
    pub fn next_day(&mut self) -> Vec<UnitId> {
        resolve::next_day(&mut self.board)
    }

    pub fn has_player_won(&self, player: Player) -> bool {
        resolve::has_player_won(&self.board, player)
    }

    /// The player who has won, if any.
    pub fn winner(&self) -> Option<Player> {
        ALL_PLAYERS.into_iter().find(|&p| self.has_player_won(p))
    }

    /// Lets the AI act for every unit of `player` until none has moves left
    /// or the player has won.
    pub fn run_player_turn_ai(&mut self, player: Player) -> TurnSummary {
        let mut summary = TurnSummary::default();

        while let Some(id) = self.board.next_active_unit(player) {
            summary.activations += 1;
            if !self.activate(id, &mut summary) {
                // Nothing legal to do: the unit waits for tomorrow.
                if let Some(unit) = self.board.unit_mut(id) {
                    unit.moves_left = 0;
                }
                summary.idle += 1;
            }
            if self.has_player_won(player) {
                summary.won = true;
                tracing::info!(day = self.board.day, %player, "player has won");
                break;
            }
        }

        tracing::debug!(day = self.board.day, %player, ?summary, "turn finished");
        summary
    }

    /// One AI decision for unit `id`. Returns false if the unit made no
    /// progress (no candidate, or an illegal step).
    fn activate(&mut self, id: UnitId, summary: &mut TurnSummary) -> bool {
        let Some(unit) = self.board.unit(id).cloned() else {
            return false;
        };
        let Some(choice) = choose_move(&self.board, &unit, &mut self.rng) else {
            return false;
        };
        tracing::trace!(unit = id.0, objective = ?choice.objective, dest = %choice.dest, "move chosen");
        match attempt_move(&mut self.board, id, choice.dest, &mut self.rng) {
            Some(ActionOutcome::Moved { .. }) => summary.moves += 1,
            Some(ActionOutcome::Combat(result)) => {
                summary.attacks += 1;
                match result {
                    CombatResult::CityCaptured { .. } => summary.captures += 1,
                    CombatResult::DefenderDestroyed { .. } => summary.kills += 1,
                    CombatResult::AttackerDestroyed => summary.losses += 1,
                    _ => {}
                }
            }
            Some(ActionOutcome::Illegal) | None => return false,
        }
        true
    }

    /// Plays one full day: production, then each AI player's turn in order.
    /// Players with a manual controller are skipped. Returns the winner if
    /// the game ended during the day.
    pub fn play_day(&mut self) -> Option<Player> {
        self.next_day();
        for player in ALL_PLAYERS {
            if self.board.controller(player).is_ai() {
                self.run_player_turn_ai(player);
            }
            if self.has_player_won(player) {
                return Some(player);
            }
        }
        None
    }

    /// Plays days until someone wins or the day limit is hit.
    pub fn play(&mut self) -> GameOutcome {
        while self.board.day < self.max_days {
            if let Some(winner) = self.play_day() {
                return GameOutcome {
                    winner: Some(winner),
                    days: self.board.day,
                };
            }
        }
        tracing::info!(days = self.board.day, "day limit reached without a winner");
        GameOutcome {
            winner: None,
            days: self.board.day,
        }
    }

    pub fn snapshot(&self, show_fog: bool) -> Vec<String> {
        snapshot(&self.board, show_fog)
    }

    pub fn snapshot_with_units(&self, show_fog: bool) -> Vec<String> {
        snapshot_with_units(&self.board, show_fog)
    }
}
