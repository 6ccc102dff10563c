//! Game configuration.
//!
//! Every field has a default, so a JSON file only needs to name what it
//! changes:
//!
//! ```json
//! { "rows": 30, "columns": 60, "cities": 12, "players": ["ai", "manual"] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::{Controller, NEW_CITY_STRENGTH};

/// Errors raised while loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Parameters for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    /// Number of ellipses stamped onto the sea.
    pub islands: usize,
    pub cities: usize,
    /// Days simulated before the game is called a draw.
    pub max_days: u32,
    pub new_city_strength: u32,
    /// Random cells sampled in total while placing cities before giving up.
    pub max_placement_attempts: usize,
    /// RNG seed; 0 draws one from entropy.
    pub seed: u64,
    pub players: [Controller; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 25,
            columns: 55,
            islands: 10,
            cities: 10,
            max_days: 300,
            new_city_strength: NEW_CITY_STRENGTH,
            max_placement_attempts: 100_000,
            seed: 0,
            players: [Controller::Ai, Controller::Ai],
        }
    }
}

impl GameConfig {
    /// Rejects configurations no game can be generated from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be non-empty, got {}x{}",
                self.rows, self.columns
            )));
        }
        if self.cities < 2 {
            return Err(ConfigError::Invalid(format!(
                "need at least 2 cities for two players, got {}",
                self.cities
            )));
        }
        if self.new_city_strength == 0 {
            return Err(ConfigError::Invalid("new_city_strength must be positive".into()));
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::Invalid("max_placement_attempts must be positive".into()));
        }
        Ok(())
    }
}

/// Loads and validates a configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<GameConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&data)
}

/// Parses and validates a configuration from a JSON string.
pub fn load_config_from_str(json: &str) -> Result<GameConfig, ConfigError> {
    let config: GameConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_board() {
        let config = GameConfig::default();
        assert_eq!((config.rows, config.columns), (25, 55));
        assert_eq!(config.islands, 10);
        assert_eq!(config.cities, 10);
        assert_eq!(config.new_city_strength, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = load_config_from_str(r#"{"rows": 30, "players": ["ai", "manual"]}"#).unwrap();
        assert_eq!(config.rows, 30);
        assert_eq!(config.columns, 55);
        assert_eq!(config.players, [Controller::Ai, Controller::Manual]);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(load_config_from_str("{}").unwrap(), GameConfig::default());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            load_config_from_str(r#"{"rows": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            load_config_from_str(r#"{"cities": 1}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            load_config_from_str(r#"{"new_city_strength": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(load_config_from_str("{rows:"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            load_config_from_str(r#"{"players": ["robot", "ai"]}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/conquest.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/conquest.json"));
    }

    #[test]
    fn round_trips_through_json() {
        let config = GameConfig {
            seed: 17,
            max_days: 40,
            ..GameConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(load_config_from_str(&json).unwrap(), config);
    }
}
