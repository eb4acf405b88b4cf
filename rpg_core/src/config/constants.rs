//! Tunable gameplay constants

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level gameplay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Global difficulty setting, 1 (very easy) through 5 (very hard)
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
    #[serde(default)]
    pub progression: ProgressionConfig,
    #[serde(default)]
    pub player: PlayerConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            difficulty: 3,
            progression: ProgressionConfig::default(),
            player: PlayerConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load a config file and validate it
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: GameConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are within their allowed ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=5).contains(&self.difficulty) {
            return Err(ConfigError::ValidationError(format!(
                "difficulty must be 1-5, got {}",
                self.difficulty
            )));
        }
        if self.progression.base_xp == 0 {
            return Err(ConfigError::ValidationError(
                "progression.base_xp must be positive".to_string(),
            ));
        }
        if self.progression.scalar < 1.0 {
            return Err(ConfigError::ValidationError(format!(
                "progression.scalar must be >= 1.0, got {}",
                self.progression.scalar
            )));
        }
        Ok(())
    }
}

/// Experience curve configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// XP required to leave level 1
    #[serde(default = "default_base_xp")]
    pub base_xp: u32,
    /// Exponential scaling factor for per-level XP requirements
    #[serde(default = "default_scalar")]
    pub scalar: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        ProgressionConfig {
            base_xp: 40,
            scalar: 1.2,
        }
    }
}

/// Starting player values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_player_name")]
    pub name: String,
    #[serde(default)]
    pub starting_gold: u32,
    #[serde(default = "default_inventory_capacity")]
    pub inventory_capacity: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            name: "Hero".to_string(),
            starting_gold: 0,
            inventory_capacity: 20,
        }
    }
}

fn default_difficulty() -> u8 {
    3
}
fn default_base_xp() -> u32 {
    40
}
fn default_scalar() -> f64 {
    1.2
}
fn default_player_name() -> String {
    "Hero".to_string()
}
fn default_inventory_capacity() -> usize {
    20
}
