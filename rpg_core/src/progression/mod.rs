//! Experience accrual and the level-up loop

use crate::config::ProgressionConfig;
use crate::player::Player;
use serde::{Deserialize, Serialize};

/// One level gained, with the stat growth that came with it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelUp {
    /// The level that was reached
    pub level: u32,
    pub max_health: i32,
    pub strength: i32,
    pub agility: i32,
    /// Health actually restored by the level-up heal (capped at max)
    pub healed: i32,
}

/// XP required to advance past `level`
pub fn xp_to_next_level(level: u32, config: &ProgressionConfig) -> u32 {
    (config.base_xp as f64 * config.scalar.powi(level.saturating_sub(1) as i32)) as u32
}

/// Grant experience and resolve every level-up it pays for.
///
/// This loops: a single large grant can cross several thresholds, and each
/// iteration re-derives the threshold from the new level. Each level adds
/// +10 max health, +2 strength, +1 agility and heals a quarter of the new
/// maximum.
pub fn add_experience(
    player: &mut Player,
    amount: u32,
    config: &ProgressionConfig,
) -> Vec<LevelUp> {
    player.experience += amount;

    let mut level_ups = Vec::new();
    while player.experience >= xp_to_next_level(player.level, config) {
        let threshold = xp_to_next_level(player.level, config);
        player.experience -= threshold;
        player.level += 1;
        player.max_health += 10;
        player.strength += 2;
        player.agility += 1;
        let before = player.health;
        player.heal(player.max_health / 4);
        level_ups.push(LevelUp {
            level: player.level,
            max_health: player.max_health,
            strength: player.strength,
            agility: player.agility,
            healed: player.health - before,
        });
    }
    level_ups
}
