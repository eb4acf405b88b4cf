//! Core types shared across the engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Equipment slot for worn gear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Accessory,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Weapon,
            EquipmentSlot::Armor,
            EquipmentSlot::Accessory,
        ]
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EquipmentSlot::Weapon => "weapon",
            EquipmentSlot::Armor => "armor",
            EquipmentSlot::Accessory => "accessory",
        };
        write!(f, "{}", name)
    }
}

/// The closed set of stats an item effect can touch
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Health,
    Mana,
    Strength,
    Agility,
    Intelligence,
    AttackPower,
    Armor,
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stat::Health => "health",
            Stat::Mana => "mana",
            Stat::Strength => "strength",
            Stat::Agility => "agility",
            Stat::Intelligence => "intelligence",
            Stat::AttackPower => "attack_power",
            Stat::Armor => "armor",
        };
        write!(f, "{}", name)
    }
}

/// Item quality tag, weighted into equipment scoring
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Scoring weight used for equipment comparison
    pub fn score_weight(&self) -> f64 {
        match self {
            Rarity::Common => 0.0,
            Rarity::Uncommon => 1.0,
            Rarity::Rare => 2.0,
            Rarity::Epic => 3.0,
            Rarity::Legendary => 5.0,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        };
        write!(f, "{}", name)
    }
}

/// Typed get/set access to the finite set of affectable stats.
///
/// Item effects are applied exclusively through this interface, so a target
/// only ever receives deltas for stats it actually tracks.
pub trait StatAccess {
    /// Whether this target tracks `stat` at all
    fn has_stat(&self, stat: Stat) -> bool;

    /// Current value of `stat` (0 if untracked)
    fn stat(&self, stat: Stat) -> i32;

    /// Overwrite `stat`; implementations clamp gauge stats into range
    fn set_stat(&mut self, stat: Stat, value: i32);

    /// Upper bound for gauge stats (health, mana), if the target tracks one
    fn stat_cap(&self, stat: Stat) -> Option<i32>;
}
