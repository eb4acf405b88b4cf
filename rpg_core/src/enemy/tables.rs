//! Tier tables - base stats, rewards, name pools and loot weights

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse enemy strength bracket
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Tier1,
    Tier2,
    Tier3,
    Tier4,
    Tier5,
}

impl Tier {
    pub fn all() -> &'static [Tier] {
        &[Tier::Tier1, Tier::Tier2, Tier::Tier3, Tier::Tier4, Tier::Tier5]
    }

    /// Tier for a plugin template's numeric tier field (1-5)
    pub fn from_number(n: u8) -> Option<Tier> {
        match n {
            1 => Some(Tier::Tier1),
            2 => Some(Tier::Tier2),
            3 => Some(Tier::Tier3),
            4 => Some(Tier::Tier4),
            5 => Some(Tier::Tier5),
            _ => None,
        }
    }

    /// Bracket a player level into a tier.
    ///
    /// Levels 1-3 fight tier 1, 4-7 tier 2, 8-11 tier 3, 12-15 tier 4,
    /// 16 and up tier 5.
    pub fn from_player_level(level: u32) -> Tier {
        match level {
            0..=3 => Tier::Tier1,
            4..=7 => Tier::Tier2,
            8..=11 => Tier::Tier3,
            12..=15 => Tier::Tier4,
            _ => Tier::Tier5,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Tier1 => "tier1",
            Tier::Tier2 => "tier2",
            Tier::Tier3 => "tier3",
            Tier::Tier4 => "tier4",
            Tier::Tier5 => "tier5",
        };
        write!(f, "{}", name)
    }
}

/// Unscaled base stats for a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierStats {
    pub health: i32,
    pub attack_power: i32,
    pub armor: i32,
}

/// Base combat stats before difficulty scaling
pub fn base_stats(tier: Tier) -> TierStats {
    match tier {
        Tier::Tier1 => TierStats { health: 50, attack_power: 5, armor: 2 },
        Tier::Tier2 => TierStats { health: 150, attack_power: 15, armor: 5 },
        Tier::Tier3 => TierStats { health: 300, attack_power: 30, armor: 10 },
        Tier::Tier4 => TierStats { health: 600, attack_power: 60, armor: 20 },
        Tier::Tier5 => TierStats { health: 1200, attack_power: 120, armor: 40 },
    }
}

/// Base XP reward before difficulty scaling
pub fn base_xp(tier: Tier) -> u32 {
    match tier {
        Tier::Tier1 => 8,
        Tier::Tier2 => 25,
        Tier::Tier3 => 60,
        Tier::Tier4 => 150,
        Tier::Tier5 => 400,
    }
}

/// Unscaled gold reward range, inclusive
pub fn gold_range(tier: Tier) -> (u32, u32) {
    match tier {
        Tier::Tier1 => (5, 15),
        Tier::Tier2 => (20, 50),
        Tier::Tier3 => (50, 120),
        Tier::Tier4 => (150, 400),
        Tier::Tier5 => (500, 1500),
    }
}

/// Built-in enemy names for a tier
pub fn name_pool(tier: Tier) -> &'static [&'static str] {
    match tier {
        Tier::Tier1 => &[
            "Goblin", "Skeleton", "Zombie", "Bandit", "Wolf", "Slime", "Bat", "Spider", "Rat",
            "Kobold",
        ],
        Tier::Tier2 => &[
            "Orc",
            "Troll",
            "Dark Knight",
            "Imp",
            "Ghoul",
            "Mimic",
            "Giant Ant",
            "Cave Bear",
            "Fledgeling Lich",
            "Harpy",
            "Demon",
        ],
        Tier::Tier3 => &[
            "Minotaur",
            "Hydra",
            "Vampire",
            "Wraith",
            "Gorgon",
            "Cyclops",
            "Fire Elemental",
            "Ice Golem",
            "Shadow Beast",
            "Lich",
            "Demon Noble",
        ],
        Tier::Tier4 => &["Dragon", "Demon Prince", "Ancient Lich"],
        Tier::Tier5 => &["Elder Dragon", "Demon King"],
    }
}

/// Loot table for a tier: catalog item names with selection weights.
///
/// Weights are relative; an entry's drop probability is its weight over the
/// table total.
pub fn loot_weights(tier: Tier) -> &'static [(&'static str, u32)] {
    match tier {
        Tier::Tier1 => &[
            ("Health Potion", 60),
            ("Mana Potion", 20),
            ("Leather Armor", 10),
            ("Iron Sword", 5),
            ("Strength Elixir", 5),
        ],
        Tier::Tier2 => &[
            ("Health Potion", 40),
            ("Mana Potion", 20),
            ("Leather Armor", 10),
            ("Iron Sword", 10),
            ("Steel Axe", 7),
            ("Strength Elixir", 6),
            ("Agility Elixir", 5),
            ("Silver Ring", 2),
        ],
        Tier::Tier3 => &[
            ("Health Potion", 25),
            ("Mana Potion", 15),
            ("Leather Armor", 8),
            ("Chainmail Armor", 10),
            ("Iron Sword", 8),
            ("Steel Axe", 10),
            ("Plate Armor", 5),
            ("Strength Elixir", 6),
            ("Agility Elixir", 5),
            ("Intelligence Elixir", 5),
            ("Magic Staff", 4),
            ("Silver Ring", 3),
            ("Gold Necklace", 2),
        ],
        Tier::Tier4 => &[
            ("Health Potion", 15),
            ("Mana Potion", 10),
            ("Chainmail Armor", 10),
            ("Plate Armor", 10),
            ("Iron Sword", 6),
            ("Steel Axe", 8),
            ("Magic Staff", 7),
            ("Strength Elixir", 5),
            ("Agility Elixir", 5),
            ("Intelligence Elixir", 5),
            ("Silver Ring", 4),
            ("Gold Necklace", 4),
        ],
        Tier::Tier5 => &[
            ("Health Potion", 10),
            ("Mana Potion", 8),
            ("Chainmail Armor", 8),
            ("Plate Armor", 15),
            ("Iron Sword", 5),
            ("Steel Axe", 7),
            ("Magic Staff", 10),
            ("Strength Elixir", 5),
            ("Agility Elixir", 5),
            ("Intelligence Elixir", 5),
            ("Silver Ring", 5),
            ("Gold Necklace", 6),
        ],
    }
}
