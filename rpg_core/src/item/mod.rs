//! Item definitions and effect application

mod catalog;

pub use catalog::ItemCatalog;

use crate::types::{Rarity, Stat, StatAccess};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Inventory item name the engine treats as a healing consumable
pub const HEALTH_POTION: &str = "Health Potion";

/// Broad item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Consumable,
    Equipment,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ItemKind::Consumable => "consumable",
            ItemKind::Equipment => "equipment",
        };
        write!(f, "{}", name)
    }
}

/// An immutable item definition.
///
/// Items are interned by name: two items with the same name are the same
/// item, and applying one never mutates the definition itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    /// Signed stat deltas applied when the item is used or equipped
    pub effect: BTreeMap<Stat, i32>,
    /// Base gold value (sell price derives from this)
    pub value: u32,
    #[serde(default)]
    pub rarity: Rarity,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        kind: ItemKind,
        effect: impl IntoIterator<Item = (Stat, i32)>,
        value: u32,
    ) -> Self {
        Item {
            name: name.into(),
            kind,
            effect: effect.into_iter().collect(),
            value,
            rarity: Rarity::Common,
        }
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Signed delta this item contributes to `stat` (0 if none)
    pub fn effect_on(&self, stat: Stat) -> i32 {
        self.effect.get(&stat).copied().unwrap_or(0)
    }

    /// Apply the effect map to a target through its typed stat interface.
    ///
    /// Stats the target does not track are skipped. Gauge stats (health,
    /// mana) are capped at the target's maximum and never overflow.
    pub fn apply(&self, target: &mut impl StatAccess) {
        for (&stat, &delta) in &self.effect {
            if !target.has_stat(stat) {
                continue;
            }
            let current = target.stat(stat);
            let delta = match target.stat_cap(stat) {
                Some(cap) if current + delta > cap => cap - current,
                _ => delta,
            };
            target.set_stat(stat, current + delta);
        }
    }

    /// Human-readable multi-line description
    pub fn description(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Name: {}", self.name);
        let _ = writeln!(out, "Type: {}", self.kind);
        let _ = writeln!(out, "Rarity: {}", self.rarity);
        if !self.effect.is_empty() {
            let effects: Vec<String> = self
                .effect
                .iter()
                .map(|(stat, delta)| format!("{} {:+}", stat, delta))
                .collect();
            let _ = writeln!(out, "Effects: {}", effects.join(", "));
        }
        let _ = write!(out, "Value: {}", self.value);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;

    #[test]
    fn heal_is_capped_at_max_health() {
        let mut player = Player::default();
        player.health = 80;
        player.max_health = 100;
        let potion = Item::new(HEALTH_POTION, ItemKind::Consumable, [(Stat::Health, 40)], 10);

        potion.apply(&mut player);

        assert_eq!(player.health, 100);
    }

    #[test]
    fn elixir_raises_uncapped_stat() {
        let mut player = Player::default();
        let elixir = Item::new(
            "Strength Elixir",
            ItemKind::Consumable,
            [(Stat::Strength, 5)],
            15,
        );

        let before = player.strength;
        elixir.apply(&mut player);

        assert_eq!(player.strength, before + 5);
    }

    #[test]
    fn untracked_stats_are_skipped() {
        use crate::enemy::{Enemy, Tier};
        // enemies have no mana pool, so a mana potion does nothing to them
        let mut enemy = Enemy::new("Goblin", 50, 5, 2, Tier::Tier1);
        let potion = Item::new("Mana Potion", ItemKind::Consumable, [(Stat::Mana, 10)], 8);

        potion.apply(&mut enemy);

        assert_eq!(enemy.health, 50);
    }

    #[test]
    fn description_contains_expected_fields() {
        let potion = Item::new(HEALTH_POTION, ItemKind::Consumable, [(Stat::Health, 40)], 10);
        let d = potion.description();
        assert!(d.contains("Name: Health Potion"));
        assert!(d.contains("Type: consumable"));
        assert!(d.contains("Rarity: common"));

        let sword = Item::new(
            "Iron Sword",
            ItemKind::Equipment,
            [(Stat::AttackPower, 10)],
            50,
        );
        let d2 = sword.description();
        assert!(d2.contains("Name: Iron Sword"));
        assert!(d2.contains("Type: equipment"));
        assert!(d2.contains("attack_power"));
    }

    #[test]
    fn effect_map_survives_json_round_trip() {
        let staff = Item::new(
            "Magic Staff",
            ItemKind::Equipment,
            [(Stat::AttackPower, 12), (Stat::Intelligence, 3)],
            100,
        )
        .with_rarity(Rarity::Rare);

        let json = serde_json::to_string(&staff).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();

        assert_eq!(back, staff);
        assert_eq!(back.effect_on(Stat::AttackPower), 12);
    }
}
