//! ItemCatalog - Immutable registry of item definitions

use super::{Item, ItemKind, HEALTH_POTION};
use crate::types::{Rarity, Stat};
use std::collections::BTreeMap;

/// Registry of item definitions addressable by name.
///
/// Seeded with the built-in item set; plugin-supplied item templates are
/// registered on top. Lookups hand out references to the shared definition,
/// so every "Iron Sword" in play is the same item.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    items: BTreeMap<String, Item>,
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ItemCatalog {
    /// Catalog containing only the built-in item set
    pub fn builtin() -> Self {
        let mut catalog = ItemCatalog {
            items: BTreeMap::new(),
        };
        for item in builtin_items() {
            catalog.register(item);
        }
        catalog
    }

    /// Empty catalog, for tests and fully plugin-driven setups
    pub fn empty() -> Self {
        ItemCatalog {
            items: BTreeMap::new(),
        }
    }

    /// Look up an item definition by name
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Register a definition, replacing any existing item of the same name
    pub fn register(&mut self, item: Item) {
        self.items.insert(item.name.clone(), item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all registered definitions in name order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }
}

fn builtin_items() -> Vec<Item> {
    vec![
        // Potions and elixirs
        Item::new(HEALTH_POTION, ItemKind::Consumable, [(Stat::Health, 40)], 10),
        Item::new("Mana Potion", ItemKind::Consumable, [(Stat::Mana, 10)], 8),
        Item::new(
            "Strength Elixir",
            ItemKind::Consumable,
            [(Stat::Strength, 5)],
            15,
        ),
        Item::new(
            "Agility Elixir",
            ItemKind::Consumable,
            [(Stat::Agility, 5)],
            15,
        ),
        Item::new(
            "Intelligence Elixir",
            ItemKind::Consumable,
            [(Stat::Intelligence, 5)],
            15,
        ),
        // Weapons
        Item::new(
            "Iron Sword",
            ItemKind::Equipment,
            [(Stat::AttackPower, 10)],
            50,
        ),
        Item::new(
            "Steel Axe",
            ItemKind::Equipment,
            [(Stat::AttackPower, 15)],
            75,
        )
        .with_rarity(Rarity::Uncommon),
        Item::new(
            "Magic Staff",
            ItemKind::Equipment,
            [(Stat::AttackPower, 12), (Stat::Intelligence, 3)],
            100,
        )
        .with_rarity(Rarity::Rare),
        // Armor
        Item::new("Leather Armor", ItemKind::Equipment, [(Stat::Armor, 5)], 40),
        Item::new(
            "Chainmail Armor",
            ItemKind::Equipment,
            [(Stat::Armor, 10)],
            80,
        )
        .with_rarity(Rarity::Uncommon),
        Item::new("Plate Armor", ItemKind::Equipment, [(Stat::Armor, 15)], 120)
            .with_rarity(Rarity::Rare),
        // Jewelry
        Item::new("Silver Ring", ItemKind::Equipment, [(Stat::Mana, 10)], 30)
            .with_rarity(Rarity::Uncommon),
        Item::new(
            "Gold Necklace",
            ItemKind::Equipment,
            [(Stat::Health, 20)],
            60,
        )
        .with_rarity(Rarity::Rare),
    ]
}
