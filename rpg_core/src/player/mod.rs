//! Player - The owned character aggregate

mod snapshot;

pub use snapshot::PlayerSnapshot;

use crate::config::PlayerConfig;
use crate::item::Item;
use crate::types::{EquipmentSlot, Stat, StatAccess};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The player character.
///
/// Owned explicitly by the caller and passed by reference into every engine
/// call; there is no process-wide player state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub level: u32,
    pub experience: u32,
    pub health: i32,
    pub max_health: i32,
    pub mana: i32,
    pub max_mana: i32,
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub gold: u32,
    /// Ordered bag of carried items, bounded by `inventory_capacity`
    pub inventory: Vec<Item>,
    pub inventory_capacity: usize,
    /// Worn gear by slot; an absent key means the slot is empty
    #[serde(default)]
    pub equipment: HashMap<EquipmentSlot, Item>,
    /// Aggregate attack power from equipped items, counted exactly once
    pub attack_power_bonus: i32,
    /// Aggregate armor from equipped items, counted exactly once
    pub armor_bonus: i32,
}

impl Default for Player {
    fn default() -> Self {
        Player::new(&PlayerConfig::default())
    }
}

impl Player {
    /// Create a fresh level-1 player from starting values
    pub fn new(config: &PlayerConfig) -> Self {
        Player {
            name: config.name.clone(),
            level: 1,
            experience: 0,
            health: 40,
            max_health: 100,
            mana: 50,
            max_mana: 50,
            strength: 10,
            agility: 10,
            intelligence: 10,
            gold: config.starting_gold,
            inventory: Vec::new(),
            inventory_capacity: config.inventory_capacity,
            equipment: HashMap::new(),
            attack_power_bonus: 0,
            armor_bonus: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Reduce health, flooring at 0
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Restore health, capped at max_health
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// Whether the inventory can hold one more item
    pub fn has_capacity(&self) -> bool {
        self.inventory.len() < self.inventory_capacity
    }

    /// Item currently worn in `slot`
    pub fn equipped(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.equipment.get(&slot)
    }

    /// Index of the first inventory item with this name
    pub fn find_in_inventory(&self, name: &str) -> Option<usize> {
        self.inventory.iter().position(|item| item.name == name)
    }
}

impl StatAccess for Player {
    fn has_stat(&self, stat: Stat) -> bool {
        // attack power and armor exist only as equipment bonuses, not as
        // base stats a consumable could raise
        !matches!(stat, Stat::AttackPower | Stat::Armor)
    }

    fn stat(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Health => self.health,
            Stat::Mana => self.mana,
            Stat::Strength => self.strength,
            Stat::Agility => self.agility,
            Stat::Intelligence => self.intelligence,
            Stat::AttackPower | Stat::Armor => 0,
        }
    }

    fn set_stat(&mut self, stat: Stat, value: i32) {
        match stat {
            Stat::Health => self.health = value.clamp(0, self.max_health),
            Stat::Mana => self.mana = value.clamp(0, self.max_mana),
            Stat::Strength => self.strength = value,
            Stat::Agility => self.agility = value,
            Stat::Intelligence => self.intelligence = value,
            Stat::AttackPower | Stat::Armor => {}
        }
    }

    fn stat_cap(&self, stat: Stat) -> Option<i32> {
        match stat {
            Stat::Health => Some(self.max_health),
            Stat::Mana => Some(self.max_mana),
            _ => None,
        }
    }
}
