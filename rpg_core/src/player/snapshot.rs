//! PlayerSnapshot - The persistence contract

use super::Player;
use crate::item::ItemCatalog;
use crate::types::EquipmentSlot;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serializable player state handed to the persistence gateway.
///
/// Items are stored as names only; restoring re-resolves them through the
/// item catalog, which stays the single source of item definitions. Names
/// the catalog no longer knows are dropped on restore.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSnapshot {
    pub name: String,
    pub level: u32,
    pub experience: u32,
    pub health: i32,
    pub max_health: i32,
    pub strength: i32,
    pub agility: i32,
    pub gold: u32,
    pub inventory_capacity: usize,
    pub attack_power_bonus: i32,
    pub armor_bonus: i32,
    pub inventory: Vec<String>,
    pub equipment: HashMap<EquipmentSlot, Option<String>>,
}

impl Player {
    /// Capture the persisted view of this player
    pub fn snapshot(&self) -> PlayerSnapshot {
        let equipment = EquipmentSlot::all()
            .iter()
            .map(|&slot| (slot, self.equipped(slot).map(|item| item.name.clone())))
            .collect();
        PlayerSnapshot {
            name: self.name.clone(),
            level: self.level,
            experience: self.experience,
            health: self.health,
            max_health: self.max_health,
            strength: self.strength,
            agility: self.agility,
            gold: self.gold,
            inventory_capacity: self.inventory_capacity,
            attack_power_bonus: self.attack_power_bonus,
            armor_bonus: self.armor_bonus,
            inventory: self
                .inventory
                .iter()
                .map(|item| item.name.clone())
                .collect(),
            equipment,
        }
    }

    /// Rebuild a player from a snapshot, resolving item names through the
    /// catalog. Unknown names are skipped.
    pub fn from_snapshot(snapshot: &PlayerSnapshot, catalog: &ItemCatalog) -> Self {
        Player {
            name: snapshot.name.clone(),
            level: snapshot.level,
            experience: snapshot.experience,
            health: snapshot.health.min(snapshot.max_health).max(0),
            max_health: snapshot.max_health,
            strength: snapshot.strength,
            agility: snapshot.agility,
            gold: snapshot.gold,
            inventory_capacity: snapshot.inventory_capacity,
            attack_power_bonus: snapshot.attack_power_bonus,
            armor_bonus: snapshot.armor_bonus,
            inventory: snapshot
                .inventory
                .iter()
                .filter_map(|name| catalog.get(name).cloned())
                .collect(),
            equipment: snapshot
                .equipment
                .iter()
                .filter_map(|(&slot, name)| {
                    let name = name.as_deref()?;
                    Some((slot, catalog.get(name)?.clone()))
                })
                .collect(),
            // the contract does not carry mana or intelligence
            ..Player::default()
        }
    }
}
