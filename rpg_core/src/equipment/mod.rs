//! Equipment management - slot assignment, scoring and auto-equip

use crate::item::{Item, ItemKind};
use crate::player::Player;
use crate::types::{EquipmentSlot, Stat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Equipment operation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EquipmentError {
    #[error("item is not equipment")]
    NotEquipment,
    #[error("no inventory space to relocate the displaced item")]
    InsufficientCapacity,
    #[error("item not found in inventory")]
    ItemNotFound,
    #[error("no item equipped in slot {0}")]
    EmptySlot(EquipmentSlot),
}

/// Loot intake outcome, one entry per processed item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LootEvent {
    /// Item was added to the inventory
    Acquired { name: String },
    /// Item replaced the current gear in its slot
    AutoEquipped {
        name: String,
        slot: EquipmentSlot,
        replaced: Option<String>,
    },
    /// Inventory was full; the item was discarded
    NoSpace { name: String },
}

/// The slot an item occupies, derived from its effect map.
///
/// Anything granting attack power is a weapon, anything granting armor is
/// armor, everything else is an accessory.
pub fn slot_for(item: &Item) -> EquipmentSlot {
    if item.effect.contains_key(&Stat::AttackPower) {
        EquipmentSlot::Weapon
    } else if item.effect.contains_key(&Stat::Armor) {
        EquipmentSlot::Armor
    } else {
        EquipmentSlot::Accessory
    }
}

/// Heuristic comparison score for equipment.
///
/// Attack power and armor are weighted above other effects, and rarity adds
/// a small tie-breaking bonus.
pub fn score(item: &Item) -> f64 {
    let mut score = 0.0;
    score += item.effect_on(Stat::AttackPower) as f64 * 2.0;
    score += item.effect_on(Stat::Armor) as f64 * 1.5;
    for (&stat, &value) in &item.effect {
        if !matches!(stat, Stat::AttackPower | Stat::Armor) {
            score += value as f64;
        }
    }
    score + item.rarity.score_weight() * 0.5
}

/// Whether `item` is strictly better than `current` (an empty slot always
/// loses)
pub fn is_better(item: &Item, current: Option<&Item>) -> bool {
    match current {
        None => true,
        Some(current) => score(item) > score(current),
    }
}

/// Equip an equipment item into its derived slot.
///
/// Any item already in the slot is moved to the inventory; if the inventory
/// has no room for it the whole operation fails with no state change.
/// The new item is removed from the inventory if it was carried there.
/// Returns the slot on success.
pub fn equip(player: &mut Player, item: &Item) -> Result<EquipmentSlot, EquipmentError> {
    if item.kind != ItemKind::Equipment {
        return Err(EquipmentError::NotEquipment);
    }

    let slot = slot_for(item);

    if let Some(current) = player.equipment.get(&slot).cloned() {
        if !player.has_capacity() {
            return Err(EquipmentError::InsufficientCapacity);
        }
        remove_bonuses(player, &current);
        player.inventory.push(current);
    }

    if let Some(index) = player.find_in_inventory(&item.name) {
        player.inventory.remove(index);
    }

    apply_bonuses(player, item);
    player.equipment.insert(slot, item.clone());
    Ok(slot)
}

/// Remove the item in `slot` and return it to the inventory.
///
/// Fails without touching bonuses when the inventory is full: equipment
/// cannot be removed unless it has somewhere to go.
pub fn unequip(player: &mut Player, slot: EquipmentSlot) -> Result<(), EquipmentError> {
    let item = player
        .equipment
        .get(&slot)
        .cloned()
        .ok_or(EquipmentError::EmptySlot(slot))?;

    if !player.has_capacity() {
        return Err(EquipmentError::InsufficientCapacity);
    }

    remove_bonuses(player, &item);
    player.equipment.remove(&slot);
    player.inventory.push(item);
    Ok(())
}

/// Sell an item at the default half-value ratio
pub fn sell(player: &mut Player, item: &Item) -> Result<u32, EquipmentError> {
    sell_with_ratio(player, item, 0.5)
}

/// Sell an item from the inventory (or off the body: equipped items are
/// unequipped first, which must succeed). Returns the gold gained.
pub fn sell_with_ratio(
    player: &mut Player,
    item: &Item,
    ratio: f64,
) -> Result<u32, EquipmentError> {
    let equipped_slot = EquipmentSlot::all()
        .iter()
        .copied()
        .find(|&slot| player.equipped(slot).map(|i| i.name.as_str()) == Some(item.name.as_str()));
    if let Some(slot) = equipped_slot {
        unequip(player, slot)?;
    }

    let index = player
        .find_in_inventory(&item.name)
        .ok_or(EquipmentError::ItemNotFound)?;
    player.inventory.remove(index);

    let gold = (item.value as f64 * ratio) as u32;
    player.gold += gold;
    Ok(gold)
}

/// Take in a batch of loot, item by item.
///
/// Each item that fits is added to the inventory; equipment that scores
/// strictly higher than the current gear in its slot is auto-equipped on the
/// spot (best effort). Earlier auto-equips change the comparison baseline
/// for later items headed to the same slot.
pub fn add_loot(player: &mut Player, items: &[Item]) -> Vec<LootEvent> {
    let mut events = Vec::new();
    for item in items {
        if !player.has_capacity() {
            events.push(LootEvent::NoSpace {
                name: item.name.clone(),
            });
            continue;
        }
        player.inventory.push(item.clone());
        events.push(LootEvent::Acquired {
            name: item.name.clone(),
        });

        if item.kind == ItemKind::Equipment {
            let slot = slot_for(item);
            let replaced = player.equipped(slot).map(|i| i.name.clone());
            if is_better(item, player.equipped(slot)) && equip(player, item).is_ok() {
                events.push(LootEvent::AutoEquipped {
                    name: item.name.clone(),
                    slot,
                    replaced,
                });
            }
        }
    }
    events
}

fn apply_bonuses(player: &mut Player, item: &Item) {
    player.attack_power_bonus += item.effect_on(Stat::AttackPower);
    player.armor_bonus += item.effect_on(Stat::Armor);
}

fn remove_bonuses(player: &mut Player, item: &Item) {
    player.attack_power_bonus = (player.attack_power_bonus - item.effect_on(Stat::AttackPower)).max(0);
    player.armor_bonus = (player.armor_bonus - item.effect_on(Stat::Armor)).max(0);
}
