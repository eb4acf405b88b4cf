//! Prelude module for convenient imports
//!
//! ```rust
//! use rpg_core::prelude::*;
//! ```

// Core aggregates
pub use crate::enemy::{Enemy, EnemyAction, EnemyGenerator, Tier};
pub use crate::player::{Player, PlayerSnapshot};

// Combat
pub use crate::combat::{
    CombatError, CombatEvent, CombatOutcome, CombatSession, CombatSummary, PlayerAction,
    TurnResult,
};

// Items and equipment
pub use crate::equipment::{add_loot, equip, score, sell, slot_for, unequip, LootEvent};
pub use crate::item::{Item, ItemCatalog, ItemKind};

// Progression
pub use crate::progression::{add_experience, xp_to_next_level, LevelUp};

// Config
pub use crate::config::{GameConfig, ProgressionConfig};

// Shared types
pub use crate::types::{EquipmentSlot, Rarity, Stat, StatAccess};
