//! rpg_core - Turn-based combat and character progression engine
//!
//! This library provides:
//! - CombatSession: the combat turn state machine, driven one action at a
//!   time by an external caller
//! - EnemyGenerator: enemies, rewards and loot scaled by tier, difficulty
//!   and player level
//! - equipment: slot assignment, item scoring and auto-equip decisions
//! - progression: experience accrual and the multi-level-up loop
//!
//! The engine performs no I/O and spawns no background work; all
//! randomness flows through a caller-supplied `Rng` so runs can be
//! replayed deterministically.

pub mod combat;
pub mod config;
pub mod enemy;
pub mod equipment;
pub mod item;
pub mod player;
pub mod prelude;
pub mod progression;
pub mod types;

// Re-export core types for convenience
pub use combat::{
    CombatError, CombatEvent, CombatOutcome, CombatSession, CombatSummary, PlayerAction,
    TurnResult,
};
pub use config::{ConfigError, GameConfig};
pub use enemy::{
    Enemy, EnemyAction, EnemyGenerator, EnemyTemplate, ItemTemplate, LoadReport, TemplateError,
    TemplateRegistry, Tier,
};
pub use equipment::{EquipmentError, LootEvent};
pub use item::{Item, ItemCatalog, ItemKind};
pub use player::{Player, PlayerSnapshot};
pub use progression::LevelUp;
pub use types::{EquipmentSlot, Rarity, Stat, StatAccess};
