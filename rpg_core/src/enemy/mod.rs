//! Enemy aggregate, behavior policy and generation

mod generator;
mod tables;
mod templates;

pub use generator::EnemyGenerator;
pub use tables::{base_stats, base_xp, gold_range, loot_weights, name_pool, Tier, TierStats};
pub use templates::{
    load_item_templates, EnemyTemplate, ItemTemplate, LoadReport, TemplateError, TemplateRegistry,
};

use crate::item::{Item, HEALTH_POTION};
use crate::types::{Stat, StatAccess};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What an enemy chooses to do on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyAction {
    Attack,
    Defend,
    Heal,
}

/// A combat opponent.
///
/// Created by the generator, mutated over a single combat and discarded
/// when it ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub attack_power: i32,
    pub armor: i32,
    pub tier: Tier,
    /// Items the enemy may consume mid-fight (potions)
    #[serde(default)]
    pub inventory: Vec<Item>,
    pub xp_reward: u32,
    pub gold_reward: u32,
    /// Items granted to the player on defeat
    #[serde(default)]
    pub loot: Vec<Item>,
}

impl Enemy {
    pub fn new(name: impl Into<String>, health: i32, attack_power: i32, armor: i32, tier: Tier) -> Self {
        Enemy {
            name: name.into(),
            health,
            max_health: health,
            attack_power,
            armor,
            tier,
            inventory: Vec::new(),
            xp_reward: 0,
            gold_reward: 0,
            loot: Vec::new(),
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

    pub fn has_potion(&self) -> bool {
        self.inventory.iter().any(|item| item.name == HEALTH_POTION)
    }

    /// Pick the next action from current health and carried items.
    ///
    /// Below 30% health the enemy tries to heal (75% if it has a potion)
    /// or hunker down (60%); between 30% and 60% it defends about a third
    /// of the time; above that it always attacks.
    pub fn decide_action_with_rng(&self, rng: &mut impl Rng) -> EnemyAction {
        let hp_pct = if self.max_health > 0 {
            self.health as f64 / self.max_health as f64
        } else {
            0.0
        };

        if hp_pct < 0.30 {
            if self.has_potion() && rng.gen::<f64>() < 0.75 {
                return EnemyAction::Heal;
            }
            if rng.gen::<f64>() < 0.6 {
                return EnemyAction::Defend;
            }
            return EnemyAction::Attack;
        }

        if hp_pct < 0.6 {
            if rng.gen::<f64>() < 0.35 {
                return EnemyAction::Defend;
            }
            return EnemyAction::Attack;
        }

        EnemyAction::Attack
    }

    /// `decide_action_with_rng` with the thread-local RNG
    pub fn decide_action(&self) -> EnemyAction {
        self.decide_action_with_rng(&mut rand::thread_rng())
    }
}

impl StatAccess for Enemy {
    fn has_stat(&self, stat: Stat) -> bool {
        matches!(stat, Stat::Health | Stat::AttackPower | Stat::Armor)
    }

    fn stat(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Health => self.health,
            Stat::AttackPower => self.attack_power,
            Stat::Armor => self.armor,
            _ => 0,
        }
    }

    fn set_stat(&mut self, stat: Stat, value: i32) {
        match stat {
            Stat::Health => self.health = value.clamp(0, self.max_health),
            Stat::AttackPower => self.attack_power = value,
            Stat::Armor => self.armor = value,
            _ => {}
        }
    }

    fn stat_cap(&self, stat: Stat) -> Option<i32> {
        match stat {
            Stat::Health => Some(self.max_health),
            _ => None,
        }
    }
}
