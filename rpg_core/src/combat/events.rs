//! Combat events, turn results and end-of-combat summaries

use crate::equipment::LootEvent;
use crate::progression::LevelUp;
use crate::types::Rarity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Combat operation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    #[error("combat session has already ended")]
    SessionEnded,
    #[error("unknown action: {0}")]
    InvalidAction(String),
}

/// What the player can do on their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    Attack,
    Defend,
    UsePotion,
    Flee,
}

impl FromStr for PlayerAction {
    type Err = CombatError;

    /// Parse an external action token; unrecognized tokens surface as
    /// `InvalidAction`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attack" => Ok(PlayerAction::Attack),
            "defend" => Ok(PlayerAction::Defend),
            "potion" | "use_potion" => Ok(PlayerAction::UsePotion),
            "flee" => Ok(PlayerAction::Flee),
            other => Err(CombatError::InvalidAction(other.to_string())),
        }
    }
}

/// Where a combat stands after a turn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatOutcome {
    #[default]
    Ongoing,
    PlayerWon,
    PlayerLost,
    Fled,
}

impl CombatOutcome {
    pub fn is_ended(&self) -> bool {
        *self != CombatOutcome::Ongoing
    }
}

/// One observable thing that happened during a turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum CombatEvent {
    PlayerHit { enemy: String, damage: i32 },
    PlayerDefended,
    PotionUsed { healed: i32 },
    PotionMissing,
    FleeFailed,
    FleeSucceeded,
    EnemyHit { enemy: String, damage: i32 },
    EnemyDefended { enemy: String },
    EnemyHealed { enemy: String, amount: i32, used_potion: bool },
    EnemyDefeated { enemy: String },
    PlayerDefeated,
    ExperienceGained { amount: u32 },
    LeveledUp(LevelUp),
    GoldFound { amount: u32 },
    LootFound { name: String, rarity: Rarity },
    Loot(LootEvent),
}

/// Result of a single submitted player action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    pub events: Vec<CombatEvent>,
    pub outcome: CombatOutcome,
    /// Present exactly when this turn ended the combat
    pub summary: Option<CombatSummary>,
}

/// Structured end-of-combat record, the sole artifact handed to the
/// external log/UI collaborator besides state mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatSummary {
    pub outcome: CombatOutcome,
    pub enemy: String,
    pub xp: u32,
    pub gold: u32,
    /// Names of loot items granted, with their rarities
    pub loot: Vec<(String, Rarity)>,
}

impl fmt::Display for CombatSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            CombatOutcome::PlayerWon => {
                write!(f, "Victory vs {}", self.enemy)?;
                if self.xp > 0 {
                    write!(f, " | XP: {}", self.xp)?;
                }
                if self.gold > 0 {
                    write!(f, " | Gold: {}", self.gold)?;
                }
                if !self.loot.is_empty() {
                    let entries: Vec<String> = self
                        .loot
                        .iter()
                        .map(|(name, rarity)| format!("{} ({})", name, rarity))
                        .collect();
                    write!(f, " | Loot: {}", entries.join(", "))?;
                }
                Ok(())
            }
            CombatOutcome::Fled => write!(f, "Fled from {}", self.enemy),
            _ => write!(f, "Defeat vs {}", self.enemy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_tokens_parse() {
        assert_eq!("attack".parse::<PlayerAction>().unwrap(), PlayerAction::Attack);
        assert_eq!("defend".parse::<PlayerAction>().unwrap(), PlayerAction::Defend);
        assert_eq!("potion".parse::<PlayerAction>().unwrap(), PlayerAction::UsePotion);
        assert_eq!("flee".parse::<PlayerAction>().unwrap(), PlayerAction::Flee);
    }

    #[test]
    fn unknown_token_is_invalid_action() {
        let err = "dance".parse::<PlayerAction>().unwrap_err();
        assert_eq!(err, CombatError::InvalidAction("dance".to_string()));
    }

    #[test]
    fn victory_summary_lists_rewards() {
        let summary = CombatSummary {
            outcome: CombatOutcome::PlayerWon,
            enemy: "Goblin".to_string(),
            xp: 8,
            gold: 12,
            loot: vec![("Iron Sword".to_string(), Rarity::Common)],
        };
        let text = summary.to_string();
        assert_eq!(text, "Victory vs Goblin | XP: 8 | Gold: 12 | Loot: Iron Sword (common)");
    }

    #[test]
    fn fled_summary_omits_rewards() {
        let summary = CombatSummary {
            outcome: CombatOutcome::Fled,
            enemy: "Dragon".to_string(),
            xp: 0,
            gold: 0,
            loot: Vec::new(),
        };
        assert_eq!(summary.to_string(), "Fled from Dragon");
    }
}
