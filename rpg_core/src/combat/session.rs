//! CombatSession - the turn state machine

use super::events::{CombatError, CombatEvent, CombatOutcome, CombatSummary, PlayerAction, TurnResult};
use crate::config::ProgressionConfig;
use crate::enemy::{Enemy, EnemyAction};
use crate::equipment;
use crate::item::HEALTH_POTION;
use crate::player::Player;
use crate::progression;
use rand::Rng;

/// Roll the player's effective attack power for one strike.
///
/// Half of strength plus the equipment bonus, with ±2 variance, never
/// below 1.
pub fn roll_attack_power(strength: i32, attack_power_bonus: i32, rng: &mut impl Rng) -> i32 {
    (strength / 2 + attack_power_bonus + rng.gen_range(-2..=2)).max(1)
}

/// Resolve one strike: power minus defense with ±1 variance, never below 1.
///
/// Defending halves the result AFTER this clamp, so a braced target can
/// reduce a hit all the way to 0.
pub fn roll_strike_damage(power: i32, defense: i32, rng: &mut impl Rng) -> i32 {
    (power - defense + rng.gen_range(-1..=1)).max(1)
}

/// One combat encounter between the player and a generated enemy.
///
/// The session holds the enemy and the transient defending flags; the
/// player aggregate is passed into every call. It is driven externally one
/// action at a time and never waits or loops on its own.
#[derive(Debug)]
pub struct CombatSession {
    enemy: Enemy,
    player_defending: bool,
    enemy_defending: bool,
    outcome: CombatOutcome,
    progression: ProgressionConfig,
}

impl CombatSession {
    pub fn new(enemy: Enemy, progression: ProgressionConfig) -> Self {
        CombatSession {
            enemy,
            player_defending: false,
            enemy_defending: false,
            outcome: CombatOutcome::Ongoing,
            progression,
        }
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn outcome(&self) -> CombatOutcome {
        self.outcome
    }

    /// Submit one player action with the thread-local RNG
    pub fn submit_action(
        &mut self,
        player: &mut Player,
        action: PlayerAction,
    ) -> Result<TurnResult, CombatError> {
        self.submit_action_with_rng(player, action, &mut rand::thread_rng())
    }

    /// Submit one player action and resolve the full exchange.
    ///
    /// Resolves the player action, then (unless combat ended) the enemy
    /// turn, and reports everything observable in the returned TurnResult.
    pub fn submit_action_with_rng(
        &mut self,
        player: &mut Player,
        action: PlayerAction,
        rng: &mut impl Rng,
    ) -> Result<TurnResult, CombatError> {
        if self.outcome.is_ended() {
            return Err(CombatError::SessionEnded);
        }

        let mut events = Vec::new();

        match action {
            PlayerAction::Attack => {
                let power = roll_attack_power(player.strength, player.attack_power_bonus, rng);
                let mut damage = roll_strike_damage(power, self.enemy.armor, rng);
                if self.enemy_defending {
                    damage /= 2;
                    self.enemy_defending = false;
                }
                self.enemy.take_damage(damage);
                events.push(CombatEvent::PlayerHit {
                    enemy: self.enemy.name.clone(),
                    damage,
                });
            }
            PlayerAction::Defend => {
                self.player_defending = true;
                events.push(CombatEvent::PlayerDefended);
            }
            PlayerAction::UsePotion => {
                if let Some(index) = player.find_in_inventory(HEALTH_POTION) {
                    let potion = player.inventory.remove(index);
                    let before = player.health;
                    potion.apply(player);
                    events.push(CombatEvent::PotionUsed {
                        healed: player.health - before,
                    });
                } else {
                    events.push(CombatEvent::PotionMissing);
                }
            }
            PlayerAction::Flee => {
                if rng.gen::<f64>() < 0.5 {
                    events.push(CombatEvent::FleeSucceeded);
                    self.outcome = CombatOutcome::Fled;
                    let summary = self.summary();
                    return Ok(TurnResult {
                        events,
                        outcome: self.outcome,
                        summary: Some(summary),
                    });
                }
                events.push(CombatEvent::FleeFailed);
            }
        }

        if !self.enemy.is_alive() {
            self.outcome = CombatOutcome::PlayerWon;
            self.grant_rewards(player, &mut events);
            let summary = self.summary();
            return Ok(TurnResult {
                events,
                outcome: self.outcome,
                summary: Some(summary),
            });
        }

        let action = self.enemy.decide_action_with_rng(rng);
        self.apply_enemy_action(player, action, rng, &mut events);

        if !player.is_alive() {
            events.push(CombatEvent::PlayerDefeated);
            self.outcome = CombatOutcome::PlayerLost;
            let summary = self.summary();
            return Ok(TurnResult {
                events,
                outcome: self.outcome,
                summary: Some(summary),
            });
        }

        Ok(TurnResult {
            events,
            outcome: CombatOutcome::Ongoing,
            summary: None,
        })
    }

    fn apply_enemy_action(
        &mut self,
        player: &mut Player,
        action: EnemyAction,
        rng: &mut impl Rng,
        events: &mut Vec<CombatEvent>,
    ) {
        match action {
            EnemyAction::Attack => {
                let defense = player.agility / 3;
                let mut damage = roll_strike_damage(self.enemy.attack_power, defense, rng);
                if self.player_defending {
                    damage /= 2;
                    self.player_defending = false;
                }
                player.take_damage(damage);
                events.push(CombatEvent::EnemyHit {
                    enemy: self.enemy.name.clone(),
                    damage,
                });
            }
            EnemyAction::Defend => {
                self.enemy_defending = true;
                events.push(CombatEvent::EnemyDefended {
                    enemy: self.enemy.name.clone(),
                });
            }
            EnemyAction::Heal => {
                let before = self.enemy.health;
                let used_potion = if let Some(index) = self
                    .enemy
                    .inventory
                    .iter()
                    .position(|item| item.name == HEALTH_POTION)
                {
                    let potion = self.enemy.inventory.remove(index);
                    potion.apply(&mut self.enemy);
                    true
                } else {
                    let amount = (self.enemy.max_health / 6).max(1);
                    self.enemy.heal(amount);
                    false
                };
                events.push(CombatEvent::EnemyHealed {
                    enemy: self.enemy.name.clone(),
                    amount: self.enemy.health - before,
                    used_potion,
                });
            }
        }
    }

    /// Hand out XP, gold and loot for a victory
    fn grant_rewards(&mut self, player: &mut Player, events: &mut Vec<CombatEvent>) {
        events.push(CombatEvent::EnemyDefeated {
            enemy: self.enemy.name.clone(),
        });

        if self.enemy.xp_reward > 0 {
            events.push(CombatEvent::ExperienceGained {
                amount: self.enemy.xp_reward,
            });
            for level_up in
                progression::add_experience(player, self.enemy.xp_reward, &self.progression)
            {
                events.push(CombatEvent::LeveledUp(level_up));
            }
        }

        if self.enemy.gold_reward > 0 {
            player.gold += self.enemy.gold_reward;
            events.push(CombatEvent::GoldFound {
                amount: self.enemy.gold_reward,
            });
        }

        for item in &self.enemy.loot {
            events.push(CombatEvent::LootFound {
                name: item.name.clone(),
                rarity: item.rarity,
            });
        }
        if !self.enemy.loot.is_empty() {
            for loot_event in equipment::add_loot(player, &self.enemy.loot) {
                events.push(CombatEvent::Loot(loot_event));
            }
        }
    }

    fn summary(&self) -> CombatSummary {
        let victorious = self.outcome == CombatOutcome::PlayerWon;
        CombatSummary {
            outcome: self.outcome,
            enemy: self.enemy.name.clone(),
            xp: if victorious { self.enemy.xp_reward } else { 0 },
            gold: if victorious { self.enemy.gold_reward } else { 0 },
            loot: if victorious {
                self.enemy
                    .loot
                    .iter()
                    .map(|item| (item.name.clone(), item.rarity))
                    .collect()
            } else {
                Vec::new()
            },
        }
    }
}
