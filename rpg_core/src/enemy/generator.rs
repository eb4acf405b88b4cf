//! EnemyGenerator - tier- and difficulty-scaled enemy production

use super::tables::{self, Tier, TierStats};
use super::templates::TemplateRegistry;
use super::Enemy;
use crate::config::GameConfig;
use crate::item::{ItemCatalog, HEALTH_POTION};
use rand::seq::SliceRandom;
use rand::Rng;

/// Chance for a generated enemy to carry a healing potion
const POTION_CARRY_CHANCE: f64 = 0.25;

/// Base loot drop chance, scaled by the difficulty multiplier
const BASE_DROP_CHANCE: f64 = 0.2;

/// Produces enemies with stats, rewards and loot scaled by tier and
/// difficulty.
///
/// Loot items are resolved through the item catalog, and plugin-registered
/// enemy templates join the built-in name pool for their tier.
#[derive(Debug, Clone)]
pub struct EnemyGenerator {
    catalog: ItemCatalog,
    templates: TemplateRegistry,
    difficulty: u8,
}

impl EnemyGenerator {
    pub fn new(config: &GameConfig, catalog: ItemCatalog) -> Self {
        EnemyGenerator {
            catalog,
            templates: TemplateRegistry::new(),
            difficulty: config.difficulty,
        }
    }

    /// Replace the plugin template registry
    pub fn with_templates(mut self, templates: TemplateRegistry) -> Self {
        self.templates = templates;
        self
    }

    pub fn templates_mut(&mut self) -> &mut TemplateRegistry {
        &mut self.templates
    }

    /// Difficulty 1-5 mapped onto a stat/reward scalar in [0.7, 1.3]
    pub fn difficulty_multiplier(difficulty: u8) -> f64 {
        1.0 + (difficulty as f64 - 3.0) * 0.15
    }

    /// Generate an enemy of `tier` at an explicit difficulty
    pub fn generate(&self, tier: Tier, difficulty: u8) -> Enemy {
        self.generate_with_rng(tier, difficulty, &mut rand::thread_rng())
    }

    /// `generate` with a provided RNG (for deterministic replay)
    pub fn generate_with_rng(&self, tier: Tier, difficulty: u8, rng: &mut impl Rng) -> Enemy {
        let multiplier = Self::difficulty_multiplier(difficulty);

        let (name, base) = self.pick_identity(tier, rng);

        let base_health = base.health as f64 * multiplier;
        let health = rng
            .gen_range(base_health * 0.9..=base_health * 1.1)
            .ceil() as i32;
        let attack_power = ((base.attack_power as f64 * multiplier) as i32).max(1);
        let armor = ((base.armor as f64 * multiplier) as i32).max(0);

        let mut enemy = Enemy::new(name, health, attack_power, armor, tier);

        enemy.xp_reward = ((tables::base_xp(tier) as f64 * multiplier) as u32).max(1);

        let (gold_min, gold_max) = tables::gold_range(tier);
        let gold_min = ((gold_min as f64 * multiplier) as u32).max(1);
        let gold_max = ((gold_max as f64 * multiplier) as u32).max(gold_min);
        enemy.gold_reward = rng.gen_range(gold_min..=gold_max);

        // some enemies carry a potion so the heal action has teeth
        if rng.gen::<f64>() < POTION_CARRY_CHANCE {
            if let Some(potion) = self.catalog.get(HEALTH_POTION) {
                enemy.inventory.push(potion.clone());
            }
        }

        if rng.gen::<f64>() < BASE_DROP_CHANCE * multiplier {
            let table = tables::loot_weights(tier);
            if let Ok((loot_name, _)) = table.choose_weighted(rng, |&(_, weight)| weight) {
                if let Some(item) = self.catalog.get(loot_name) {
                    enemy.loot.push(item.clone());
                }
            }
        }

        enemy
    }

    /// Generate an enemy scaled to a player level, at the configured
    /// difficulty.
    ///
    /// The level picks the tier, then a gentle per-level multiplier keeps
    /// fights challenging inside a tier: 5% per level on stats, 2% on
    /// rewards.
    pub fn generate_for_player(&self, player_level: u32) -> Enemy {
        self.generate_for_player_with_rng(player_level, &mut rand::thread_rng())
    }

    /// `generate_for_player` with a provided RNG
    pub fn generate_for_player_with_rng(&self, player_level: u32, rng: &mut impl Rng) -> Enemy {
        let tier = Tier::from_player_level(player_level);
        let mut enemy = self.generate_with_rng(tier, self.difficulty, rng);

        let levels_past_first = player_level.saturating_sub(1) as f64;
        let stat_multiplier = 1.0 + levels_past_first * 0.05;

        enemy.max_health = ((enemy.max_health as f64 * stat_multiplier) as i32).max(1);
        enemy.health =
            ((enemy.health as f64 * stat_multiplier) as i32).clamp(0, enemy.max_health);
        enemy.attack_power = ((enemy.attack_power as f64 * stat_multiplier) as i32).max(1);
        enemy.armor = ((enemy.armor as f64 * stat_multiplier) as i32).max(0);

        let reward_multiplier = 1.0 + levels_past_first * 0.02;
        enemy.xp_reward = ((enemy.xp_reward as f64 * reward_multiplier) as u32).max(1);
        enemy.gold_reward = (enemy.gold_reward as f64 * reward_multiplier) as u32;

        enemy
    }

    /// Pick a name and base stat line: built-in names and plugin templates
    /// for the tier are equally likely.
    fn pick_identity(&self, tier: Tier, rng: &mut impl Rng) -> (String, TierStats) {
        let names = tables::name_pool(tier);
        let templates = self.templates.for_tier(tier);
        let pick = rng.gen_range(0..names.len() + templates.len());
        if pick < names.len() {
            (names[pick].to_string(), tables::base_stats(tier))
        } else {
            let template = &templates[pick - names.len()];
            (
                template.name.clone(),
                TierStats {
                    health: template.health,
                    attack_power: template.attack_power,
                    armor: template.armor,
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::EnemyTemplate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn generator() -> EnemyGenerator {
        EnemyGenerator::new(&GameConfig::default(), ItemCatalog::builtin())
    }

    #[test]
    fn difficulty_multiplier_spans_expected_range() {
        assert!((EnemyGenerator::difficulty_multiplier(1) - 0.7).abs() < 1e-9);
        assert!((EnemyGenerator::difficulty_multiplier(3) - 1.0).abs() < 1e-9);
        assert!((EnemyGenerator::difficulty_multiplier(5) - 1.3).abs() < 1e-9);
    }

    #[test]
    fn generated_stats_stay_in_scaled_bounds() {
        let generator = generator();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        for _ in 0..200 {
            let enemy = generator.generate_with_rng(Tier::Tier2, 3, &mut rng);
            // tier2 base health 150, multiplier 1.0, ±10% then ceil
            assert!(enemy.health >= 135 && enemy.health <= 166, "health {}", enemy.health);
            assert_eq!(enemy.max_health, enemy.health);
            assert_eq!(enemy.attack_power, 15);
            assert_eq!(enemy.armor, 5);
            assert!(enemy.xp_reward >= 1);
            assert!((20..=50).contains(&enemy.gold_reward));
            assert!(tables::name_pool(Tier::Tier2).contains(&enemy.name.as_str()));
        }
    }

    #[test]
    fn harder_difficulty_scales_rewards_up() {
        let generator = generator();
        let mut rng = ChaCha8Rng::seed_from_u64(12);

        let easy = generator.generate_with_rng(Tier::Tier3, 1, &mut rng);
        let hard = generator.generate_with_rng(Tier::Tier3, 5, &mut rng);

        // xp is deterministic given difficulty: 60 * 0.7 = 42, 60 * 1.3 = 78
        assert_eq!(easy.xp_reward, 42);
        assert_eq!(hard.xp_reward, 78);
        assert!(hard.attack_power > easy.attack_power);
    }

    #[test]
    fn some_enemies_carry_potions_and_drop_loot() {
        let generator = generator();
        let mut rng = ChaCha8Rng::seed_from_u64(13);

        let mut carriers = 0;
        let mut droppers = 0;
        let trials = 2_000;
        for _ in 0..trials {
            let enemy = generator.generate_with_rng(Tier::Tier1, 3, &mut rng);
            if enemy.has_potion() {
                carriers += 1;
            }
            if !enemy.loot.is_empty() {
                droppers += 1;
            }
        }

        let carry_rate = carriers as f64 / trials as f64;
        let drop_rate = droppers as f64 / trials as f64;
        assert!((carry_rate - 0.25).abs() < 0.04, "carry rate {}", carry_rate);
        assert!((drop_rate - 0.2).abs() < 0.04, "drop rate {}", drop_rate);
    }

    #[test]
    fn loot_comes_from_the_tier_table() {
        let generator = generator();
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        let table_names: Vec<&str> = tables::loot_weights(Tier::Tier1)
            .iter()
            .map(|&(name, _)| name)
            .collect();

        for _ in 0..500 {
            let enemy = generator.generate_with_rng(Tier::Tier1, 5, &mut rng);
            for item in &enemy.loot {
                assert!(table_names.contains(&item.name.as_str()));
            }
        }
    }

    #[test]
    fn plugin_templates_join_the_selection_pool() {
        let mut generator = generator();
        generator
            .templates_mut()
            .register(EnemyTemplate {
                id: "frost_wight".to_string(),
                name: "Frost Wight".to_string(),
                health: 500,
                attack_power: 9,
                armor: 3,
                tier: 1,
            })
            .unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(15);
        let mut seen_template = false;
        for _ in 0..500 {
            let enemy = generator.generate_with_rng(Tier::Tier1, 3, &mut rng);
            if enemy.name == "Frost Wight" {
                seen_template = true;
                // template supplies the base stat line (500 ±10%)
                assert!(enemy.health >= 450 && enemy.health <= 550);
            }
        }
        assert!(seen_template, "template never selected in 500 draws");
    }

    #[test]
    fn player_scaling_is_monotone_in_level() {
        let generator = generator();
        let mut last = (0, 0, 0);
        for level in 1..=20 {
            // same seed per level isolates the level scaling from the
            // random stat roll
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            let enemy = generator.generate_for_player_with_rng(level, &mut rng);
            let current = (enemy.max_health, enemy.attack_power, enemy.armor);
            assert!(
                current.0 >= last.0 && current.1 >= last.1 && current.2 >= last.2,
                "level {} produced {:?} after {:?}",
                level,
                current,
                last
            );
            last = current;
        }
    }

    #[test]
    fn player_scaling_keeps_health_within_max() {
        let generator = generator();
        let mut rng = ChaCha8Rng::seed_from_u64(16);
        for level in 1..=30 {
            let enemy = generator.generate_for_player_with_rng(level, &mut rng);
            assert!(enemy.health <= enemy.max_health);
            assert!(enemy.health > 0);
        }
    }

    #[test]
    fn reward_scaling_is_gentler_than_stat_scaling() {
        let generator = generator();
        // level 3 stays in tier1: stats grow 10%, rewards 4%
        let mut rng_low = ChaCha8Rng::seed_from_u64(17);
        let low = generator.generate_for_player_with_rng(1, &mut rng_low);
        let mut rng_high = ChaCha8Rng::seed_from_u64(17);
        let high = generator.generate_for_player_with_rng(3, &mut rng_high);

        assert_eq!(low.xp_reward, 8);
        assert_eq!(high.xp_reward, 8); // int(8 * 1.04) = 8
        assert!(high.max_health >= low.max_health);
    }
}
