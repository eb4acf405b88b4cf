//! Plugin-supplied enemy and item templates
//!
//! Templates arrive as JSON payloads from an external plugin loader. Each
//! payload is validated on its own; a malformed one is skipped and reported
//! without failing the rest of the batch.

use super::tables::Tier;
use crate::item::{Item, ItemCatalog, ItemKind};
use crate::types::{Rarity, Stat};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Template rejection reason
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("malformed template: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("tier must be 1-5, got {0}")]
    UnknownTier(u8),
    #[error("{0}")]
    InvalidValue(String),
}

/// Outcome of loading a template batch
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of templates accepted
    pub loaded: usize,
    /// One diagnostic line per rejected template
    pub skipped: Vec<String>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// An externally supplied enemy definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub id: String,
    pub name: String,
    pub health: i32,
    pub attack_power: i32,
    pub armor: i32,
    /// Numeric tier, 1 through 5
    pub tier: u8,
}

impl EnemyTemplate {
    /// Validate field values beyond shape: tier in range, stats sane
    pub fn validate(&self) -> Result<Tier, TemplateError> {
        let tier = Tier::from_number(self.tier).ok_or(TemplateError::UnknownTier(self.tier))?;
        if self.health < 1 {
            return Err(TemplateError::InvalidValue(format!(
                "health must be positive, got {}",
                self.health
            )));
        }
        if self.attack_power < 0 || self.armor < 0 {
            return Err(TemplateError::InvalidValue(
                "attack_power and armor must not be negative".to_string(),
            ));
        }
        Ok(tier)
    }
}

/// An externally supplied item definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub id: String,
    pub name: String,
    pub item_type: ItemKind,
    pub effect: BTreeMap<Stat, i32>,
    pub value: u32,
    #[serde(default)]
    pub rarity: Rarity,
}

impl ItemTemplate {
    pub fn into_item(self) -> Item {
        Item::new(self.name, self.item_type, self.effect, self.value).with_rarity(self.rarity)
    }
}

/// Validated enemy templates, indexed by tier for generation
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    by_tier: HashMap<Tier, Vec<EnemyTemplate>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one template, validating it first
    pub fn register(&mut self, template: EnemyTemplate) -> Result<(), TemplateError> {
        let tier = template.validate()?;
        self.by_tier.entry(tier).or_default().push(template);
        Ok(())
    }

    /// Load a batch of JSON payloads, skipping and reporting bad ones
    pub fn load(&mut self, payloads: &[serde_json::Value]) -> LoadReport {
        let mut report = LoadReport::default();
        for (index, payload) in payloads.iter().enumerate() {
            let parsed = serde_json::from_value::<EnemyTemplate>(payload.clone())
                .map_err(TemplateError::from)
                .and_then(|template| self.register(template));
            match parsed {
                Ok(()) => report.loaded += 1,
                Err(err) => report.skipped.push(format!("enemy template #{}: {}", index, err)),
            }
        }
        report
    }

    /// Templates registered for a tier
    pub fn for_tier(&self, tier: Tier) -> &[EnemyTemplate] {
        self.by_tier.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Find a template by its id
    pub fn get(&self, id: &str) -> Option<&EnemyTemplate> {
        self.by_tier
            .values()
            .flat_map(|templates| templates.iter())
            .find(|template| template.id == id)
    }

    pub fn len(&self) -> usize {
        self.by_tier.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Load item template payloads into the catalog, skipping bad ones
pub fn load_item_templates(
    payloads: &[serde_json::Value],
    catalog: &mut ItemCatalog,
) -> LoadReport {
    let mut report = LoadReport::default();
    for (index, payload) in payloads.iter().enumerate() {
        match serde_json::from_value::<ItemTemplate>(payload.clone()) {
            Ok(template) => {
                catalog.register(template.into_item());
                report.loaded += 1;
            }
            Err(err) => report.skipped.push(format!("item template #{}: {}", index, err)),
        }
    }
    report
}
