//! Tier/enchantment variant enumeration.
//!
//! One table-driven routine expands a base item identifier into every
//! tier (T4-T8) and enchantment subtier (@0-@3) variant the price API
//! should be asked about. Each category has its own naming grammar:
//!
//! - items:     `T{t}{rest}` plus `@{e}` for e > 0
//! - resources: `T{t}_{base}` plus `_LEVEL{e}@{e}` for e > 0
//! - artifacts: `T{t}{rest}`, tier only (ROYAL and INSIGHT special-cased)
//! - journals:  `T{t}{rest}_EMPTY` / `T{t}{rest}_FULL` per tier

use albion_core::config::CatalogConfig;
use serde::{Deserialize, Serialize};

/// Item category with a distinct enumeration grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Generic equipment/consumable item.
    Item,
    /// Base crafting resource.
    Resource,
    /// Artifact (tier-only, no enchantment subtiers).
    Artifact,
    /// Crafting journal (empty/full pair per tier).
    Journal,
}

/// Naming pattern applied per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NamePattern {
    /// Replace the leading 2-char tier token: `T{t}{rest}` + `@{e}`.
    TierPrefix,
    /// Prepend the tier: `T{t}_{base}` + `_LEVEL{e}@{e}`.
    ResourceLevel,
    /// Emit the empty/full journal pair per tier.
    JournalStates,
}

/// Enumeration rule for one category.
#[derive(Debug, Clone, Copy)]
struct VariantRule {
    pattern: NamePattern,
    /// Highest enchantment subtier to enumerate (0 = plain only).
    enchant_max: u8,
}

fn rule_for(category: Category, config: &CatalogConfig) -> VariantRule {
    match category {
        Category::Item => VariantRule {
            pattern: NamePattern::TierPrefix,
            enchant_max: config.enchant_max,
        },
        Category::Resource => VariantRule {
            pattern: NamePattern::ResourceLevel,
            enchant_max: config.enchant_max,
        },
        Category::Artifact => VariantRule {
            pattern: NamePattern::TierPrefix,
            enchant_max: 0,
        },
        Category::Journal => VariantRule {
            pattern: NamePattern::JournalStates,
            enchant_max: 0,
        },
    }
}

/// Base name with its leading 2-char tier token removed ("T4_BAG" -> "_BAG").
fn strip_tier(base: &str) -> &str {
    base.get(2..).unwrap_or("")
}

/// Journal base with the tier token and any trailing state suffix removed,
/// so "T4_JOURNAL_WARRIOR_EMPTY" and "T4_JOURNAL_WARRIOR" expand alike.
fn strip_journal(base: &str) -> &str {
    let rest = strip_tier(base);
    rest.strip_suffix("_EMPTY")
        .or_else(|| rest.strip_suffix("_FULL"))
        .unwrap_or(rest)
}

/// Enumerate all tier/subtier variants of a base item identifier.
///
/// Cardinality with the default config: 20 for items and resources
/// (5 tiers x 4 subtiers), 5 for artifacts, 10 for journals (5 tiers x
/// empty/full). Artifact identifiers containing `ROYAL` map to the five
/// fixed quest-token names and `INSIGHT` to the single skillbook token.
pub fn variants(base: &str, category: Category, config: &CatalogConfig) -> Vec<String> {
    if category == Category::Artifact {
        if base.contains("ROYAL") {
            return (config.tier_min..=config.tier_max)
                .map(|tier| format!("QUESTITEM_TOKEN_ROYAL_T{tier}"))
                .collect();
        }
        if base.contains("INSIGHT") {
            return vec!["T4_SKILLBOOK_STANDARD".to_string()];
        }
    }

    let rule = rule_for(category, config);
    let mut names = Vec::new();

    for tier in config.tier_min..=config.tier_max {
        match rule.pattern {
            NamePattern::TierPrefix => {
                let rest = strip_tier(base);
                for enchant in 0..=rule.enchant_max {
                    if enchant == 0 {
                        names.push(format!("T{tier}{rest}"));
                    } else {
                        names.push(format!("T{tier}{rest}@{enchant}"));
                    }
                }
            }
            NamePattern::ResourceLevel => {
                for enchant in 0..=rule.enchant_max {
                    if enchant == 0 {
                        names.push(format!("T{tier}_{base}"));
                    } else {
                        names.push(format!("T{tier}_{base}_LEVEL{enchant}@{enchant}"));
                    }
                }
            }
            NamePattern::JournalStates => {
                let rest = strip_journal(base);
                names.push(format!("T{tier}{rest}_EMPTY"));
                names.push(format!("T{tier}{rest}_FULL"));
            }
        }
    }

    names
}

/// Join variant names into the comma-separated list the price API expects.
pub fn request_string(names: &[String]) -> String {
    names.join(",")
}

/// Enumerate and join in one step.
pub fn variants_request(base: &str, category: Category, config: &CatalogConfig) -> String {
    request_string(&variants(base, category, config))
}
