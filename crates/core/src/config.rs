//! Configuration structures for the albion-market system.

use serde::{Deserialize, Serialize};

use crate::types::{MarketSide, HOUR_MS};

/// Main configuration for the price aggregation core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Market fee configuration.
    pub fees: FeeConfig,
    /// Quote normalization configuration.
    pub quotes: QuoteConfig,
    /// Item catalog / enumeration configuration.
    pub catalog: CatalogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fees: FeeConfig::default(),
            quotes: QuoteConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

/// Market fee schedule per order-book side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Fee percentage when settling against a sell order.
    pub sell_order_pct: f64,
    /// Fee percentage when settling against a buy order.
    pub buy_order_pct: f64,
}

impl FeeConfig {
    /// Fee percentage for the given side.
    pub fn pct(&self, side: MarketSide) -> f64 {
        match side {
            MarketSide::SellOrder => self.sell_order_pct,
            MarketSide::BuyOrder => self.buy_order_pct,
        }
    }

    /// Multiplier yielding the fee-adjusted effective price for the side.
    pub fn factor(&self, side: MarketSide) -> f64 {
        1.0 - self.pct(side) / 100.0
    }
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            sell_order_pct: 4.5,
            buy_order_pct: 3.0,
        }
    }
}

/// Quote normalization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Maximum quote age in hours before a quote counts as stale.
    pub max_quote_age_hours: u32,
}

impl QuoteConfig {
    /// Maximum quote age in milliseconds.
    pub fn max_age_ms(&self) -> i64 {
        self.max_quote_age_hours as i64 * HOUR_MS
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            max_quote_age_hours: 24,
        }
    }
}

/// Item catalog configuration (tier/enchantment enumeration ranges).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Lowest enumerated tier.
    pub tier_min: u8,
    /// Highest enumerated tier.
    pub tier_max: u8,
    /// Highest enchantment subtier (@n).
    pub enchant_max: u8,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            tier_min: 4,
            tier_max: 8,
            enchant_max: 3,
        }
    }
}
