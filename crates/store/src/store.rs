//! Price state container.
//!
//! Replaces the global mutable store with an explicit, injectable struct.
//! All updates flow through one typed interface that validates the raw
//! quote, normalizes it, and reconciles it against the quote already
//! retained for the same item/city key.

use std::collections::HashMap;

use albion_core::{
    City, Clock, Config, NormalizedQuote, Price, RawQuote, Result, SystemClock, TimestampMs,
};
use albion_quotes::{reconcile, NormalizationStats, QuoteNormalizer};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// UI-facing loading state of the price view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadingStatus {
    /// Prices are loaded and derived values are up to date.
    #[default]
    Calculated,
    /// State changed since the last calculation.
    SomethingChanged,
    /// A fetch is in flight.
    LoadingItems,
}

/// User settings that shape fetching and profit calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Spend crafting focus for the improved return rate.
    pub use_focus: bool,
    /// Crafting station fee percentage.
    pub fee: f64,
    /// Override the station's resource return percentage.
    pub use_own_percentage: bool,
    /// Resource return percentage.
    pub return_percentage: f64,
    /// Fetch prices for all cities instead of the selected pair.
    pub use_multiple_cities: bool,
    /// City where resources are bought.
    pub buy_resources_city: City,
    /// City where crafted items are sold.
    pub sell_items_city: City,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_focus: false,
            fee: 10.0,
            use_own_percentage: false,
            return_percentage: 15.2,
            use_multiple_cities: false,
            buy_resources_city: City::Caerleon,
            sell_items_city: City::Caerleon,
        }
    }
}

/// Retained best prices per city and item, plus session state.
pub struct PriceStore<C: Clock = SystemClock> {
    /// Retained quote per (city, item id).
    prices: HashMap<City, HashMap<String, NormalizedQuote>>,
    /// Normalizer shared by all updates.
    normalizer: QuoteNormalizer,
    /// User settings.
    settings: Settings,
    /// Loading state flag.
    status: LoadingStatus,
    /// Injected time source for freshness decisions.
    clock: C,
}

impl PriceStore<SystemClock> {
    /// Create a store on the system wall clock.
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> PriceStore<C> {
    /// Create a store with an injected clock.
    pub fn with_clock(config: &Config, clock: C) -> Self {
        Self {
            prices: HashMap::new(),
            normalizer: QuoteNormalizer::new(config),
            settings: Settings::default(),
            status: LoadingStatus::default(),
            clock,
        }
    }

    /// Apply a freshly fetched raw quote.
    ///
    /// Validates, normalizes, reconciles against the retained quote for the
    /// same key, and returns whichever quote is retained afterwards.
    pub fn apply_raw(&mut self, city: City, raw: &RawQuote) -> Result<NormalizedQuote> {
        if let Err(err) = raw.validate() {
            warn!(city = %city, item = %raw.item_id, "rejected quote: {err}");
            return Err(err);
        }

        let now_ms = self.clock.now_ms();
        let new = self.normalizer.normalize(raw, now_ms);
        let max_age_ms = self.normalizer.max_age_ms();

        let slot = self.prices.entry(city).or_default();
        let retained = match slot.get(&raw.item_id) {
            Some(old) => {
                let outcome = reconcile(old, &new, now_ms, max_age_ms);
                debug!(
                    city = %city,
                    item = %raw.item_id,
                    outcome = ?outcome,
                    old_price = old.price,
                    new_price = new.price,
                    "reconciled quote"
                );
                outcome.choose(old, &new).clone()
            }
            None => new,
        };

        slot.insert(raw.item_id.clone(), retained.clone());
        self.status = LoadingStatus::SomethingChanged;
        Ok(retained)
    }

    /// Retained quote for an item in a city.
    pub fn quote(&self, city: City, item_id: &str) -> Option<&NormalizedQuote> {
        self.prices.get(&city)?.get(item_id)
    }

    /// All retained quotes for a city.
    pub fn city_prices(&self, city: City) -> Option<&HashMap<String, NormalizedQuote>> {
        self.prices.get(&city)
    }

    /// City holding the highest retained price for an item.
    pub fn best_city(&self, item_id: &str) -> Option<(City, &NormalizedQuote)> {
        City::ALL
            .iter()
            .filter_map(|&city| {
                self.prices
                    .get(&city)
                    .and_then(|m| m.get(item_id))
                    .map(|q| (city, q))
            })
            .max_by_key(|(_, q)| Price::from(q.price))
    }

    /// Number of retained quotes across all cities.
    pub fn len(&self) -> usize {
        self.prices.values().map(|m| m.len()).sum()
    }

    /// True when no quotes are retained.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current loading status.
    pub fn status(&self) -> LoadingStatus {
        self.status
    }

    /// Set the loading status.
    pub fn set_status(&mut self, status: LoadingStatus) {
        self.status = status;
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable settings access; flags the state as changed.
    pub fn settings_mut(&mut self) -> &mut Settings {
        self.status = LoadingStatus::SomethingChanged;
        &mut self.settings
    }

    /// Normalization statistics accumulated by this store.
    pub fn stats(&self) -> &NormalizationStats {
        self.normalizer.stats()
    }

    /// Current time according to the injected clock.
    pub fn now_ms(&self) -> TimestampMs {
        self.clock.now_ms()
    }

    /// Drop all retained quotes and reset the status.
    pub fn clear(&mut self) {
        self.prices.clear();
        self.status = LoadingStatus::default();
    }
}
