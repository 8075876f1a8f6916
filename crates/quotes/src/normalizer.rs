//! Single-quote normalization.
//!
//! Reduces a raw quote (sell-order minimum and buy-order maximum, each with
//! its own observation timestamp) to exactly one side, applying a
//! recency/magnitude tie-break policy.

use albion_core::config::FeeConfig;
use albion_core::{Config, MarketSide, NormalizedQuote, RawQuote, TimestampMs};

/// A quote timestamp is fresh while it is no older than `max_age_ms`.
#[inline]
pub fn is_fresh(ts: TimestampMs, now_ms: TimestampMs, max_age_ms: i64) -> bool {
    now_ms - max_age_ms <= ts
}

/// Which rule of the decision ladder picked the side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    /// Only the sell side had a price.
    SellOnly,
    /// Only the buy side had a price.
    BuyOnly,
    /// Neither side had a price (degenerate buy-side default).
    Empty,
    /// One side fresh, the other stale.
    Freshness,
    /// Both fresh or both stale; fee-adjusted magnitude decided.
    Magnitude,
}

fn decide(
    raw: &RawQuote,
    now_ms: TimestampMs,
    fees: &FeeConfig,
    max_age_ms: i64,
) -> (MarketSide, Decision) {
    let has_sell = raw.sell_price_min > 0.0;
    let has_buy = raw.buy_price_max > 0.0;

    match (has_sell, has_buy) {
        (true, false) => return (MarketSide::SellOrder, Decision::SellOnly),
        (false, true) => return (MarketSide::BuyOrder, Decision::BuyOnly),
        (false, false) => return (MarketSide::BuyOrder, Decision::Empty),
        (true, true) => {}
    }

    let sell_fresh = is_fresh(raw.sell_price_min_date, now_ms, max_age_ms);
    let buy_fresh = is_fresh(raw.buy_price_max_date, now_ms, max_age_ms);

    match (sell_fresh, buy_fresh) {
        (true, false) => (MarketSide::SellOrder, Decision::Freshness),
        (false, true) => (MarketSide::BuyOrder, Decision::Freshness),
        // Both fresh or both stale: the buy side wins only when its
        // fee-adjusted price strictly exceeds the sell side's.
        _ => {
            let buy_effective = raw.buy_price_max * fees.factor(MarketSide::BuyOrder);
            let sell_effective = raw.sell_price_min * fees.factor(MarketSide::SellOrder);
            if buy_effective > sell_effective {
                (MarketSide::BuyOrder, Decision::Magnitude)
            } else {
                (MarketSide::SellOrder, Decision::Magnitude)
            }
        }
    }
}

/// Reduce a raw quote to a single normalized quote.
///
/// Total: always produces exactly one result, never both sides and never
/// neither. Decision order (first match wins):
/// 1. only sell priced -> sell side
/// 2. only buy priced -> buy side
/// 3. both zero -> buy side (price 0)
/// 4. sell fresh, buy stale -> sell side
/// 5. sell stale, buy fresh -> buy side
/// 6. otherwise higher fee-adjusted price, sell side on ties
pub fn normalize_quote(
    raw: &RawQuote,
    now_ms: TimestampMs,
    fees: &FeeConfig,
    max_age_ms: i64,
) -> NormalizedQuote {
    let (side, _) = decide(raw, now_ms, fees, max_age_ms);
    NormalizedQuote::from_side(raw, side)
}

/// Statistics about normalization decisions.
#[derive(Debug, Clone, Default)]
pub struct NormalizationStats {
    /// Total quotes normalized.
    pub total_quotes: u64,
    /// Quotes resolved to the sell side.
    pub sell_side: u64,
    /// Quotes resolved to the buy side.
    pub buy_side: u64,
    /// Quotes where only one side had a price.
    pub one_sided: u64,
    /// Quotes with no price on either side.
    pub empty: u64,
    /// Quotes decided by the freshness rule.
    pub freshness_decisions: u64,
    /// Quotes decided by fee-adjusted magnitude.
    pub magnitude_decisions: u64,
}

impl NormalizationStats {
    /// Fraction of quotes resolved to the buy side.
    pub fn buy_frac(&self) -> f64 {
        if self.total_quotes > 0 {
            self.buy_side as f64 / self.total_quotes as f64
        } else {
            0.0
        }
    }

    /// Reset statistics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Stateless-in-policy, stateful-in-bookkeeping normalizer built from the
/// shared configuration. Wraps [`normalize_quote`] and counts decisions.
pub struct QuoteNormalizer {
    /// Fee schedule used for effective-price comparison.
    fees: FeeConfig,
    /// Staleness window (ms).
    max_age_ms: i64,
    /// Decision statistics.
    stats: NormalizationStats,
}

impl QuoteNormalizer {
    /// Create a normalizer from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            fees: config.fees.clone(),
            max_age_ms: config.quotes.max_age_ms(),
            stats: NormalizationStats::default(),
        }
    }

    /// Staleness window in milliseconds.
    pub fn max_age_ms(&self) -> i64 {
        self.max_age_ms
    }

    /// Normalize a raw quote at the given time.
    pub fn normalize(&mut self, raw: &RawQuote, now_ms: TimestampMs) -> NormalizedQuote {
        let (side, decision) = decide(raw, now_ms, &self.fees, self.max_age_ms);

        self.stats.total_quotes += 1;
        match side {
            MarketSide::SellOrder => self.stats.sell_side += 1,
            MarketSide::BuyOrder => self.stats.buy_side += 1,
        }
        match decision {
            Decision::SellOnly | Decision::BuyOnly => self.stats.one_sided += 1,
            Decision::Empty => self.stats.empty += 1,
            Decision::Freshness => self.stats.freshness_decisions += 1,
            Decision::Magnitude => self.stats.magnitude_decisions += 1,
        }

        NormalizedQuote::from_side(raw, side)
    }

    /// Get normalization statistics.
    pub fn stats(&self) -> &NormalizationStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use albion_core::HOUR_MS;

    const NOW: TimestampMs = 1_700_000_000_000;
    const DAY_MS: i64 = 24 * HOUR_MS;

    fn make_raw(sell: f64, sell_ts: TimestampMs, buy: f64, buy_ts: TimestampMs) -> RawQuote {
        RawQuote {
            item_id: "T4_BAG".to_string(),
            sell_price_min: sell,
            sell_price_min_date: sell_ts,
            buy_price_max: buy,
            buy_price_max_date: buy_ts,
            quality: 1,
        }
    }

    fn normalize(raw: &RawQuote) -> NormalizedQuote {
        normalize_quote(raw, NOW, &FeeConfig::default(), DAY_MS)
    }

    #[test]
    fn test_is_fresh_boundary() {
        assert!(is_fresh(NOW, NOW, DAY_MS));
        assert!(is_fresh(NOW - DAY_MS, NOW, DAY_MS)); // exactly 24h old
        assert!(!is_fresh(NOW - DAY_MS - 1, NOW, DAY_MS));
    }

    #[test]
    fn test_sell_only() {
        let raw = make_raw(100.0, NOW, 0.0, NOW);
        let q = normalize(&raw);
        assert_eq!(q.price, 100.0);
        assert_eq!(q.market_fee, 4.5);
    }

    #[test]
    fn test_buy_only() {
        let raw = make_raw(0.0, NOW, 80.0, NOW);
        let q = normalize(&raw);
        assert_eq!(q.price, 80.0);
        assert_eq!(q.market_fee, 3.0);
    }

    #[test]
    fn test_both_empty_defaults_to_buy_side() {
        let raw = make_raw(0.0, NOW, 0.0, NOW);
        let q = normalize(&raw);
        assert_eq!(q.price, 0.0);
        assert_eq!(q.market_fee, 3.0);
    }

    #[test]
    fn test_fresh_sell_beats_stale_buy_regardless_of_magnitude() {
        // Buy side is much higher but 48h old.
        let raw = make_raw(100.0, NOW, 10_000.0, NOW - 48 * HOUR_MS);
        let q = normalize(&raw);
        assert_eq!(q.price, 100.0);
        assert_eq!(q.market_fee, 4.5);
    }

    #[test]
    fn test_fresh_buy_beats_stale_sell() {
        let raw = make_raw(10_000.0, NOW - 48 * HOUR_MS, 100.0, NOW);
        let q = normalize(&raw);
        assert_eq!(q.price, 100.0);
        assert_eq!(q.market_fee, 3.0);
    }

    #[test]
    fn test_magnitude_tie_break_both_fresh() {
        // Equal raw prices: buy effective 97 > sell effective 95.5.
        let raw = make_raw(100.0, NOW, 100.0, NOW);
        let q = normalize(&raw);
        assert_eq!(q.market_fee, 3.0);

        // sell 100 -> 95.5; buy 98 -> 95.06: sell wins.
        let raw = make_raw(100.0, NOW, 98.0, NOW);
        let q = normalize(&raw);
        assert_eq!(q.price, 100.0);
        assert_eq!(q.market_fee, 4.5);
    }

    #[test]
    fn test_magnitude_tie_break_both_stale() {
        let old = NOW - 48 * HOUR_MS;
        let raw = make_raw(100.0, old, 100.0, old);
        let q = normalize(&raw);
        // Both stale falls through to the same magnitude comparison.
        assert_eq!(q.market_fee, 3.0);
        assert_eq!(q.date, old);
    }

    #[test]
    fn test_equal_effective_prices_favor_sell() {
        // buy * 0.97 == sell * 0.955 exactly: not strictly greater, sell wins.
        let raw = make_raw(97.0, NOW, 95.5, NOW);
        let q = normalize(&raw);
        assert_eq!(q.market_fee, 4.5);
    }

    #[test]
    fn test_quality_carried_through() {
        let mut raw = make_raw(100.0, NOW, 0.0, NOW);
        raw.quality = 3;
        let q = normalize(&raw);
        assert_eq!(q.quality, 3);
    }

    #[test]
    fn test_normalizer_stats() {
        let mut normalizer = QuoteNormalizer::new(&Config::default());

        normalizer.normalize(&make_raw(100.0, NOW, 0.0, NOW), NOW); // sell-only
        normalizer.normalize(&make_raw(0.0, NOW, 80.0, NOW), NOW); // buy-only
        normalizer.normalize(&make_raw(0.0, NOW, 0.0, NOW), NOW); // empty
        normalizer.normalize(&make_raw(100.0, NOW, 90.0, NOW - 48 * HOUR_MS), NOW); // freshness
        normalizer.normalize(&make_raw(100.0, NOW, 100.0, NOW), NOW); // magnitude

        let stats = normalizer.stats();
        assert_eq!(stats.total_quotes, 5);
        assert_eq!(stats.one_sided, 2);
        assert_eq!(stats.empty, 1);
        assert_eq!(stats.freshness_decisions, 1);
        assert_eq!(stats.magnitude_decisions, 1);
        assert_eq!(stats.sell_side, 3);
        assert_eq!(stats.buy_side, 2);
        assert!((stats.buy_frac() - 0.4).abs() < 1e-10);

        normalizer.reset_stats();
        assert_eq!(normalizer.stats().total_quotes, 0);
    }
}
