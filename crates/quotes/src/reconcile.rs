//! Two-quote reconciliation.
//!
//! Decides whether a newly fetched normalized quote replaces the one
//! already retained for the same item/city key. Freshness dominates
//! magnitude: a recent quote is trusted over a stale higher number.

use albion_core::{NormalizedQuote, TimestampMs};

use crate::normalizer::is_fresh;

/// Outcome of reconciling an old quote with a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retained {
    /// Keep the quote already in state.
    Old,
    /// Replace it with the new quote.
    New,
}

impl Retained {
    /// Resolve the outcome against the two candidates.
    pub fn choose<'a>(
        self,
        old: &'a NormalizedQuote,
        new: &'a NormalizedQuote,
    ) -> &'a NormalizedQuote {
        match self {
            Retained::Old => old,
            Retained::New => new,
        }
    }
}

/// Reconcile two already-normalized quotes for the same item/city key.
///
/// 1. old fresh, new stale -> keep old
/// 2. old stale, new fresh -> take new
/// 3. both fresh or both stale -> keep the higher price; ties favor old
pub fn reconcile(
    old: &NormalizedQuote,
    new: &NormalizedQuote,
    now_ms: TimestampMs,
    max_age_ms: i64,
) -> Retained {
    let old_fresh = is_fresh(old.date, now_ms, max_age_ms);
    let new_fresh = is_fresh(new.date, now_ms, max_age_ms);

    match (old_fresh, new_fresh) {
        (true, false) => Retained::Old,
        (false, true) => Retained::New,
        _ => {
            if new.price > old.price {
                Retained::New
            } else {
                Retained::Old
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use albion_core::HOUR_MS;

    const NOW: TimestampMs = 1_700_000_000_000;
    const DAY_MS: i64 = 24 * HOUR_MS;

    fn make_quote(price: f64, date: TimestampMs) -> NormalizedQuote {
        NormalizedQuote {
            price,
            date,
            market_fee: 4.5,
            quality: 1,
        }
    }

    #[test]
    fn test_fresh_old_beats_stale_new() {
        // New quote is higher but 48h stale.
        let old = make_quote(100.0, NOW);
        let new = make_quote(5_000.0, NOW - 48 * HOUR_MS);
        assert_eq!(reconcile(&old, &new, NOW, DAY_MS), Retained::Old);
    }

    #[test]
    fn test_fresh_new_beats_stale_old() {
        let old = make_quote(5_000.0, NOW - 48 * HOUR_MS);
        let new = make_quote(100.0, NOW);
        assert_eq!(reconcile(&old, &new, NOW, DAY_MS), Retained::New);
    }

    #[test]
    fn test_both_fresh_higher_price_wins() {
        let old = make_quote(100.0, NOW - HOUR_MS);
        let new = make_quote(110.0, NOW);
        assert_eq!(reconcile(&old, &new, NOW, DAY_MS), Retained::New);

        let new_lower = make_quote(90.0, NOW);
        assert_eq!(reconcile(&old, &new_lower, NOW, DAY_MS), Retained::Old);
    }

    #[test]
    fn test_both_stale_higher_price_wins() {
        let old = make_quote(100.0, NOW - 30 * HOUR_MS);
        let new = make_quote(110.0, NOW - 40 * HOUR_MS);
        assert_eq!(reconcile(&old, &new, NOW, DAY_MS), Retained::New);
    }

    #[test]
    fn test_tie_favors_old() {
        let old = make_quote(100.0, NOW - HOUR_MS);
        let new = make_quote(100.0, NOW);
        assert_eq!(reconcile(&old, &new, NOW, DAY_MS), Retained::Old);
    }

    #[test]
    fn test_choose_resolves_reference() {
        let old = make_quote(100.0, NOW);
        let new = make_quote(200.0, NOW);
        let retained = reconcile(&old, &new, NOW, DAY_MS);
        assert_eq!(retained, Retained::New);
        assert_eq!(retained.choose(&old, &new).price, 200.0);
    }
}
