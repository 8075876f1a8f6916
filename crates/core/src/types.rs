//! Core data types for the albion-market system.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Timestamp in milliseconds since Unix epoch (UTC).
pub type TimestampMs = i64;

/// Price type with ordering support.
pub type Price = OrderedFloat<f64>;

/// One hour in milliseconds.
pub const HOUR_MS: i64 = 3_600_000;

/// Side of the market order book a price was taken from.
///
/// Transactions settle against a fixed fee schedule per side: sell orders
/// (asks) carry a 4.5% market fee, buy orders (bids) a 3% fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketSide {
    /// Sell order (ask) - the minimum price a seller accepts.
    SellOrder,
    /// Buy order (bid) - the maximum price a buyer offers.
    BuyOrder,
}

impl MarketSide {
    /// Market fee percentage for this side.
    #[inline]
    pub fn fee_pct(self) -> f64 {
        match self {
            MarketSide::SellOrder => 4.5,
            MarketSide::BuyOrder => 3.0,
        }
    }

    /// Multiplier yielding the fee-adjusted effective price.
    #[inline]
    pub fn fee_factor(self) -> f64 {
        1.0 - self.fee_pct() / 100.0
    }
}

/// Raw price quote for one item in one city, as returned by the market
/// data API. A zero price means "no data for that side".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuote {
    /// Item identifier (e.g., "T4_BAG@1").
    pub item_id: String,
    /// Lowest current sell-order price (0 = no sell orders).
    pub sell_price_min: f64,
    /// Timestamp of the sell-order observation.
    pub sell_price_min_date: TimestampMs,
    /// Highest current buy-order price (0 = no buy orders).
    pub buy_price_max: f64,
    /// Timestamp of the buy-order observation.
    pub buy_price_max_date: TimestampMs,
    /// Item quality level (1-5).
    pub quality: u8,
}

impl RawQuote {
    /// Price and observation timestamp for the given side.
    #[inline]
    pub fn side(&self, side: MarketSide) -> (f64, TimestampMs) {
        match side {
            MarketSide::SellOrder => (self.sell_price_min, self.sell_price_min_date),
            MarketSide::BuyOrder => (self.buy_price_max, self.buy_price_max_date),
        }
    }

    /// Check the quote for non-finite or negative fields.
    ///
    /// The normalizer itself is total and never fails; this is the strict
    /// validation applied at the store boundary before a quote is accepted.
    pub fn validate(&self) -> Result<()> {
        if !self.sell_price_min.is_finite() || self.sell_price_min < 0.0 {
            return Err(Error::invalid_quote(format!(
                "{}: bad sell price {}",
                self.item_id, self.sell_price_min
            )));
        }
        if !self.buy_price_max.is_finite() || self.buy_price_max < 0.0 {
            return Err(Error::invalid_quote(format!(
                "{}: bad buy price {}",
                self.item_id, self.buy_price_max
            )));
        }
        if self.sell_price_min_date < 0 || self.buy_price_max_date < 0 {
            return Err(Error::invalid_quote(format!(
                "{}: negative timestamp",
                self.item_id
            )));
        }
        Ok(())
    }
}

/// Single chosen price for one item/city key, reduced from a [`RawQuote`].
///
/// `market_fee` is always exactly 4.5 or 3.0, recording which side of the
/// book the price came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuote {
    /// The chosen price.
    pub price: f64,
    /// Observation timestamp of the chosen side.
    pub date: TimestampMs,
    /// Fee percentage of the chosen side (4.5 sell / 3.0 buy).
    pub market_fee: f64,
    /// Item quality level.
    pub quality: u8,
}

impl NormalizedQuote {
    /// Build a quote from one side of a raw record, stamping that side's fee.
    pub fn from_side(raw: &RawQuote, side: MarketSide) -> Self {
        let (price, date) = raw.side(side);
        Self {
            price,
            date,
            market_fee: side.fee_pct(),
            quality: raw.quality,
        }
    }

    /// Which side of the book this quote was derived from.
    #[inline]
    pub fn side(&self) -> MarketSide {
        if self.market_fee == MarketSide::SellOrder.fee_pct() {
            MarketSide::SellOrder
        } else {
            MarketSide::BuyOrder
        }
    }
}

/// The six royal cities with a marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Caerleon,
    Bridgewatch,
    FortSterling,
    Lymhurst,
    Martlock,
    Thetford,
}

impl City {
    /// All cities, in display order.
    pub const ALL: [City; 6] = [
        City::Caerleon,
        City::Bridgewatch,
        City::FortSterling,
        City::Lymhurst,
        City::Martlock,
        City::Thetford,
    ];

    /// Display name as used by the market data API.
    pub fn name(self) -> &'static str {
        match self {
            City::Caerleon => "Caerleon",
            City::Bridgewatch => "Bridgewatch",
            City::FortSterling => "Fort Sterling",
            City::Lymhurst => "Lymhurst",
            City::Martlock => "Martlock",
            City::Thetford => "Thetford",
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
