//! Quote normalization for the albion-market system.
//!
//! This crate handles:
//! - Reducing a raw sell/buy quote pair to a single price
//! - Freshness classification under the 24h staleness rule
//! - Reconciling an already-retained quote with a newly fetched one
//! - Normalization statistics

pub mod normalizer;
pub mod reconcile;

pub use normalizer::{is_fresh, normalize_quote, NormalizationStats, QuoteNormalizer};
pub use reconcile::{reconcile, Retained};
