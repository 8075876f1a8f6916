//! Wall-clock abstraction.
//!
//! Freshness decisions depend on "now"; the stateful layers take a clock
//! so tests can pin time, while the pure normalizer functions take an
//! explicit `now_ms` parameter.

use chrono::Utc;

use crate::types::TimestampMs;

/// Source of the current time in epoch milliseconds.
pub trait Clock {
    /// Current time in milliseconds since Unix epoch.
    fn now_ms(&self) -> TimestampMs;
}

/// System wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> TimestampMs {
        Utc::now().timestamp_millis()
    }
}

/// Fixed clock for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub TimestampMs);

impl Clock for FixedClock {
    fn now_ms(&self) -> TimestampMs {
        self.0
    }
}
