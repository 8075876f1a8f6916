//! Core types and configuration for the albion-market system.
//!
//! This crate provides shared types used across all other crates:
//! - Market quote types (raw and normalized)
//! - City and order-book side enums
//! - Configuration structures
//! - Common error types
//! - Clock abstraction for freshness decisions

pub mod clock;
pub mod config;
pub mod error;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
