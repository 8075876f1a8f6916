//! Client-side price state for the albion-market system.
//!
//! This crate handles:
//! - Retained per-city/per-item normalized quotes
//! - The typed update interface (validate, normalize, reconcile, retain)
//! - Best-city lookup across retained quotes
//! - UI-facing loading status and user settings

pub mod store;

pub use store::{LoadingStatus, PriceStore, Settings};
