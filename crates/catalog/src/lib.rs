//! Item catalog utilities for the albion-market system.
//!
//! This crate handles:
//! - Tier/enchantment variant enumeration per item category
//! - Request-string generation for the price API
//! - Item-category classification (artifact keyword sets)

pub mod classify;
pub mod variants;

pub use classify::{category_of, is_artifact, is_artifact_item};
pub use variants::{request_string, variants, variants_request, Category};
