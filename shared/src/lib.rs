//! Shared types for the marketplace listing client
//!
//! Domain view-model types mirrored from the marketplace REST API,
//! the listing draft payload, and the static per-category
//! specification/feature tables.

pub mod defaults;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use defaults::{default_features, type_defaults};
pub use models::*;

/// Ordered specification mapping (field name -> value).
///
/// Insertion order is display order, both for tables coming from the
/// server and for the tables in [`defaults`].
pub type SpecMap = indexmap::IndexMap<String, String>;
