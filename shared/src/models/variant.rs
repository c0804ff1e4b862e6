//! Variant Model

use crate::SpecMap;
use serde::{Deserialize, Serialize};

/// A variant within a model's catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: i64,
    pub name: String,
    /// Variant-specific overrides on top of the model's base specs
    #[serde(default)]
    pub specs: SpecMap,
    /// Parent model summary as embedded by the variants endpoint
    #[serde(default)]
    pub vehicle_model: VariantModelInfo,
}

/// Embedded parent-model payload on a variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantModelInfo {
    #[serde(default)]
    pub base_specs: SpecMap,
}
