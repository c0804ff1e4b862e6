//! Vehicle Model (brand-scoped model entity)

use crate::SpecMap;
use serde::{Deserialize, Serialize};

/// A model within a brand's catalog
///
/// `base_specs` is the specification table every variant of this model
/// inherits from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleModel {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub base_specs: SpecMap,
}
