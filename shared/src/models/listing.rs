//! Listing draft payload and its enumerations
//!
//! Wire casing follows the marketplace API: SCREAMING_SNAKE_CASE for
//! category/listing type/fuel/status, capitalized words for condition,
//! lowercase for discount type.

use crate::SpecMap;
use serde::{Deserialize, Serialize};

/// Vehicle category (drives the default specification table)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleCategory {
    Bike,
    Scooter,
    Ev,
}

/// Listing type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingType {
    New,
    Used,
}

/// Fuel type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FuelType {
    Petrol,
    Electric,
    Hybrid,
}

/// Listing status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    #[default]
    Available,
    Sold,
    Hold,
}

/// Condition of a used vehicle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Discount type for a listing offer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
    Cashback,
}

/// Reference to a catalog entity: an existing server id, or an inline
/// definition of a brand-new one
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CatalogRef {
    Existing(i64),
    New { name: String },
}

/// The full listing submission payload
///
/// Created fresh per form session; USED-only fields are null for NEW
/// listings and `branch` is null for USED listings (the server attaches
/// used listings to the seller, not a branch).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingDraft {
    /// Derived display name ("{brand} {model}" or "{brand} {model} | {variant}")
    pub name: String,
    pub category: VehicleCategory,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    pub brand: CatalogRef,
    /// Concrete model id when one was selected
    pub model: Option<i64>,
    /// Inline model name when the model is newly defined, empty otherwise
    pub model_name: String,
    /// Concrete or inline variant; variant is the only optional level
    pub variant: Option<CatalogRef>,
    pub price: f64,
    pub fuel_type: FuelType,
    pub status: ListingStatus,
    pub branch: Option<i64>,
    pub is_featured: bool,
    /// Effective specification set (inherited overlaid by custom)
    pub specs: SpecMap,
    #[serde(default)]
    pub features: Vec<String>,
    pub discount_type: Option<DiscountType>,
    pub discount_value: Option<f64>,
    pub discount_description: Option<String>,
    // -- Used-listing fields --
    pub year: Option<i32>,
    pub km_driven: Option<i32>,
    pub condition: Option<Condition>,
    pub exchange_offer: bool,
    pub loan_option: bool,
    pub approved: bool,
}

/// Server acknowledgement for a created listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedListing {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_wire_casing() {
        assert_eq!(
            serde_json::to_string(&VehicleCategory::Scooter).unwrap(),
            "\"SCOOTER\""
        );
        assert_eq!(serde_json::to_string(&ListingType::Used).unwrap(), "\"USED\"");
        assert_eq!(serde_json::to_string(&FuelType::Petrol).unwrap(), "\"PETROL\"");
        assert_eq!(
            serde_json::to_string(&ListingStatus::Available).unwrap(),
            "\"AVAILABLE\""
        );
        assert_eq!(serde_json::to_string(&Condition::Good).unwrap(), "\"Good\"");
        assert_eq!(
            serde_json::to_string(&DiscountType::Cashback).unwrap(),
            "\"cashback\""
        );
    }

    #[test]
    fn catalog_ref_untagged() {
        assert_eq!(serde_json::to_string(&CatalogRef::Existing(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&CatalogRef::New {
                name: "Yamaha".into()
            })
            .unwrap(),
            "{\"name\":\"Yamaha\"}"
        );
    }
}
