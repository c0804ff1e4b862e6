//! Three-layer specification merge
//!
//! Layer precedence, lowest to highest: category `defaults`, catalog
//! `inherited` (model base specs, then variant overrides), user
//! `custom`. The effective mapping shown and submitted is the explicit
//! merge of the three; removing a custom key reverts the effective value
//! to the inherited/default one, never to blank.

use shared::models::VehicleCategory;
use shared::{SpecMap, type_defaults};

/// Layered specification state for one form session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecLayers {
    defaults: SpecMap,
    inherited: SpecMap,
    custom: SpecMap,
}

impl SpecLayers {
    /// Reset both defaults and inherited to the category's table
    ///
    /// Used when the vehicle category changes and when the model level
    /// drops back to unselected / "add new". Custom overrides survive.
    pub fn reset_to_defaults(&mut self, category: Option<VehicleCategory>) {
        self.defaults = category.map(defaults_map).unwrap_or_default();
        self.inherited = self.defaults.clone();
    }

    /// Replace the inherited layer from catalog data (model base specs
    /// overlaid by variant overrides)
    pub fn set_inherited(&mut self, base_specs: &SpecMap, overrides: Option<&SpecMap>) {
        let mut inherited = base_specs.clone();
        if let Some(overrides) = overrides {
            for (key, value) in overrides {
                inherited.insert(key.clone(), value.clone());
            }
        }
        self.inherited = inherited;
    }

    /// Write a custom override
    ///
    /// Values equal to the underlying inherited/default value are kept
    /// as overrides rather than canonicalized away.
    pub fn set_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.insert(key.into(), value.into());
    }

    /// Remove a custom override, reverting the effective value
    pub fn remove_custom(&mut self, key: &str) -> bool {
        self.custom.shift_remove(key).is_some()
    }

    /// Add an ad-hoc specification; rejected when key or value is blank
    /// after trimming
    pub fn add_ad_hoc(&mut self, key: &str, value: &str) -> bool {
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            return false;
        }
        self.custom.insert(key.to_string(), value.to_string());
        true
    }

    /// Effective value for one key: custom, then inherited, then default
    pub fn effective_value(&self, key: &str) -> Option<&str> {
        self.custom
            .get(key)
            .or_else(|| self.inherited.get(key))
            .or_else(|| self.defaults.get(key))
            .map(String::as_str)
    }

    /// The full effective mapping, in display order: default keys first,
    /// then extra inherited keys, then extra custom keys
    pub fn effective(&self) -> SpecMap {
        let mut merged = self.defaults.clone();
        for (key, value) in &self.inherited {
            merged.insert(key.clone(), value.clone());
        }
        for (key, value) in &self.custom {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}

fn defaults_map(category: VehicleCategory) -> SpecMap {
    type_defaults(category)
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_reset_seeds_both_layers() {
        let mut layers = SpecLayers::default();
        layers.reset_to_defaults(Some(VehicleCategory::Bike));
        assert_eq!(layers.effective_value("Transmission"), Some("Manual"));
        assert_eq!(layers.effective().len(), type_defaults(VehicleCategory::Bike).len());

        layers.reset_to_defaults(None);
        assert!(layers.effective().is_empty());
    }

    #[test]
    fn custom_wins_and_remove_reverts() {
        let mut layers = SpecLayers::default();
        layers.reset_to_defaults(Some(VehicleCategory::Bike));
        layers.set_custom("Transmission", "Semi-automatic");
        assert_eq!(layers.effective_value("Transmission"), Some("Semi-automatic"));

        assert!(layers.remove_custom("Transmission"));
        assert_eq!(layers.effective_value("Transmission"), Some("Manual"));
        assert!(!layers.remove_custom("Transmission"));
    }

    #[test]
    fn inherited_overlays_defaults_and_variant_overlays_model() {
        let mut layers = SpecLayers::default();
        layers.reset_to_defaults(Some(VehicleCategory::Scooter));

        let base: SpecMap = [("Engine".to_string(), "109.5cc".to_string())].into_iter().collect();
        let overrides: SpecMap = [("Engine".to_string(), "125cc".to_string())]
            .into_iter()
            .collect();
        layers.set_inherited(&base, Some(&overrides));

        assert_eq!(layers.effective_value("Engine"), Some("125cc"));
        // Keys absent from the catalog still resolve through the defaults.
        assert_eq!(layers.effective_value("Transmission"), Some("Automatic"));
    }

    #[test]
    fn ad_hoc_rejects_blank_key_or_value() {
        let mut layers = SpecLayers::default();
        assert!(!layers.add_ad_hoc("  ", "value"));
        assert!(!layers.add_ad_hoc("key", "   "));
        assert!(layers.add_ad_hoc(" Top Box ", " 22L "));
        assert_eq!(layers.effective_value("Top Box"), Some("22L"));
    }
}
