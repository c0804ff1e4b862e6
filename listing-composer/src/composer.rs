//! The listing composer state machine
//!
//! Single-writer state behind the add/edit listing form. Selection
//! transitions are explicit edges: changing a level clears everything
//! downstream of it in the same call, so no stale option list or
//! leftover inline name can survive a reselection.
//!
//! Catalog fetches are not performed here. A transition that needs one
//! returns a [`FetchRequest`] tagged with a generation number; the
//! driver executes it and feeds the result back through `apply_models` /
//! `apply_variants`, which discard anything whose generation no longer
//! matches the current selection.

use crate::gallery::ImageGallery;
use crate::selection::{Selection, SelectionLevel};
use crate::specs::SpecLayers;
use crate::validate::ValidationReport;
use shared::models::{
    Branch, Brand, CatalogRef, Condition, DiscountType, FuelType, ListingDraft, ListingStatus,
    ListingType, Variant, VehicleCategory, VehicleModel,
};
use shared::{SpecMap, default_features};

/// A catalog fetch the driver should run on the composer's behalf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRequest {
    /// Models for the selected brand
    Models { brand_id: i64, generation: u64 },
    /// Variants for the selected model
    Variants { model_id: i64, generation: u64 },
}

/// State behind one add-listing form session
#[derive(Debug, Clone, Default)]
pub struct ListingComposer {
    pub(crate) category: Option<VehicleCategory>,
    pub(crate) listing_type: Option<ListingType>,

    pub(crate) brand: Selection,
    pub(crate) model: Selection,
    pub(crate) variant: Selection,

    available_brands: Vec<Brand>,
    available_models: Vec<VehicleModel>,
    available_variants: Vec<Variant>,
    available_branches: Vec<Branch>,

    // Fetch generations; bumped on every transition that invalidates the
    // corresponding option list.
    model_generation: u64,
    variant_generation: u64,

    pub(crate) specs: SpecLayers,
    features: Vec<String>,
    pub(crate) gallery: ImageGallery,

    pub(crate) price: Option<f64>,
    pub(crate) fuel_type: Option<FuelType>,
    pub(crate) status: Option<ListingStatus>,
    pub(crate) branch: Option<i64>,
    featured: bool,

    discount_type: Option<DiscountType>,
    discount_value: Option<f64>,
    discount_description: Option<String>,

    // -- Used-listing fields --
    pub(crate) year: Option<i32>,
    pub(crate) km_driven: Option<i32>,
    pub(crate) condition: Option<Condition>,
    exchange_offer: bool,
    loan_option: bool,
    approved: bool,

    /// Derived display name; never user-editable
    name: String,
}

impl ListingComposer {
    /// Fresh form session
    pub fn new() -> Self {
        Self {
            status: Some(ListingStatus::Available),
            ..Self::default()
        }
    }

    // ========== Category and cascade transitions ==========

    /// Set or clear the vehicle category
    ///
    /// Resets the inherited specification layer to the category defaults
    /// (or empty) and the feature list to the category's default feature
    /// set. Custom spec overrides survive.
    pub fn set_vehicle_category(&mut self, category: Option<VehicleCategory>) {
        self.category = category;
        self.specs.reset_to_defaults(category);
        self.features = category
            .map(|c| default_features(c).iter().map(|f| f.to_string()).collect())
            .unwrap_or_default();
    }

    /// Change the brand selection
    ///
    /// Any brand change invalidates the whole downstream cascade: the
    /// model and variant selections, their option lists, and any
    /// in-flight fetch for them. A concrete brand yields a model fetch.
    pub fn set_brand_choice(&mut self, choice: Selection) -> Option<FetchRequest> {
        self.brand = choice;
        self.clear_model_level();
        self.recompute_name();

        self.brand.existing_id().map(|brand_id| FetchRequest::Models {
            brand_id,
            generation: self.model_generation,
        })
    }

    /// Change the model selection
    ///
    /// A concrete model requires a concrete brand; the transition is
    /// otherwise ignored. Selecting "add new" seeds the inherited specs
    /// from the category defaults rather than from any model.
    pub fn set_model_choice(&mut self, choice: Selection) -> Option<FetchRequest> {
        if choice.existing_id().is_some() && self.brand.existing_id().is_none() {
            return None;
        }

        self.model = choice;
        self.clear_variant_level();

        match self.model.existing_id() {
            Some(model_id) => {
                self.inherit_from_model();
                self.recompute_name();
                Some(FetchRequest::Variants {
                    model_id,
                    generation: self.variant_generation,
                })
            }
            None => {
                self.specs.reset_to_defaults(self.category);
                self.recompute_name();
                None
            }
        }
    }

    /// Change the variant selection (leaf of the cascade)
    ///
    /// A concrete variant merges the model's base specs and the
    /// variant's overrides into the inherited layer; "add new" and empty
    /// leave it at the model-derived (or type-default) value.
    pub fn set_variant_choice(&mut self, choice: Selection) {
        // Variant needs a model underneath it, and a concrete variant
        // needs a concrete model.
        if self.model.is_unselected() && !choice.is_unselected() {
            return;
        }
        if choice.existing_id().is_some() && self.model.existing_id().is_none() {
            return;
        }

        self.variant = choice;

        match self
            .variant
            .existing_id()
            .and_then(|id| self.available_variants.iter().find(|v| v.id == id))
        {
            Some(variant) => {
                let base = variant.vehicle_model.base_specs.clone();
                let overrides = variant.specs.clone();
                self.specs.set_inherited(&base, Some(&overrides));
            }
            None => self.inherit_from_model(),
        }

        self.recompute_name();
    }

    /// Update the inline name of a level whose "add new" branch is active
    ///
    /// No-op for any other selection state.
    pub fn set_free_text_name(&mut self, level: SelectionLevel, text: impl Into<String>) {
        let slot = match level {
            SelectionLevel::Brand => &mut self.brand,
            SelectionLevel::Model => &mut self.model,
            SelectionLevel::Variant => &mut self.variant,
        };
        if let Selection::NewlyNamed(name) = slot {
            *name = text.into();
            self.recompute_name();
        }
    }

    /// Clear everything downstream of the brand level
    fn clear_model_level(&mut self) {
        self.model = Selection::Unselected;
        self.available_models.clear();
        self.model_generation += 1;
        self.clear_variant_level();
        self.specs.reset_to_defaults(self.category);
    }

    /// Clear everything downstream of the model level
    fn clear_variant_level(&mut self) {
        self.variant = Selection::Unselected;
        self.available_variants.clear();
        self.variant_generation += 1;
    }

    /// Seed the inherited layer from the selected model's base specs,
    /// falling back to the category defaults
    fn inherit_from_model(&mut self) {
        let base = self
            .model
            .existing_id()
            .and_then(|id| self.available_models.iter().find(|m| m.id == id))
            .map(|m| m.base_specs.clone());
        match base {
            Some(base) => self.specs.set_inherited(&base, None),
            None => self.specs.reset_to_defaults(self.category),
        }
    }

    // ========== Fetch results ==========

    /// Install the brand list (fetched once at form mount)
    pub fn apply_brands(&mut self, brands: Vec<Brand>) {
        self.available_brands = brands;
        self.recompute_name();
    }

    /// Install the branch list (fetched once at form mount)
    pub fn apply_branches(&mut self, branches: Vec<Branch>) {
        self.available_branches = branches;
    }

    /// Install a model list, unless the selection moved on
    ///
    /// Returns whether the response was applied.
    pub fn apply_models(&mut self, generation: u64, models: Vec<VehicleModel>) -> bool {
        if generation != self.model_generation {
            return false;
        }
        self.available_models = models;
        true
    }

    /// Install a variant list, unless the selection moved on
    pub fn apply_variants(&mut self, generation: u64, variants: Vec<Variant>) -> bool {
        if generation != self.variant_generation {
            return false;
        }
        self.available_variants = variants;
        true
    }

    // ========== Specifications and features ==========

    /// Override or add a specification value
    pub fn set_custom_spec(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.specs.set_custom(key, value);
    }

    /// Remove an override, reverting to the inherited/default value
    pub fn remove_custom_spec(&mut self, key: &str) -> bool {
        self.specs.remove_custom(key)
    }

    /// Add an ad-hoc spec; rejected when key or value is blank
    pub fn add_ad_hoc_spec(&mut self, key: &str, value: &str) -> bool {
        self.specs.add_ad_hoc(key, value)
    }

    /// The effective specification set (defaults, inherited, custom)
    pub fn effective_specs(&self) -> SpecMap {
        self.specs.effective()
    }

    /// Add a feature; trimmed, non-empty, duplicates ignored
    pub fn add_feature(&mut self, feature: &str) -> bool {
        let feature = feature.trim();
        if feature.is_empty() || self.features.iter().any(|f| f == feature) {
            return false;
        }
        self.features.push(feature.to_string());
        true
    }

    /// Remove a feature by position
    pub fn remove_feature(&mut self, index: usize) {
        if index < self.features.len() {
            self.features.remove(index);
        }
    }

    // ========== Images ==========

    pub fn gallery(&self) -> &ImageGallery {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut ImageGallery {
        &mut self.gallery
    }

    // ========== Scalar fields ==========

    pub fn set_listing_type(&mut self, listing_type: Option<ListingType>) {
        self.listing_type = listing_type;
    }

    pub fn set_price(&mut self, price: Option<f64>) {
        self.price = price;
    }

    pub fn set_fuel_type(&mut self, fuel_type: Option<FuelType>) {
        self.fuel_type = fuel_type;
    }

    pub fn set_status(&mut self, status: Option<ListingStatus>) {
        self.status = status;
    }

    pub fn set_branch(&mut self, branch: Option<i64>) {
        self.branch = branch;
    }

    pub fn set_featured(&mut self, featured: bool) {
        self.featured = featured;
    }

    /// Set or clear the discount offer
    ///
    /// The value and description only reach the submission payload while
    /// a discount type is set; without one they are submitted as null.
    pub fn set_discount(
        &mut self,
        discount_type: Option<DiscountType>,
        value: Option<f64>,
        description: Option<String>,
    ) {
        self.discount_type = discount_type;
        self.discount_value = value;
        self.discount_description = description;
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        self.year = year;
    }

    pub fn set_km_driven(&mut self, km_driven: Option<i32>) {
        self.km_driven = km_driven;
    }

    pub fn set_condition(&mut self, condition: Option<Condition>) {
        self.condition = condition;
    }

    pub fn set_used_flags(&mut self, exchange_offer: bool, loan_option: bool, approved: bool) {
        self.exchange_offer = exchange_offer;
        self.loan_option = loan_option;
        self.approved = approved;
    }

    // ========== Derived name ==========

    /// The derived display name; recomputed synchronously on every
    /// selection change
    pub fn display_name(&self) -> &str {
        &self.name
    }

    fn recompute_name(&mut self) {
        let parts: Vec<&str> = [
            resolve_part(&self.brand, self.available_brands.iter().map(|b| (b.id, b.name.as_str()))),
            resolve_part(&self.model, self.available_models.iter().map(|m| (m.id, m.name.as_str()))),
            resolve_part(
                &self.variant,
                self.available_variants.iter().map(|v| (v.id, v.name.as_str())),
            ),
        ]
        .into_iter()
        .flatten()
        .collect();

        // Two resolved parts join with a space; the variant part joins
        // with " | ".
        self.name = match parts.as_slice() {
            [first, second, third] => format!("{first} {second} | {third}"),
            _ => parts.join(" "),
        };
    }

    // ========== Accessors ==========

    pub fn category(&self) -> Option<VehicleCategory> {
        self.category
    }

    pub fn listing_type(&self) -> Option<ListingType> {
        self.listing_type
    }

    pub fn brand_choice(&self) -> &Selection {
        &self.brand
    }

    pub fn model_choice(&self) -> &Selection {
        &self.model
    }

    pub fn variant_choice(&self) -> &Selection {
        &self.variant
    }

    pub fn available_brands(&self) -> &[Brand] {
        &self.available_brands
    }

    pub fn available_models(&self) -> &[VehicleModel] {
        &self.available_models
    }

    pub fn available_variants(&self) -> &[Variant] {
        &self.available_variants
    }

    pub fn available_branches(&self) -> &[Branch] {
        &self.available_branches
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    // ========== Submission ==========

    /// Build the submission payload; requires the full validation pass
    pub fn build_submission(&self) -> Result<ListingDraft, ValidationReport> {
        self.validate_all()?;

        // validate_all guarantees these; the fallback re-reports the
        // details section rather than panicking.
        let (Some(category), Some(listing_type), Some(fuel_type), Some(price)) =
            (self.category, self.listing_type, self.fuel_type, self.price)
        else {
            return Err(ValidationReport {
                section: crate::validate::FormSection::Details,
                errors: self.validate_section(crate::validate::Section::Details),
            });
        };

        let brand = match &self.brand {
            Selection::Existing(id) => CatalogRef::Existing(*id),
            Selection::NewlyNamed(name) => CatalogRef::New {
                name: name.trim().to_string(),
            },
            Selection::Unselected => {
                return Err(ValidationReport {
                    section: crate::validate::FormSection::Details,
                    errors: self.validate_section(crate::validate::Section::Details),
                });
            }
        };

        let (model, model_name) = match &self.model {
            Selection::Existing(id) => (Some(*id), String::new()),
            Selection::NewlyNamed(name) => (None, name.trim().to_string()),
            Selection::Unselected => (None, String::new()),
        };

        let variant = match &self.variant {
            Selection::Existing(id) => Some(CatalogRef::Existing(*id)),
            Selection::NewlyNamed(name) => Some(CatalogRef::New {
                name: name.trim().to_string(),
            }),
            Selection::Unselected => None,
        };

        let used = listing_type == ListingType::Used;

        Ok(ListingDraft {
            name: self.name.clone(),
            category,
            listing_type,
            brand,
            model,
            model_name,
            variant,
            price,
            fuel_type,
            status: self.status.unwrap_or_default(),
            // Used listings attach to the seller, not a branch.
            branch: if used { None } else { self.branch },
            is_featured: self.featured,
            specs: self.effective_specs(),
            features: self.features.clone(),
            discount_type: self.discount_type,
            discount_value: self.discount_type.and(self.discount_value),
            discount_description: self
                .discount_type
                .and(self.discount_description.clone()),
            year: if used { self.year } else { None },
            km_driven: if used { self.km_driven } else { None },
            condition: if used { self.condition } else { None },
            exchange_offer: used && self.exchange_offer,
            loan_option: used && self.loan_option,
            approved: used && self.approved,
        })
    }
}

/// Resolve one name part: the entity name for a concrete selection, the
/// trimmed inline name for "add new", nothing otherwise
fn resolve_part<'a>(
    selection: &'a Selection,
    mut lookup: impl Iterator<Item = (i64, &'a str)>,
) -> Option<&'a str> {
    match selection {
        Selection::Unselected => None,
        Selection::Existing(id) => lookup.find(|(candidate, _)| candidate == id).map(|(_, n)| n),
        Selection::NewlyNamed(_) => selection.new_name(),
    }
}
