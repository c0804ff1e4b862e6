//! Section validation
//!
//! All validation is local, synchronous, and pure: it returns field ->
//! message mappings and never raises. Specification checks are keyed by
//! the same display keys the form renders.

use crate::composer::ListingComposer;
use indexmap::IndexMap;
use shared::models::ListingType;
use shared::type_defaults;

/// Field name -> human-readable message, in evaluation order
pub type FieldErrors = IndexMap<String, String>;

/// The three tabbed form sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Details,
    Specifications,
    Settings,
}

/// Everything `validate_all` can point at, including the tab-independent
/// image check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSection {
    Images,
    Details,
    Specifications,
    Settings,
}

impl From<Section> for FormSection {
    fn from(section: Section) -> Self {
        match section {
            Section::Details => FormSection::Details,
            Section::Specifications => FormSection::Specifications,
            Section::Settings => FormSection::Settings,
        }
    }
}

/// First failing section and its errors
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// Section the form should activate
    pub section: FormSection,
    pub errors: FieldErrors,
}

impl ListingComposer {
    /// Validate one tabbed section
    pub fn validate_section(&self, section: Section) -> FieldErrors {
        match section {
            Section::Details => self.validate_details(),
            Section::Specifications => self.validate_specifications(),
            Section::Settings => self.validate_settings(),
        }
    }

    /// Validate the image requirement (checked separately from the tabs)
    pub fn validate_images(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !self.gallery.has_minimum() {
            errors.insert(
                "images".into(),
                "At least 3 images are required".into(),
            );
        }
        errors
    }

    /// Run every check in fixed order - images, details, specifications,
    /// settings - stopping at the first section with any error
    ///
    /// The image check runs first because it is independent of tab
    /// navigation.
    pub fn validate_all(&self) -> Result<(), ValidationReport> {
        let images = self.validate_images();
        if !images.is_empty() {
            return Err(ValidationReport {
                section: FormSection::Images,
                errors: images,
            });
        }

        for section in [Section::Details, Section::Specifications, Section::Settings] {
            let errors = self.validate_section(section);
            if !errors.is_empty() {
                return Err(ValidationReport {
                    section: section.into(),
                    errors,
                });
            }
        }

        Ok(())
    }

    fn validate_details(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.brand.is_unselected() {
            errors.insert("brand".into(), "Brand is required".into());
        }
        if self.brand.is_add_new() && self.brand.new_name().is_none() {
            errors.insert("new_brand_name".into(), "Brand name is required".into());
        }
        if self.model.is_unselected() {
            errors.insert("model".into(), "Model is required".into());
        }
        if self.model.is_add_new() && self.model.new_name().is_none() {
            errors.insert("new_model_name".into(), "Model name is required".into());
        }
        // Variant itself is optional; only an empty inline name fails.
        if self.variant.is_add_new() && self.variant.new_name().is_none() {
            errors.insert("new_variant_name".into(), "Variant name is required".into());
        }
        if self.price.is_none() {
            errors.insert("price".into(), "Price is required".into());
        }
        if self.fuel_type.is_none() {
            errors.insert("fuel_type".into(), "Fuel type is required".into());
        }
        if self.listing_type.is_none() {
            errors.insert("listing_type".into(), "Listing type is required".into());
        }
        if self.category.is_none() {
            errors.insert("category".into(), "Vehicle category is required".into());
        }

        if self.listing_type == Some(ListingType::Used) {
            if self.year.is_none() {
                errors.insert("year".into(), "Year is required for used vehicles".into());
            }
            if self.km_driven.is_none() {
                errors.insert(
                    "km_driven".into(),
                    "Kilometers driven is required for used vehicles".into(),
                );
            }
            if self.condition.is_none() {
                errors.insert(
                    "condition".into(),
                    "Condition is required for used vehicles".into(),
                );
            }
        }

        errors
    }

    fn validate_specifications(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let Some(category) = self.category else {
            // No category means no required spec keys; the details
            // section reports the missing category.
            return errors;
        };

        for &(key, _) in type_defaults(category) {
            let filled = self
                .specs
                .effective_value(key)
                .is_some_and(|value| !value.trim().is_empty());
            if !filled {
                errors.insert(format!("spec_{key}"), format!("{key} is required"));
            }
        }

        errors
    }

    fn validate_settings(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.status.is_none() {
            errors.insert("status".into(), "Status is required".into());
        }
        if self.branch.is_none() {
            errors.insert("branch".into(), "Branch is required".into());
        }
        errors
    }
}
