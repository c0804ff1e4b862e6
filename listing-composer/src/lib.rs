//! Listing Composer - state machine behind the "Add Vehicle" form
//!
//! Owns the brand → model → variant selection cascade (with an inline
//! "add new" branch at each level), the derived display name, the
//! three-layer specification merge, the image gallery, section
//! validation, and draft construction. [`ComposerSession`] wires the
//! pure state machine to a [`catalog_client::CatalogApi`] with
//! request-generation tagging so stale catalog responses never
//! overwrite newer selections.

pub mod composer;
pub mod error;
pub mod gallery;
pub mod selection;
pub mod session;
pub mod specs;
pub mod validate;

pub use composer::{FetchRequest, ListingComposer};
pub use error::SubmitError;
pub use gallery::{ImageGallery, MAX_IMAGES, MIN_IMAGES};
pub use selection::{Selection, SelectionLevel};
pub use session::ComposerSession;
pub use specs::SpecLayers;
pub use validate::{FieldErrors, FormSection, Section, ValidationReport};
