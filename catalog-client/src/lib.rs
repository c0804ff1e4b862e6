//! Catalog Client - HTTP client for the marketplace REST API
//!
//! Provides bearer-authenticated network calls for the vehicle catalog
//! (brands, models, variants, branches) and listing creation.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::{CatalogApi, NetworkCatalog};
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{Branch, Brand, CreatedListing, ImageFile, ListingDraft, Variant, VehicleModel};
