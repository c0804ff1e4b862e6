//! Catalog API surface
//!
//! The [`CatalogApi`] trait is the seam between the listing composer and
//! the network; tests drive the composer with a mock implementation.

use crate::{CatalogResult, HttpClient};
use async_trait::async_trait;
use shared::models::{Branch, Brand, CreatedListing, ImageFile, ListingDraft, Variant, VehicleModel};

/// Remote catalog operations used by the listing form
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// List all brands
    async fn list_brands(&self) -> CatalogResult<Vec<Brand>>;

    /// List models belonging to a brand
    async fn list_models(&self, brand_id: i64) -> CatalogResult<Vec<VehicleModel>>;

    /// List variants belonging to a model
    async fn list_variants(&self, model_id: i64) -> CatalogResult<Vec<Variant>>;

    /// List the dealer's branches
    async fn list_branches(&self) -> CatalogResult<Vec<Branch>>;

    /// Create a listing from a draft plus its image files
    async fn create_listing(
        &self,
        draft: &ListingDraft,
        images: &[ImageFile],
    ) -> CatalogResult<CreatedListing>;
}

/// Network-backed catalog client
#[derive(Debug, Clone)]
pub struct NetworkCatalog {
    http: HttpClient,
}

impl NetworkCatalog {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CatalogApi for NetworkCatalog {
    async fn list_brands(&self) -> CatalogResult<Vec<Brand>> {
        self.http.get("brands/").await
    }

    async fn list_models(&self, brand_id: i64) -> CatalogResult<Vec<VehicleModel>> {
        self.http
            .get_with_query("models/", &[("brand", brand_id)])
            .await
    }

    async fn list_variants(&self, model_id: i64) -> CatalogResult<Vec<Variant>> {
        self.http
            .get_with_query("variants/", &[("model", model_id)])
            .await
    }

    async fn list_branches(&self) -> CatalogResult<Vec<Branch>> {
        self.http.get("dealer/branches").await
    }

    async fn create_listing(
        &self,
        draft: &ListingDraft,
        images: &[ImageFile],
    ) -> CatalogResult<CreatedListing> {
        // The server expects a multipart form: one `data` part with the
        // JSON draft and repeated `images` parts with the raw files.
        let mut form =
            reqwest::multipart::Form::new().text("data", serde_json::to_string(draft)?);

        for image in images {
            let part = reqwest::multipart::Part::bytes(image.data.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.mime_type)
                .map_err(crate::CatalogError::Http)?;
            form = form.part("images", part);
        }

        tracing::info!(name = %draft.name, images = images.len(), "submitting listing");
        self.http.post_multipart("vehicles/", form).await
    }
}
