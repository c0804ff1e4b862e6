//! Async session driver
//!
//! Bridges the pure [`ListingComposer`] state machine to a
//! [`CatalogApi`]. The state lock is never held across a network await;
//! overlapping selections are resolved by the composer's generation
//! check, and closing the session cancels any in-flight fetch before it
//! can touch state.

use crate::composer::{FetchRequest, ListingComposer};
use crate::error::SubmitError;
use crate::selection::Selection;
use catalog_client::{CatalogApi, CatalogError};
use shared::models::CreatedListing;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// One live add-listing form session
pub struct ComposerSession {
    state: Mutex<ListingComposer>,
    catalog: Arc<dyn CatalogApi>,
    cancel: CancellationToken,
}

impl ComposerSession {
    pub fn new(catalog: Arc<dyn CatalogApi>) -> Self {
        Self {
            state: Mutex::new(ListingComposer::new()),
            catalog,
            cancel: CancellationToken::new(),
        }
    }

    /// Load the brand and branch lists (called once at form mount)
    pub async fn load_initial(&self) {
        let fetches = futures::future::join(self.catalog.list_brands(), self.catalog.list_branches());
        let (brands, branches) = tokio::select! {
            _ = self.cancel.cancelled() => return,
            results = fetches => results,
        };

        let mut state = self.state.lock().await;
        state.apply_brands(unwrap_or_empty("brands", brands));
        state.apply_branches(unwrap_or_empty("branches", branches));
    }

    /// Change the brand selection, fetching its models when concrete
    pub async fn select_brand(&self, choice: Selection) {
        let fetch = self.state.lock().await.set_brand_choice(choice);
        if let Some(request) = fetch {
            self.run_fetch(request).await;
        }
    }

    /// Change the model selection, fetching its variants when concrete
    pub async fn select_model(&self, choice: Selection) {
        let fetch = self.state.lock().await.set_model_choice(choice);
        if let Some(request) = fetch {
            self.run_fetch(request).await;
        }
    }

    /// Change the variant selection (no fetch; leaf of the cascade)
    pub async fn select_variant(&self, choice: Selection) {
        self.state.lock().await.set_variant_choice(choice);
    }

    /// Apply a synchronous edit to the composer state
    pub async fn update<R>(&self, edit: impl FnOnce(&mut ListingComposer) -> R) -> R {
        edit(&mut *self.state.lock().await)
    }

    /// Read from the composer state
    pub async fn read<R>(&self, read: impl FnOnce(&ListingComposer) -> R) -> R {
        read(&*self.state.lock().await)
    }

    /// Validate, build, and submit the draft
    ///
    /// On failure the draft is left untouched so the user can retry; on
    /// success the session resets to a fresh form.
    pub async fn submit(&self) -> Result<CreatedListing, SubmitError> {
        let (draft, images) = {
            let state = self.state.lock().await;
            let draft = state.build_submission()?;
            (draft, state.gallery().images().to_vec())
        };

        match self.catalog.create_listing(&draft, &images).await {
            Ok(created) => {
                tracing::info!(id = created.id, name = %draft.name, "listing created");
                *self.state.lock().await = ListingComposer::new();
                Ok(created)
            }
            Err(err) => {
                tracing::warn!(error = %err, "listing submission failed, draft preserved");
                Err(err.into())
            }
        }
    }

    /// Abandon any in-flight fetch; called when the form unmounts
    pub fn close(&self) {
        self.cancel.cancel();
    }

    async fn run_fetch(&self, request: FetchRequest) {
        match request {
            FetchRequest::Models {
                brand_id,
                generation,
            } => {
                let models = tokio::select! {
                    _ = self.cancel.cancelled() => return,
                    result = self.catalog.list_models(brand_id) => {
                        unwrap_or_empty("models", result)
                    }
                };
                if !self.state.lock().await.apply_models(generation, models) {
                    tracing::debug!(generation, "discarded stale model list");
                }
            }
            FetchRequest::Variants {
                model_id,
                generation,
            } => {
                let variants = tokio::select! {
                    _ = self.cancel.cancelled() => return,
                    result = self.catalog.list_variants(model_id) => {
                        unwrap_or_empty("variants", result)
                    }
                };
                if !self.state.lock().await.apply_variants(generation, variants) {
                    tracing::debug!(generation, "discarded stale variant list");
                }
            }
        }
    }
}

/// Degrade a failed catalog fetch to an empty option list
fn unwrap_or_empty<T>(what: &str, result: Result<Vec<T>, CatalogError>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(error = %err, what, "catalog fetch failed, using empty list");
            Vec::new()
        }
    }
}
