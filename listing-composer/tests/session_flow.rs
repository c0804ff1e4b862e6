//! Session driver tests against a mock catalog: slow-response races,
//! unmount cancellation, fetch degradation, and submission retry.

use async_trait::async_trait;
use catalog_client::{CatalogApi, CatalogError, CatalogResult};
use listing_composer::{ComposerSession, Selection};
use shared::models::{
    Branch, Brand, Condition, CreatedListing, FuelType, ImageFile, ListingDraft, ListingType,
    Variant, VehicleCategory, VehicleModel,
};
use shared::type_defaults;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Default)]
struct MockCatalog {
    brands: Vec<Brand>,
    branches: Vec<Branch>,
    models: HashMap<i64, Vec<VehicleModel>>,
    variants: HashMap<i64, Vec<Variant>>,
    /// Per-brand artificial latency for the models endpoint
    model_delays: HashMap<i64, Duration>,
    /// Brands whose models endpoint fails
    failing_brands: Vec<i64>,
    reject_submission: AtomicBool,
    submissions: Mutex<Vec<ListingDraft>>,
}

#[async_trait]
impl CatalogApi for MockCatalog {
    async fn list_brands(&self) -> CatalogResult<Vec<Brand>> {
        Ok(self.brands.clone())
    }

    async fn list_models(&self, brand_id: i64) -> CatalogResult<Vec<VehicleModel>> {
        if let Some(delay) = self.model_delays.get(&brand_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_brands.contains(&brand_id) {
            return Err(CatalogError::Internal("boom".into()));
        }
        Ok(self.models.get(&brand_id).cloned().unwrap_or_default())
    }

    async fn list_variants(&self, model_id: i64) -> CatalogResult<Vec<Variant>> {
        Ok(self.variants.get(&model_id).cloned().unwrap_or_default())
    }

    async fn list_branches(&self) -> CatalogResult<Vec<Branch>> {
        Ok(self.branches.clone())
    }

    async fn create_listing(
        &self,
        draft: &ListingDraft,
        _images: &[ImageFile],
    ) -> CatalogResult<CreatedListing> {
        if self.reject_submission.load(Ordering::SeqCst) {
            return Err(CatalogError::Validation("price out of range".into()));
        }
        self.submissions.lock().await.push(draft.clone());
        Ok(CreatedListing {
            id: 42,
            name: draft.name.clone(),
        })
    }
}

fn brand(id: i64, name: &str) -> Brand {
    Brand {
        id,
        name: name.into(),
    }
}

fn model(id: i64, name: &str) -> VehicleModel {
    VehicleModel {
        id,
        name: name.into(),
        base_specs: Default::default(),
    }
}

fn branch(id: i64, name: &str, city: &str) -> Branch {
    Branch {
        id,
        name: name.into(),
        address: String::new(),
        city: city.into(),
        state: String::new(),
        zipcode: String::new(),
        contact_number: None,
    }
}

fn image(name: &str) -> ImageFile {
    ImageFile::new(name, "image/jpeg", vec![0u8; 4])
}

#[tokio::test]
async fn initial_load_populates_brands_and_branches() {
    let catalog = Arc::new(MockCatalog {
        brands: vec![brand(1, "Honda")],
        branches: vec![branch(4, "Central", "Pune")],
        ..Default::default()
    });
    let session = ComposerSession::new(catalog);

    session.load_initial().await;
    let (brands, branches) = session
        .read(|c| (c.available_brands().len(), c.available_branches().len()))
        .await;
    assert_eq!((brands, branches), (1, 1));
}

#[tokio::test(start_paused = true)]
async fn slow_stale_response_never_overwrites_newer_selection() {
    let catalog = Arc::new(MockCatalog {
        brands: vec![brand(1, "Honda"), brand(2, "Bajaj")],
        models: HashMap::from([
            (1, vec![model(10, "Activa")]),
            (2, vec![model(20, "Pulsar")]),
        ]),
        model_delays: HashMap::from([
            (1, Duration::from_millis(500)),
            (2, Duration::from_millis(10)),
        ]),
        ..Default::default()
    });
    let session = Arc::new(ComposerSession::new(catalog));
    session.load_initial().await;

    // First selection starts a slow fetch...
    let slow = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.select_brand(Selection::Existing(1)).await })
    };
    tokio::task::yield_now().await;

    // ...then the user changes their mind before it lands.
    session.select_brand(Selection::Existing(2)).await;
    slow.await.unwrap();

    let names: Vec<String> = session
        .read(|c| c.available_models().iter().map(|m| m.name.clone()).collect())
        .await;
    assert_eq!(names, ["Pulsar"]);
}

#[tokio::test]
async fn failed_model_fetch_degrades_to_empty_list() {
    let catalog = Arc::new(MockCatalog {
        brands: vec![brand(1, "Honda")],
        failing_brands: vec![1],
        ..Default::default()
    });
    let session = ComposerSession::new(catalog);
    session.load_initial().await;

    session.select_brand(Selection::Existing(1)).await;
    assert!(session.read(|c| c.available_models().is_empty()).await);
    // The selection itself survives the failed fetch.
    assert_eq!(
        session.read(|c| c.brand_choice().clone()).await,
        Selection::Existing(1)
    );
}

#[tokio::test(start_paused = true)]
async fn closing_the_session_abandons_in_flight_fetches() {
    let catalog = Arc::new(MockCatalog {
        brands: vec![brand(1, "Honda")],
        models: HashMap::from([(1, vec![model(10, "Activa")])]),
        model_delays: HashMap::from([(1, Duration::from_secs(5))]),
        ..Default::default()
    });
    let session = Arc::new(ComposerSession::new(catalog));
    session.load_initial().await;

    let pending = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.select_brand(Selection::Existing(1)).await })
    };
    tokio::task::yield_now().await;

    session.close();
    pending.await.unwrap();
    assert!(session.read(|c| c.available_models().is_empty()).await);
}

async fn fill_valid_used_draft(session: &ComposerSession) {
    session.select_brand(Selection::NewlyNamed("Yamaha".into())).await;
    session.select_model(Selection::NewlyNamed("FZ".into())).await;
    session
        .update(|c| {
            c.set_vehicle_category(Some(VehicleCategory::Bike));
            c.set_listing_type(Some(ListingType::Used));
            c.set_price(Some(95000.0));
            c.set_fuel_type(Some(FuelType::Petrol));
            c.set_year(Some(2021));
            c.set_km_driven(Some(12000));
            c.set_condition(Some(Condition::Good));
            c.set_branch(Some(4));
            c.gallery_mut()
                .add_images((0..3).map(|i| image(&format!("img{i}.jpg"))));
            for (key, value) in type_defaults(VehicleCategory::Bike) {
                if value.is_empty() {
                    c.set_custom_spec(*key, "filled");
                }
            }
        })
        .await;
}

#[tokio::test]
async fn failed_submission_preserves_the_draft_for_retry() {
    let catalog = Arc::new(MockCatalog {
        reject_submission: AtomicBool::new(true),
        ..Default::default()
    });
    let session = ComposerSession::new(catalog.clone());
    fill_valid_used_draft(&session).await;

    let err = session.submit().await.unwrap_err();
    assert!(matches!(
        err,
        listing_composer::SubmitError::Catalog(CatalogError::Validation(_))
    ));
    // Nothing was lost; the same draft submits fine once the server accepts.
    assert_eq!(session.read(|c| c.display_name().to_string()).await, "Yamaha FZ");

    catalog.reject_submission.store(false, Ordering::SeqCst);
    let created = session.submit().await.unwrap();
    assert_eq!(created.id, 42);
    assert_eq!(created.name, "Yamaha FZ");

    // A successful submit starts a fresh session.
    assert_eq!(session.read(|c| c.display_name().to_string()).await, "");

    let submissions = catalog.submissions.lock().await;
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].model_name, "FZ");
    assert_eq!(submissions[0].year, Some(2021));
    assert_eq!(submissions[0].branch, None);
}

#[tokio::test]
async fn invalid_draft_is_rejected_before_any_network_call() {
    let catalog = Arc::new(MockCatalog::default());
    let session = ComposerSession::new(catalog.clone());

    let err = session.submit().await.unwrap_err();
    let listing_composer::SubmitError::Invalid(report) = err else {
        panic!("expected a validation failure");
    };
    assert_eq!(report.section, listing_composer::FormSection::Images);
    assert!(catalog.submissions.lock().await.is_empty());
}
