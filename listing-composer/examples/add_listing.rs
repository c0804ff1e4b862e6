//! End-to-end add-listing flow against a live marketplace API.
//!
//! ```sh
//! MARKET_API_URL=http://localhost:8000/api \
//! MARKET_API_TOKEN=... \
//! cargo run --example add_listing -- front.jpg side.jpg rear.jpg
//! ```

use anyhow::Context;
use catalog_client::CatalogConfig;
use listing_composer::{ComposerSession, Selection};
use shared::models::{Condition, FuelType, ImageFile, ListingType, VehicleCategory};
use shared::type_defaults;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let base_url =
        std::env::var("MARKET_API_URL").unwrap_or_else(|_| "http://localhost:8000/api".into());
    let token = std::env::var("MARKET_API_TOKEN").context("MARKET_API_TOKEN is required")?;

    let catalog = CatalogConfig::new(base_url)
        .with_token(token)
        .build_catalog();
    let session = ComposerSession::new(Arc::new(catalog));

    session.load_initial().await;
    let brands = session.read(|c| c.available_brands().to_vec()).await;
    tracing::info!(count = brands.len(), "brands loaded");

    // Compose a used listing with an inline brand and model.
    session.select_brand(Selection::NewlyNamed("Yamaha".into())).await;
    session.select_model(Selection::NewlyNamed("FZ".into())).await;
    session
        .update(|c| {
            c.set_vehicle_category(Some(VehicleCategory::Bike));
            c.set_listing_type(Some(ListingType::Used));
            c.set_price(Some(95_000.0));
            c.set_fuel_type(Some(FuelType::Petrol));
            c.set_year(Some(2021));
            c.set_km_driven(Some(12_000));
            c.set_condition(Some(Condition::Good));
            let branch_id = c.available_branches().first().map(|b| b.id);
            c.set_branch(branch_id);
            for &(key, value) in type_defaults(VehicleCategory::Bike) {
                if value.is_empty() {
                    c.set_custom_spec(key, "-");
                }
            }
        })
        .await;

    let images: Vec<ImageFile> = std::env::args()
        .skip(1)
        .map(|path| {
            let data = std::fs::read(&path).with_context(|| format!("reading {path}"))?;
            let mime = mime_guess::from_path(&path)
                .first_or_octet_stream()
                .to_string();
            Ok(ImageFile::new(path, mime, data))
        })
        .collect::<anyhow::Result<_>>()?;
    session.update(|c| c.gallery_mut().add_images(images)).await;

    match session.submit().await {
        Ok(created) => tracing::info!(id = created.id, "listing created"),
        Err(err) => tracing::error!(error = %err, "submission failed"),
    }

    session.close();
    Ok(())
}
