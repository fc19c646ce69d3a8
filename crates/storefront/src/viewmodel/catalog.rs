//! Catalog view-model.
//!
//! The product list is refetched wholesale on every products-page visit;
//! staleness is resolved by always refetching, never by cache reuse.

use bramble_core::Product;
use tracing::instrument;

use crate::api::{ApiError, ShopClient};
use crate::snapshot::Snapshot;

/// Refresh the catalog snapshot from the Shop API.
///
/// Returns the products the snapshot holds after the load: normally the
/// freshly fetched list, or a newer list when another load overtook this
/// one while its response was in flight.
///
/// # Errors
///
/// Returns an error if the fetch fails; the snapshot keeps its previous
/// value in that case.
#[instrument(skip(api, catalog))]
pub async fn refresh(
    api: &ShopClient,
    catalog: &Snapshot<Vec<Product>>,
) -> Result<Vec<Product>, ApiError> {
    let token = catalog.begin();
    let products = api.products().await?;

    if !catalog.commit(token, products.clone()) {
        tracing::debug!("catalog load superseded by a newer one, discarding");
    }

    Ok(catalog.get().unwrap_or(products))
}
