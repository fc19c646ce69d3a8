//! Application state shared across handlers.
//!
//! All tab-wide mutable state of the original design (current catalog,
//! per-user cart) lives here explicitly instead of as ambient globals,
//! so every writer is reachable through one of the accessors below.

use std::sync::Arc;

use bramble_core::Product;

use crate::api::ShopClient;
use crate::config::StorefrontConfig;
use crate::snapshot::{CartRegistry, Snapshot};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the Shop API client and the view-model
/// snapshots.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    api: ShopClient,
    catalog: Snapshot<Vec<Product>>,
    carts: CartRegistry,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let api = ShopClient::new(&config.shop_api_url);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                api,
                catalog: Snapshot::new(),
                carts: CartRegistry::new(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the Shop API client.
    #[must_use]
    pub fn api(&self) -> &ShopClient {
        &self.inner.api
    }

    /// The catalog snapshot, replaced wholesale on every products-page load.
    #[must_use]
    pub fn catalog(&self) -> &Snapshot<Vec<Product>> {
        &self.inner.catalog
    }

    /// Per-user cart snapshots.
    #[must_use]
    pub fn carts(&self) -> &CartRegistry {
        &self.inner.carts
    }
}
