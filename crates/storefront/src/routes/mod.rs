//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /products               - Product listing (always refetched)
//!
//! # Cart (requires login, HTMX fragments for mutations)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (returns status fragment, triggers cart-updated)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout (requires login)
//! GET  /checkout               - Checkout form
//! POST /checkout               - Place order
//!
//! # Orders (requires login)
//! GET  /orders                 - Order history
//!
//! # Auth
//! GET  /login                  - Login page
//! POST /login                  - Login action
//! GET  /register               - Register page
//! POST /register               - Register action
//! POST /logout                 - Logout action
//! ```

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod home;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;

use crate::models::{CurrentUser, Flash, Page};
use crate::state::AppState;

/// Query parameters for flash-notice codes.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Data every page hands to the shell template: navigation state, the
/// logged-in user (or guest), the cart badge count, and a transient
/// notice.
#[derive(Debug, Clone)]
pub struct Shell {
    pub current_path: String,
    pub user: Option<CurrentUser>,
    pub cart_count: u32,
    pub admin_url: Option<String>,
    pub flash: Option<Flash>,
}

impl Shell {
    /// Assemble the shell for a page.
    ///
    /// The badge count comes from the cart snapshot; pages that need a
    /// fresh count (the cart page itself) load the cart first.
    #[must_use]
    pub fn build(
        state: &AppState,
        page: Page,
        user: Option<CurrentUser>,
        flash: Option<Flash>,
    ) -> Self {
        let cart_count = user.as_ref().map_or(0, |u| state.carts().count(u.id));
        Self {
            current_path: page.path().to_string(),
            user,
            cart_count,
            admin_url: state.config().admin_url.clone(),
            flash,
        }
    }

    /// Override the badge count after a fresh cart load.
    #[must_use]
    pub const fn with_cart_count(mut self, count: u32) -> Self {
        self.cart_count = count;
        self
    }
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog
        .route("/products", get(products::index))
        // Cart
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", get(checkout::show).post(checkout::submit))
        // Order history
        .route("/orders", get(orders::index))
        // Auth
        .merge(auth_routes())
}
