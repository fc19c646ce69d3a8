//! HTTP route handlers for the admin dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Dashboard
//! GET  /                       - Stat tiles (users, products, orders, revenue)
//!
//! # Auth
//! GET  /login                  - Login page
//! POST /login                  - Login action (admin accounts only)
//! POST /logout                 - Logout
//!
//! # Records (read from the Shop API)
//! GET  /users                  - User listing
//! GET  /orders                 - Order listing
//! GET  /products               - Product listing with stock edit / delete
//!
//! # Product management
//! GET  /products/new           - Create form
//! POST /products               - Create product
//! POST /products/{id}/stock    - Update stock level (PUT to the Shop API)
//! POST /products/{id}/delete   - Delete product (requires confirmation)
//!
//! # CSV export
//! GET  /export/users.csv
//! GET  /export/orders.csv
//! GET  /export/products.csv
//! ```

pub mod auth;
pub mod dashboard;
pub mod export;
pub mod orders;
pub mod products;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;

use crate::models::CurrentAdmin;
use crate::state::AppState;

/// Query parameters for flash-notice codes.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// A notice for the shell template's toast area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    /// `success` or `error`; doubles as the toast CSS class.
    pub kind: &'static str,
    /// Human-readable message.
    pub message: &'static str,
}

impl Flash {
    /// Resolve the `error`/`success` query parameters into a notice.
    #[must_use]
    pub fn from_query(error: Option<&str>, success: Option<&str>) -> Option<Self> {
        if let Some(code) = error {
            let message = match code {
                "not_admin" => "Access denied! Admin only.",
                "invalid_stock" => "Invalid stock quantity!",
                "confirm_required" => "Deletion must be confirmed",
                _ => return None,
            };
            return Some(Self {
                kind: "error",
                message,
            });
        }

        success.and_then(|code| {
            let message = match code {
                "product_created" => "Product created successfully!",
                "product_updated" => "Product updated successfully!",
                "product_deleted" => "Product deleted successfully!",
                "logged_out" => "Logged out successfully",
                _ => return None,
            };
            Some(Self {
                kind: "success",
                message,
            })
        })
    }
}

/// Data every admin page hands to the shell template.
#[derive(Debug, Clone)]
pub struct Shell {
    pub current_path: String,
    pub username: String,
    pub flash: Option<Flash>,
}

impl Shell {
    /// Assemble the shell for an admin page.
    #[must_use]
    pub fn build(path: &str, admin: &CurrentAdmin, flash: Option<Flash>) -> Self {
        Self {
            current_path: path.to_string(),
            username: admin.username.clone(),
            flash,
        }
    }
}

/// Create all routes for the admin dashboard.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Dashboard
        .route("/", get(dashboard::index))
        // Auth
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        // Records
        .route("/users", get(users::index))
        .route("/orders", get(orders::index))
        .route("/products", get(products::index).post(products::create))
        .route("/products/new", get(products::new_form))
        .route("/products/{id}/stock", post(products::update_stock))
        .route("/products/{id}/delete", post(products::delete))
        // CSV export
        .route("/export/users.csv", get(export::users_csv))
        .route("/export/orders.csv", get(export::orders_csv))
        .route("/export/products.csv", get(export::products_csv))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_known_codes() {
        let flash = Flash::from_query(Some("invalid_stock"), None).unwrap();
        assert_eq!(flash.message, "Invalid stock quantity!");

        let flash = Flash::from_query(None, Some("product_deleted")).unwrap();
        assert_eq!(flash.kind, "success");
    }

    #[test]
    fn test_flash_unknown_codes_render_nothing() {
        assert!(Flash::from_query(Some("weird"), None).is_none());
        assert!(Flash::from_query(None, Some("weird")).is_none());
    }
}
