//! Product management handlers.
//!
//! Create, stock update, and delete are each one Shop API round trip
//! followed by a redirect back to the refetched listing. Deletion is
//! destructive, so the posted form must carry an explicit confirmation
//! value; the check is a pure function the tests exercise directly.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use bramble_core::{Product, ProductId};

use crate::api::types::NewProduct;
use crate::components::data_table::{DataTableConfig, products_table_config};
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::models::CurrentAdmin;
use crate::state::AppState;

use super::{Flash, MessageQuery, Shell};

/// Image URL substituted when the create form leaves the field blank.
const DEFAULT_IMAGE_URL: &str = "/static/images/default-product.jpg";

/// Product row display data.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub stock_quantity: u32,
    pub category: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price.to_string(),
            stock_quantity: product.stock_quantity,
            category: product
                .category
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

// =============================================================================
// Form Types
// =============================================================================

/// Create product form data.
#[derive(Debug, Deserialize)]
pub struct NewProductForm {
    pub name: String,
    pub price: f64,
    pub stock_quantity: u32,
    pub category: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// Stock update form data.
///
/// The quantity arrives as text so a non-numeric entry is caught by the
/// local validation rather than a framework rejection.
#[derive(Debug, Deserialize)]
pub struct StockForm {
    pub stock_quantity: String,
}

/// Delete form data.
#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub confirm: Option<String>,
}

/// Whether a posted confirmation value actually confirms.
#[must_use]
pub fn is_confirmed(value: Option<&str>) -> bool {
    matches!(value, Some("true" | "on" | "1" | "yes"))
}

/// Parse a stock entry: a non-negative integer, or `None` when the
/// entry is non-numeric or negative.
#[must_use]
pub fn parse_stock(entry: &str) -> Option<u32> {
    entry.trim().parse::<u32>().ok()
}

// =============================================================================
// Templates
// =============================================================================

/// Products page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsTemplate {
    pub shell: Shell,
    pub config: DataTableConfig,
    pub products: Vec<ProductRow>,
    pub load_error: Option<String>,
}

/// Create-product form template.
#[derive(Template, WebTemplate)]
#[template(path = "products/new.html")]
pub struct NewProductTemplate {
    pub shell: Shell,
    pub error: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the product listing.
#[instrument(skip(state, admin, query))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let flash = Flash::from_query(query.error.as_deref(), query.success.as_deref());
    render_index(&state, &admin, flash, None).await
}

async fn render_index(
    state: &AppState,
    admin: &CurrentAdmin,
    flash: Option<Flash>,
    inline_error: Option<String>,
) -> ProductsTemplate {
    let (products, load_error) = match state.api().products().await {
        Ok(products) => (products, inline_error),
        Err(e) => {
            tracing::error!("Failed to fetch products: {e}");
            (
                Vec::new(),
                Some(inline_error.unwrap_or_else(|| "Error loading products".to_string())),
            )
        }
    };

    ProductsTemplate {
        shell: Shell::build("/products", admin, flash),
        config: products_table_config(),
        products: products.iter().map(ProductRow::from).collect(),
        load_error,
    }
}

/// Display the create-product form.
pub async fn new_form(RequireAdminAuth(admin): RequireAdminAuth) -> impl IntoResponse {
    NewProductTemplate {
        shell: Shell::build("/products", &admin, None),
        error: None,
    }
}

/// Handle create-product form submission.
#[instrument(skip(state, admin, form), fields(name = %form.name))]
pub async fn create(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<NewProductForm>,
) -> Response {
    let image_url = form
        .image_url
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

    let body = NewProduct {
        name: form.name,
        price: form.price,
        stock_quantity: form.stock_quantity,
        category: form.category,
        description: form.description,
        image_url,
    };

    match state.api().create_product(&body).await {
        Ok(()) => Redirect::to("/products?success=product_created").into_response(),
        Err(e) => {
            tracing::warn!("Failed to create product: {e}");
            NewProductTemplate {
                shell: Shell::build("/products", &admin, None),
                error: Some(e.user_message()),
            }
            .into_response()
        }
    }
}

/// Handle a stock update.
///
/// A non-numeric or negative entry is rejected locally before any
/// remote call; remote rejections re-render the listing with the
/// server's message inline.
#[instrument(skip(state, admin, form))]
pub async fn update_stock(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<StockForm>,
) -> Response {
    let Some(stock_quantity) = parse_stock(&form.stock_quantity) else {
        return Redirect::to("/products?error=invalid_stock").into_response();
    };

    match state
        .api()
        .update_product_stock(ProductId::new(id), stock_quantity)
        .await
    {
        Ok(()) => Redirect::to("/products?success=product_updated").into_response(),
        Err(e) => {
            tracing::warn!("Failed to update stock for product {id}: {e}");
            render_index(&state, &admin, None, Some(e.user_message()))
                .await
                .into_response()
        }
    }
}

/// Handle a product deletion.
///
/// The form must carry `confirm`; without it nothing is sent remotely.
#[instrument(skip(state, admin, form))]
pub async fn delete(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<DeleteForm>,
) -> Response {
    if !is_confirmed(form.confirm.as_deref()) {
        return Redirect::to("/products?error=confirm_required").into_response();
    }

    match state.api().delete_product(ProductId::new(id)).await {
        Ok(()) => Redirect::to("/products?success=product_deleted").into_response(),
        Err(e) => {
            tracing::warn!("Failed to delete product {id}: {e}");
            render_index(&state, &admin, None, Some(e.user_message()))
                .await
                .into_response()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_is_confirmed() {
        assert!(is_confirmed(Some("true")));
        assert!(is_confirmed(Some("on")));
        assert!(!is_confirmed(Some("false")));
        assert!(!is_confirmed(Some("")));
        assert!(!is_confirmed(None));
    }

    #[test]
    fn test_parse_stock_accepts_non_negative_integers() {
        assert_eq!(parse_stock("0"), Some(0));
        assert_eq!(parse_stock(" 25 "), Some(25));
    }

    #[test]
    fn test_parse_stock_rejects_garbage() {
        assert_eq!(parse_stock("-3"), None);
        assert_eq!(parse_stock("lots"), None);
        assert_eq!(parse_stock("2.5"), None);
        assert_eq!(parse_stock(""), None);
    }

    #[test]
    fn test_category_placeholder() {
        use bramble_core::Price;
        let product = Product {
            id: ProductId::new(1),
            name: "Juniper Soap".to_string(),
            description: None,
            price: Price::zero(),
            stock_quantity: 3,
            category: None,
            image_url: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(ProductRow::from(&product).category, "N/A");
    }
}
