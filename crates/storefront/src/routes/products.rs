//! Product listing handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;

use bramble_core::Product;

use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::{Flash, Page};
use crate::state::AppState;
use crate::viewmodel;

use super::{MessageQuery, Shell};

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock_quantity: u32,
    pub in_stock: bool,
    pub image_url: Option<String>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product
                .description
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "No description".to_string()),
            price: product.price.to_string(),
            stock_quantity: product.stock_quantity,
            in_stock: product.in_stock(),
            image_url: product.image_url.clone(),
        }
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub shell: Shell,
    pub products: Vec<ProductView>,
    pub load_error: Option<String>,
}

/// Display the product listing page.
///
/// The catalog is refetched on every visit; a fetch failure keeps the
/// page up with an inline notice instead of failing the request.
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let flash = Flash::from_query(query.error.as_deref(), query.success.as_deref());

    let (products, load_error) =
        match viewmodel::catalog::refresh(state.api(), state.catalog()).await {
            Ok(products) => (products, None),
            Err(e) => {
                tracing::warn!("Failed to load products: {e}");
                (
                    state.catalog().get().unwrap_or_default(),
                    Some("Error loading products".to_string()),
                )
            }
        };

    ProductsIndexTemplate {
        shell: Shell::build(&state, Page::Products, user, flash),
        products: products.iter().map(ProductView::from).collect(),
        load_error,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use bramble_core::{Price, ProductId};
    use rust_decimal::Decimal;

    fn sample_product(stock: u32, description: Option<&str>) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Beeswax Candle".to_string(),
            description: description.map(ToString::to_string),
            price: Price::new(Decimal::new(1250, 2)),
            stock_quantity: stock,
            category: Some("Home".to_string()),
            image_url: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_view_applies_description_fallback() {
        let view = ProductView::from(&sample_product(4, None));
        assert_eq!(view.description, "No description");

        let view = ProductView::from(&sample_product(4, Some("")));
        assert_eq!(view.description, "No description");

        let view = ProductView::from(&sample_product(4, Some("Hand poured")));
        assert_eq!(view.description, "Hand poured");
    }

    #[test]
    fn test_view_flags_out_of_stock() {
        let view = ProductView::from(&sample_product(0, Some("x")));
        assert!(!view.in_stock);

        let view = ProductView::from(&sample_product(1, Some("x")));
        assert!(view.in_stock);
    }

    #[test]
    fn test_zero_stock_renders_disabled_control() {
        let template = ProductsIndexTemplate {
            shell: shell_for_tests(),
            products: vec![ProductView::from(&sample_product(0, Some("x")))],
            load_error: None,
        };

        let html = template.render().unwrap();
        assert!(html.contains("Out of Stock"));
        assert!(html.contains("disabled"));
        assert!(!html.contains("Add to Cart"));
    }

    #[test]
    fn test_in_stock_renders_enabled_control_with_max_bound() {
        let template = ProductsIndexTemplate {
            shell: shell_for_tests(),
            products: vec![ProductView::from(&sample_product(7, Some("x")))],
            load_error: None,
        };

        let html = template.render().unwrap();
        assert!(html.contains("Add to Cart"));
        assert!(html.contains("max=\"7\""));
        assert!(!html.contains("Out of Stock"));
    }

    #[test]
    fn test_empty_catalog_renders_placeholder() {
        let template = ProductsIndexTemplate {
            shell: shell_for_tests(),
            products: vec![],
            load_error: None,
        };

        let html = template.render().unwrap();
        assert!(html.contains("No products found"));
    }

    fn shell_for_tests() -> Shell {
        Shell {
            current_path: Page::Products.path().to_string(),
            user: None,
            cart_count: 0,
            admin_url: None,
            flash: None,
        }
    }
}
