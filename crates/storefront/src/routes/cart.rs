//! Cart route handlers.
//!
//! Cart mutations use HTMX fragments: the handler answers a small
//! fragment that is swapped wholesale into its container, plus an
//! `HX-Trigger: cart-updated` header the badge listens for. The
//! snapshot is only replaced on confirmed success, so a rejected
//! mutation leaves both the badge and the cart page unchanged.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use bramble_core::ProductId;

use crate::api::types::Cart;
use crate::filters;
use crate::middleware::{OptionalAuth, RequireAuth};
use crate::models::{Flash, Page};
use crate::state::AppState;
use crate::viewmodel;

use super::{MessageQuery, Shell};

/// Cart item display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub product_id: i32,
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub subtotal: String,
    pub image_url: Option<String>,
}

/// Cart display data for templates.
///
/// `total` and `item_count` are the server's figures, rendered verbatim.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub total: String,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            item_count: 0,
            total: "$0.00".to_string(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .items
                .iter()
                .map(|item| CartItemView {
                    product_id: item.product.id.as_i32(),
                    name: item.product.name.clone(),
                    unit_price: item.product.price.to_string(),
                    quantity: item.quantity,
                    subtotal: item.subtotal.to_string(),
                    image_url: item.product.image_url.clone(),
                })
                .collect(),
            item_count: cart.item_count,
            total: cart.total.to_string(),
        }
    }
}

// =============================================================================
// Form Types
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
    pub quantity: Option<i64>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub shell: Shell,
    pub cart: CartView,
    pub load_error: Option<String>,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Inline status fragment for cart mutations (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_status.html")]
pub struct CartStatusTemplate {
    pub kind: &'static str,
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
///
/// Always refetches the cart; a failed fetch keeps the last known
/// snapshot on screen with an inline notice.
#[instrument(skip(state, user, query))]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let flash = Flash::from_query(query.error.as_deref(), query.success.as_deref());

    let (cart, load_error) = match viewmodel::cart::load(state.api(), state.carts(), user.id).await
    {
        Ok(cart) => (cart, None),
        Err(e) => {
            tracing::warn!("Failed to fetch cart for user {}: {e}", user.id);
            (
                state.carts().for_user(user.id).get().unwrap_or_default(),
                Some("Error loading cart".to_string()),
            )
        }
    };

    let cart_view = CartView::from(&cart);
    let shell =
        Shell::build(&state, Page::Cart, Some(user), flash).with_cart_count(cart.item_count);

    CartShowTemplate {
        shell,
        cart: cart_view,
        load_error,
    }
}

/// Add an item to the cart (HTMX).
///
/// Answers a status fragment for the product card. On success the
/// `cart-updated` trigger makes the badge refresh itself; on rejection
/// the server's message is surfaced and nothing else changes.
#[instrument(skip(state, user))]
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let quantity = form.quantity.unwrap_or(1);
    let product_id = ProductId::new(form.product_id);

    match viewmodel::cart::add(state.api(), state.carts(), user.id, product_id, quantity).await {
        Ok(_) => (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartStatusTemplate {
                kind: "success",
                message: "Added to cart!".to_string(),
            },
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("Failed to add product {product_id} to cart: {e}");
            CartStatusTemplate {
                kind: "error",
                message: e.user_message(),
            }
            .into_response()
        }
    }
}

/// Remove an item from the cart (HTMX).
///
/// Answers the cart items fragment. On failure the current snapshot is
/// re-rendered unchanged.
#[instrument(skip(state, user))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<RemoveFromCartForm>,
) -> Response {
    let product_id = ProductId::new(form.product_id);

    match viewmodel::cart::remove(state.api(), state.carts(), user.id, product_id).await {
        Ok(cart) => (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartItemsTemplate {
                cart: CartView::from(&cart),
            },
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("Failed to remove product {product_id} from cart: {e}");
            let cart = state.carts().for_user(user.id).get().unwrap_or_default();
            CartItemsTemplate {
                cart: CartView::from(&cart),
            }
            .into_response()
        }
    }
}

/// Cart count badge (HTMX).
///
/// Refetches the cart for a logged-in user so the badge survives full
/// page reloads; guests always see zero.
#[instrument(skip(state, user))]
pub async fn count(State(state): State<AppState>, OptionalAuth(user): OptionalAuth) -> Response {
    let count = match user {
        Some(user) => viewmodel::cart::load(state.api(), state.carts(), user.id)
            .await
            .map_or_else(|_| state.carts().count(user.id), |cart| cart.item_count),
        None => 0,
    };

    CartCountTemplate { count }.into_response()
}
