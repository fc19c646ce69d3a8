//! Checkout handlers.
//!
//! Placing an order is one atomic remote call: no local reservation, no
//! optimistic stock decrement, no rollback. On confirmed success the
//! cart snapshot is cleared and the user lands on order history, which
//! reloads itself.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::Page;
use crate::routes::cart::CartView;
use crate::state::AppState;
use crate::viewmodel;

use super::Shell;

/// Checkout form data.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    pub shipping_address: String,
    pub payment_method: String,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub shell: Shell,
    pub cart: CartView,
    pub error: Option<String>,
}

/// Display the checkout page.
///
/// An empty cart bounces back to the cart page before any order call
/// could be made. A failed cart load with no previous snapshot is a
/// hard error: checkout must not start blind.
#[instrument(skip(state, user))]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Response, AppError> {
    let cart = match viewmodel::cart::load(state.api(), state.carts(), user.id).await {
        Ok(cart) => cart,
        Err(e) => {
            tracing::warn!("Failed to load cart for checkout: {e}");
            state
                .carts()
                .for_user(user.id)
                .get()
                .ok_or(AppError::Api(e))?
        }
    };

    if cart.is_empty() {
        return Ok(Redirect::to("/cart?error=cart_empty").into_response());
    }

    let shell =
        Shell::build(&state, Page::Checkout, Some(user), None).with_cart_count(cart.item_count);

    Ok(CheckoutTemplate {
        shell,
        cart: CartView::from(&cart),
        error: None,
    }
    .into_response())
}

/// Handle checkout form submission.
#[instrument(skip(state, user, form))]
pub async fn submit(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<CheckoutForm>,
) -> Response {
    let cart = state.carts().for_user(user.id).get().unwrap_or_default();
    if cart.is_empty() {
        return Redirect::to("/cart?error=cart_empty").into_response();
    }

    // Local validation, reported before any remote call
    let shipping_address = form.shipping_address.trim();
    if shipping_address.is_empty() {
        let shell = Shell::build(&state, Page::Checkout, Some(user), None)
            .with_cart_count(cart.item_count);
        return CheckoutTemplate {
            shell,
            cart: CartView::from(&cart),
            error: Some("Shipping address is required".to_string()),
        }
        .into_response();
    }

    match state
        .api()
        .place_order(user.id, shipping_address, &form.payment_method)
        .await
    {
        Ok(order) => {
            tracing::info!("Order {} placed for user {}", order.order_number, user.id);
            viewmodel::cart::clear(state.carts(), user.id);
            Redirect::to("/orders?success=order_placed").into_response()
        }
        Err(e) => {
            tracing::warn!("Failed to place order for user {}: {e}", user.id);
            let shell = Shell::build(&state, Page::Checkout, Some(user), None)
                .with_cart_count(cart.item_count);
            CheckoutTemplate {
                shell,
                cart: CartView::from(&cart),
                error: Some(e.user_message()),
            }
            .into_response()
        }
    }
}
