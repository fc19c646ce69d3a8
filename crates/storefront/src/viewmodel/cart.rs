//! Cart view-model.
//!
//! All cart writes go through this module. Every operation follows the
//! same policy: fetch or mutate remotely, and on confirmed success
//! replace the whole per-user snapshot with the server's cart. On any
//! failure the snapshot is left untouched, so the UI keeps rendering the
//! last known-good state.

use thiserror::Error;
use tracing::instrument;

use bramble_core::{ProductId, UserId};

use crate::api::types::Cart;
use crate::api::{ApiError, ShopClient};
use crate::snapshot::CartRegistry;

/// Errors from cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Rejected locally before any remote call was issued.
    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    /// The remote call failed; the snapshot was not touched.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl CartError {
    /// Message suitable for showing to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidQuantity => self.to_string(),
            Self::Api(e) => e.user_message(),
        }
    }
}

/// Fetch the user's cart and replace the snapshot.
///
/// Called whenever the cart page becomes active and after mutations.
///
/// # Errors
///
/// Returns an error if the fetch fails.
#[instrument(skip(api, carts), fields(user_id = %user_id))]
pub async fn load(
    api: &ShopClient,
    carts: &CartRegistry,
    user_id: UserId,
) -> Result<Cart, ApiError> {
    let snapshot = carts.for_user(user_id);
    let token = snapshot.begin();
    let cart = api.cart(user_id).await?;

    if !snapshot.commit(token, cart.clone()) {
        tracing::debug!("cart load superseded by a newer one, discarding");
    }

    Ok(snapshot.get().unwrap_or(cart))
}

/// Add a product to the cart.
///
/// `quantity` must be at least 1; that is checked locally before any
/// remote call. The product's stock bound is advisory on the client (it
/// drives the quantity input's `max`), the server's verdict is final: a
/// rejection surfaces the server's message and leaves the snapshot
/// unchanged.
///
/// # Errors
///
/// Returns [`CartError::InvalidQuantity`] for a non-positive quantity,
/// or the remote failure otherwise.
#[instrument(skip(api, carts), fields(user_id = %user_id, product_id = %product_id, quantity))]
pub async fn add(
    api: &ShopClient,
    carts: &CartRegistry,
    user_id: UserId,
    product_id: ProductId,
    quantity: i64,
) -> Result<Cart, CartError> {
    let Ok(quantity @ 1..) = u32::try_from(quantity) else {
        return Err(CartError::InvalidQuantity);
    };

    let snapshot = carts.for_user(user_id);
    let token = snapshot.begin();
    let cart = api.add_to_cart(user_id, product_id, quantity).await?;

    snapshot.commit(token, cart.clone());
    Ok(snapshot.get().unwrap_or(cart))
}

/// Remove a product from the cart.
///
/// # Errors
///
/// Returns an error if the remote call fails.
#[instrument(skip(api, carts), fields(user_id = %user_id, product_id = %product_id))]
pub async fn remove(
    api: &ShopClient,
    carts: &CartRegistry,
    user_id: UserId,
    product_id: ProductId,
) -> Result<Cart, ApiError> {
    let snapshot = carts.for_user(user_id);
    let token = snapshot.begin();
    let cart = api.remove_from_cart(user_id, product_id).await?;

    snapshot.commit(token, cart.clone());
    Ok(snapshot.get().unwrap_or(cart))
}

/// Drop the user's cart snapshot (logout, successful checkout).
pub fn clear(carts: &CartRegistry, user_id: UserId) {
    carts.clear(user_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_rejects_non_positive_quantity_without_calling_out() {
        // Client pointed at a port nothing listens on: if validation did
        // not short-circuit, the call would fail with a network error
        // instead of InvalidQuantity.
        let api = ShopClient::new("http://127.0.0.1:9");
        let carts = CartRegistry::new();
        let user = UserId::new(1);

        for quantity in [0, -3] {
            let result = add(&api, &carts, user, ProductId::new(1), quantity).await;
            assert!(matches!(result, Err(CartError::InvalidQuantity)));
        }

        assert_eq!(carts.count(user), 0);
    }

    #[test]
    fn test_cart_error_messages() {
        assert_eq!(
            CartError::InvalidQuantity.user_message(),
            "Quantity must be at least 1"
        );

        let remote = CartError::Api(ApiError::Remote {
            status: 400,
            message: "Not enough stock. Only 2 available".to_string(),
        });
        assert_eq!(remote.user_message(), "Not enough stock. Only 2 available");
    }
}
