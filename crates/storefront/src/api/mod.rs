//! Shop API client.
//!
//! # Architecture
//!
//! - One method per REST endpoint, plain JSON request/response via `reqwest`
//! - The Shop API is the source of truth - no local sync, no caching, no
//!   retries, no batching
//! - Network failures and application errors are distinct variants so
//!   callers can surface the remote message when one exists
//!
//! # Example
//!
//! ```rust,ignore
//! use bramble_storefront::api::ShopClient;
//!
//! let client = ShopClient::new(&config.shop_api_url);
//!
//! let products = client.products().await?;
//! let cart = client.add_to_cart(user_id, products[0].id, 1).await?;
//! ```

pub mod types;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

use bramble_core::{Order, Product, ProductId, User, UserId};

use types::{
    AddToCartRequest, Cart, CartMutationResponse, ErrorBody, LoginRequest, LoginResponse,
    OrdersResponse, PlaceOrderRequest, PlaceOrderResponse, ProductsResponse, RegisterRequest,
};

/// Errors that can occur when talking to the Shop API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response obtained (connection refused, DNS failure, ...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The remote answered with a non-success status and an error payload.
    #[error("{message}")]
    Remote {
        /// HTTP status code of the response.
        status: u16,
        /// The remote's error message, or a generic fallback when the
        /// body carried none.
        message: String,
    },

    /// The response body could not be parsed.
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Message suitable for showing to the user.
    ///
    /// Remote application errors pass the server's message through;
    /// transport-level failures get a generic wording.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Remote { message, .. } => message.clone(),
            Self::Network(_) => "Connection error. Please try again.".to_string(),
            Self::Parse(_) => "Unexpected response from the shop. Please try again.".to_string(),
        }
    }
}

// =============================================================================
// ShopClient
// =============================================================================

/// Client for the storefront-facing Shop API endpoints.
///
/// Cheaply cloneable; the underlying `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct ShopClient {
    inner: Arc<ShopClientInner>,
}

struct ShopClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl ShopClient {
    /// Create a new Shop API client.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: Arc::new(ShopClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Send a request and parse the response.
    ///
    /// The body is read as text first so parse failures can be logged with
    /// the offending payload. Non-success statuses are mapped to
    /// [`ApiError::Remote`], carrying the `{error}` message when present.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&response_text)
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            tracing::warn!(
                status = %status,
                message = %message,
                "Shop API returned non-success status"
            );
            return Err(ApiError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %response_text.chars().take(500).collect::<String>(),
                "Failed to parse Shop API response"
            );
            ApiError::Parse(e)
        })
    }

    // =========================================================================
    // Auth Methods
    // =========================================================================

    /// Authenticate with username and password.
    ///
    /// Credentials are passed through unmodified; the remote decides.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the request fails.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let request = self
            .inner
            .client
            .post(self.url("/users/login"))
            .json(&LoginRequest { username, password });

        let response: LoginResponse = self.execute(request).await?;
        Ok(response.user)
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the username or email is taken or the request
    /// fails.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<(), ApiError> {
        let request = self
            .inner
            .client
            .post(self.url("/users/register"))
            .json(&RegisterRequest {
                username,
                email,
                password,
                full_name,
            });

        let _: serde_json::Value = self.execute(request).await?;
        Ok(())
    }

    // =========================================================================
    // Catalog Methods
    // =========================================================================

    /// Fetch the whole product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        let request = self.inner.client.get(self.url("/products"));
        let response: ProductsResponse = self.execute(request).await?;
        Ok(response.products)
    }

    // =========================================================================
    // Cart Methods
    // =========================================================================

    /// Fetch the current cart for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn cart(&self, user_id: UserId) -> Result<Cart, ApiError> {
        let request = self.inner.client.get(self.url(&format!("/cart/{user_id}")));
        self.execute(request).await
    }

    /// Add a product to the cart. Answers the whole updated cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the addition (e.g. not
    /// enough stock) or the request fails.
    #[instrument(skip(self), fields(user_id = %user_id, product_id = %product_id, quantity))]
    pub async fn add_to_cart(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Cart, ApiError> {
        let request = self
            .inner
            .client
            .post(self.url(&format!("/cart/{user_id}/add")))
            .json(&AddToCartRequest {
                product_id,
                quantity,
            });

        let response: CartMutationResponse = self.execute(request).await?;
        Ok(response.cart)
    }

    /// Remove a product from the cart. Answers the whole updated cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(user_id = %user_id, product_id = %product_id))]
    pub async fn remove_from_cart(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<Cart, ApiError> {
        let request = self
            .inner
            .client
            .delete(self.url(&format!("/cart/{user_id}/remove/{product_id}")));

        let response: CartMutationResponse = self.execute(request).await?;
        Ok(response.cart)
    }

    // =========================================================================
    // Order Methods
    // =========================================================================

    /// Place an order from the user's current cart. One atomic remote call;
    /// all consistency is the server's concern.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart is empty server-side, stock ran out, or
    /// the request fails.
    #[instrument(skip(self, shipping_address), fields(user_id = %user_id))]
    pub async fn place_order(
        &self,
        user_id: UserId,
        shipping_address: &str,
        payment_method: &str,
    ) -> Result<Order, ApiError> {
        let request = self
            .inner
            .client
            .post(self.url("/orders"))
            .json(&PlaceOrderRequest {
                user_id,
                shipping_address,
                payment_method,
            });

        let response: PlaceOrderResponse = self.execute(request).await?;
        Ok(response.order)
    }

    /// Fetch the user's order history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn orders(&self, user_id: UserId) -> Result<Vec<Order>, ApiError> {
        let request = self
            .inner
            .client
            .get(self.url(&format!("/orders/user/{user_id}")));

        let response: OrdersResponse = self.execute(request).await?;
        Ok(response.orders)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ShopClient::new("http://localhost:5001/api/");
        assert_eq!(
            client.url("/products"),
            "http://localhost:5001/api/products"
        );
    }

    #[test]
    fn test_api_error_user_message_passes_remote_through() {
        let err = ApiError::Remote {
            status: 400,
            message: "Not enough stock. Only 2 available".to_string(),
        };
        assert_eq!(err.user_message(), "Not enough stock. Only 2 available");
    }

    #[test]
    fn test_api_error_parse_message_is_generic() {
        let parse_err = serde_json::from_str::<ErrorBody>("not json").unwrap_err();
        let err = ApiError::Parse(parse_err);
        assert_eq!(
            err.user_message(),
            "Unexpected response from the shop. Please try again."
        );
    }
}
