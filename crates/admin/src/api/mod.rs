//! Shop API client for the admin dashboard.
//!
//! One method per endpoint the dashboard consumes: login, the stats
//! counters, the user and order listings, and product CRUD. Mutations
//! are plain round trips; after one, callers re-fetch whatever lists
//! they display. Nothing is cached or retried.

pub mod types;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

use bramble_core::{Order, Product, ProductId, User};

use types::{
    ErrorBody, LoginResponse, NewProduct, OrdersResponse, ProductsResponse, Stats, StockUpdate,
    UsersResponse,
};

/// Errors that can occur when talking to the Shop API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response obtained.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The remote answered with a non-success status and an error payload.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// The response body could not be parsed.
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Message suitable for showing to the operator.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Remote { message, .. } => message.clone(),
            Self::Network(_) => "Connection error. Please try again.".to_string(),
            Self::Parse(_) => "Unexpected response from the shop. Please try again.".to_string(),
        }
    }
}

/// Client for the admin-facing Shop API endpoints.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl AdminClient {
    /// Create a new admin Shop API client.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: Arc::new(AdminClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

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

    /// Authenticate an operator. The admin gate on top of this rejects
    /// accounts without the admin flag.
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
            .json(&serde_json::json!({ "username": username, "password": password }));

        let response: LoginResponse = self.execute(request).await?;
        Ok(response.user)
    }

    /// Fetch the dashboard counters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<Stats, ApiError> {
        let request = self.inner.client.get(self.url("/admin/stats"));
        self.execute(request).await
    }

    /// Fetch every registered user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        let request = self.inner.client.get(self.url("/admin/users"));
        let response: UsersResponse = self.execute(request).await?;
        Ok(response.users)
    }

    /// Fetch every order, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn orders(&self) -> Result<Vec<Order>, ApiError> {
        let request = self.inner.client.get(self.url("/admin/orders"));
        let response: OrdersResponse = self.execute(request).await?;
        Ok(response.orders)
    }

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

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails remotely or the request fails.
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create_product(&self, product: &NewProduct) -> Result<(), ApiError> {
        let request = self
            .inner
            .client
            .post(self.url("/admin/products"))
            .json(product);

        let _: serde_json::Value = self.execute(request).await?;
        Ok(())
    }

    /// Replace a product's stock level server-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is unknown or the request fails.
    #[instrument(skip(self), fields(product_id = %product_id, stock_quantity))]
    pub async fn update_product_stock(
        &self,
        product_id: ProductId,
        stock_quantity: u32,
    ) -> Result<(), ApiError> {
        let request = self
            .inner
            .client
            .put(self.url(&format!("/admin/products/{product_id}")))
            .json(&StockUpdate { stock_quantity });

        let _: serde_json::Value = self.execute(request).await?;
        Ok(())
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is unknown or the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn delete_product(&self, product_id: ProductId) -> Result<(), ApiError> {
        let request = self
            .inner
            .client
            .delete(self.url(&format!("/admin/products/{product_id}")));

        let _: serde_json::Value = self.execute(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = AdminClient::new("http://localhost:5001/api/");
        assert_eq!(
            client.url("/admin/stats"),
            "http://localhost:5001/api/admin/stats"
        );
    }

    #[test]
    fn test_remote_error_message_passthrough() {
        let err = ApiError::Remote {
            status: 404,
            message: "Product not found".to_string(),
        };
        assert_eq!(err.user_message(), "Product not found");
        assert_eq!(err.to_string(), "Product not found");
    }
}
