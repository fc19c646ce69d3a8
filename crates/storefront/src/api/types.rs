//! Request and response envelopes for the Shop API.
//!
//! Domain records (`Product`, `User`, `Order`) live in `bramble-core`;
//! this module holds the cart shapes and the envelopes each endpoint
//! wraps its payload in.

use serde::{Deserialize, Serialize};

use bramble_core::{Price, Product, ProductId, User, UserId};

// =============================================================================
// Cart Types
// =============================================================================

/// A line in the user's cart.
///
/// `subtotal` is `product.price * quantity` as computed by the server.
/// The client displays it verbatim and never recomputes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
    pub subtotal: Price,
    #[serde(default)]
    pub added_at: Option<String>,
}

/// The user's cart as the server reports it.
///
/// `total == Σ item.subtotal` and `item_count == Σ item.quantity` hold by
/// construction on the server; the view layer renders exactly these
/// values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub item_count: u32,
    #[serde(default)]
    pub total: Price,
}

impl Cart {
    /// Whether there is anything to check out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Request Bodies
// =============================================================================

/// `POST /users/login` request body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// `POST /users/register` request body.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub full_name: &'a str,
}

/// `POST /cart/{user}/add` request body.
#[derive(Debug, Serialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// `POST /orders` request body.
#[derive(Debug, Serialize)]
pub struct PlaceOrderRequest<'a> {
    pub user_id: UserId,
    pub shipping_address: &'a str,
    pub payment_method: &'a str,
}

// =============================================================================
// Response Envelopes
// =============================================================================

/// Error payload the Shop API attaches to non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `POST /users/login` response.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

/// `GET /products` response.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// Response to cart mutations (`add`, `remove`): the whole updated cart.
#[derive(Debug, Deserialize)]
pub struct CartMutationResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub cart: Cart,
}

/// `GET /orders/user/{id}` response.
#[derive(Debug, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<bramble_core::Order>,
    #[serde(default)]
    pub count: Option<u32>,
}

/// `POST /orders` response.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub order: bramble_core::Order,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_deserialize() {
        let json = r#"{
            "id": 1,
            "user_id": 2,
            "items": [
                {
                    "id": 5,
                    "product": {
                        "id": 3,
                        "name": "Beeswax Candle",
                        "description": "Hand poured",
                        "price": 12.0,
                        "stock_quantity": 10,
                        "category": "Home",
                        "image_url": null,
                        "is_active": true
                    },
                    "quantity": 2,
                    "subtotal": 24.0,
                    "added_at": "2026-02-01T10:00:00"
                }
            ],
            "total": 24.0,
            "item_count": 2,
            "created_at": "2026-02-01T09:00:00",
            "updated_at": "2026-02-01T10:00:00"
        }"#;

        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.item_count, 2);
        assert_eq!(cart.total.to_string(), "$24.00");
        assert_eq!(cart.items.len(), 1);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_empty_cart_default() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count, 0);
        assert_eq!(cart.total.to_string(), "$0.00");
    }

    #[test]
    fn test_error_body_deserialize() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "Not enough stock"}"#).unwrap();
        assert_eq!(body.error, "Not enough stock");
    }
}
