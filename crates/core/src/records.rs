//! Wire records returned by the Shop API.
//!
//! These are the JSON shapes the remote service answers with, shared by
//! the storefront and admin frontends. Both treat the server as the
//! source of truth: records are deserialized, displayed, and never
//! recomputed or merged client-side.

use serde::{Deserialize, Serialize};

use crate::types::{Email, OrderId, OrderStatus, PaymentStatus, Price, ProductId, UserId};

/// A product in the remote catalog.
///
/// The client never mutates a product directly; the admin "update stock"
/// round trip replaces the whole record server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    #[serde(default)]
    pub stock_quantity: u32,
    pub category: Option<String>,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Product {
    /// Whether the add-to-cart control should be enabled at all.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

const fn default_true() -> bool {
    true
}

/// A registered user, as the Shop API reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: Email,
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A completed purchase. Immutable once created from the client's
/// perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub user_id: UserId,
    #[serde(default)]
    pub status: OrderStatus,
    pub total_amount: Price,
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A line within an order, snapshotted at purchase time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub price_at_purchase: Price,
    pub subtotal: Price,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserialize() {
        let json = r#"{
            "id": 3,
            "name": "Walnut Cutting Board",
            "description": null,
            "price": 49.5,
            "stock_quantity": 0,
            "category": "Kitchen",
            "image_url": "/static/images/board.jpg",
            "is_active": true,
            "created_at": "2026-02-01T12:00:00",
            "updated_at": "2026-02-01T12:00:00"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.price.to_string(), "$49.50");
        assert!(product.description.is_none());
        assert!(!product.in_stock());
    }

    #[test]
    fn test_order_deserialize_with_items() {
        let json = r#"{
            "id": 9,
            "order_number": "ORD-20260201-0009",
            "user_id": 2,
            "status": "pending",
            "total_amount": 99.0,
            "shipping_address": "12 Fern Lane",
            "payment_method": "credit_card",
            "payment_status": "pending",
            "items": [
                {
                    "id": 1,
                    "product_id": 3,
                    "product_name": "Walnut Cutting Board",
                    "quantity": 2,
                    "price_at_purchase": 49.5,
                    "subtotal": 99.0
                }
            ],
            "created_at": "2026-02-01T12:30:00"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].subtotal.to_string(), "$99.00");
    }

    #[test]
    fn test_user_missing_full_name() {
        let json = r#"{"id": 1, "username": "demo", "email": "demo@example.com", "is_admin": false}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.full_name.is_none());
        assert!(user.created_at.is_none());
    }
}
