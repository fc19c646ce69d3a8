//! Request and response envelopes for the admin-facing Shop API endpoints.

use serde::{Deserialize, Serialize};

use bramble_core::{Order, Price, Product, User};

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

/// `GET /admin/stats` response.
#[derive(Debug, Clone, Deserialize)]
pub struct Stats {
    pub total_users: u64,
    pub total_products: u64,
    pub total_orders: u64,
    pub total_revenue: Price,
}

/// `GET /admin/users` response.
#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// `GET /admin/orders` response.
#[derive(Debug, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// `GET /products` response.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// `POST /admin/products` request body.
#[derive(Debug, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock_quantity: u32,
    pub category: String,
    pub description: String,
    pub image_url: String,
}

/// `PUT /admin/products/{id}` request body.
#[derive(Debug, Serialize)]
pub struct StockUpdate {
    pub stock_quantity: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_deserialize() {
        let json = r#"{
            "total_users": 12,
            "total_products": 34,
            "total_orders": 7,
            "total_revenue": 1234.56
        }"#;
        let stats: Stats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_orders, 7);
        assert_eq!(stats.total_revenue.to_string(), "$1234.56");
    }

    #[test]
    fn test_new_product_serializes_all_fields() {
        let body = NewProduct {
            name: "Juniper Soap".to_string(),
            price: 6.5,
            stock_quantity: 30,
            category: "Bath".to_string(),
            description: "Cold process".to_string(),
            image_url: "/static/images/default-product.jpg".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["price"], 6.5);
        assert_eq!(json["stock_quantity"], 30);
        assert_eq!(json["image_url"], "/static/images/default-product.jpg");
    }
}
