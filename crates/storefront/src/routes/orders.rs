//! Order history handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use tracing::instrument;

use bramble_core::Order;

use crate::filters::{self, format_date};
use crate::middleware::RequireAuth;
use crate::models::{Flash, Page};
use crate::state::AppState;

use super::{MessageQuery, Shell};

/// Order line display data.
#[derive(Debug, Clone)]
pub struct OrderItemView {
    pub product_name: String,
    pub quantity: u32,
    pub subtotal: String,
}

/// Order display data for templates.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub order_number: String,
    pub placed_on: String,
    pub status_label: String,
    pub status_class: String,
    pub items: Vec<OrderItemView>,
    pub total: String,
    pub shipping_address: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            order_number: order.order_number.clone(),
            placed_on: order
                .created_at
                .as_deref()
                .map_or_else(String::new, format_date),
            status_label: order.status.label().to_string(),
            status_class: order.status.as_str().to_string(),
            items: order
                .items
                .iter()
                .map(|item| OrderItemView {
                    product_name: item.product_name.clone(),
                    quantity: item.quantity,
                    subtotal: item.subtotal.to_string(),
                })
                .collect(),
            total: order.total_amount.to_string(),
            shipping_address: order
                .shipping_address
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

/// Order history page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub shell: Shell,
    pub orders: Vec<OrderView>,
    pub load_error: Option<String>,
}

/// Display the order history page.
#[instrument(skip(state, user, query))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let flash = Flash::from_query(query.error.as_deref(), query.success.as_deref());

    let (orders, load_error) = match state.api().orders(user.id).await {
        Ok(orders) => (orders, None),
        Err(e) => {
            tracing::warn!("Failed to load orders for user {}: {e}", user.id);
            (Vec::new(), Some("Error loading orders".to_string()))
        }
    };

    OrdersIndexTemplate {
        shell: Shell::build(&state, Page::Orders, Some(user), flash),
        orders: orders.iter().map(OrderView::from).collect(),
        load_error,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use bramble_core::{OrderId, OrderItem, OrderStatus, PaymentStatus, Price, ProductId, UserId};
    use rust_decimal::Decimal;

    fn sample_order() -> Order {
        Order {
            id: OrderId::new(9),
            order_number: "ORD-20260201-0009".to_string(),
            user_id: UserId::new(2),
            status: OrderStatus::Shipped,
            total_amount: Price::new(Decimal::new(9900, 2)),
            shipping_address: Some("12 Fern Lane".to_string()),
            payment_method: Some("credit_card".to_string()),
            payment_status: PaymentStatus::Completed,
            items: vec![OrderItem {
                product_id: ProductId::new(3),
                product_name: "Walnut Cutting Board".to_string(),
                quantity: 2,
                price_at_purchase: Price::new(Decimal::new(4950, 2)),
                subtotal: Price::new(Decimal::new(9900, 2)),
            }],
            created_at: Some("2026-02-01T12:30:00".to_string()),
        }
    }

    #[test]
    fn test_order_view_conversion() {
        let view = OrderView::from(&sample_order());
        assert_eq!(view.status_label, "SHIPPED");
        assert_eq!(view.status_class, "shipped");
        assert_eq!(view.placed_on, "Feb 1, 2026");
        assert_eq!(view.total, "$99.00");
        assert_eq!(view.items[0].subtotal, "$99.00");
    }

    #[test]
    fn test_missing_shipping_address_falls_back() {
        let mut order = sample_order();
        order.shipping_address = None;
        let view = OrderView::from(&order);
        assert_eq!(view.shipping_address, "N/A");
    }

    #[test]
    fn test_empty_history_renders_placeholder() {
        let template = OrdersIndexTemplate {
            shell: Shell {
                current_path: Page::Orders.path().to_string(),
                user: None,
                cart_count: 0,
                admin_url: None,
                flash: None,
            },
            orders: vec![],
            load_error: None,
        };

        let html = template.render().unwrap();
        assert!(html.contains("No orders yet"));
    }
}
