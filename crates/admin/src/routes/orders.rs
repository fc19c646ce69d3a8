//! Order listing handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::instrument;

use bramble_core::Order;

use crate::components::data_table::{DataTableConfig, orders_table_config};
use crate::filters::{self, format_date};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

use super::Shell;

/// Order row display data.
#[derive(Debug, Clone)]
pub struct OrderRow {
    pub order_number: String,
    pub user_id: i32,
    pub total: String,
    pub status: String,
    pub item_count: usize,
    pub placed: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            order_number: order.order_number.clone(),
            user_id: order.user_id.as_i32(),
            total: order.total_amount.to_string(),
            status: order.status.to_string(),
            item_count: order.items.len(),
            placed: order
                .created_at
                .as_deref()
                .map_or_else(String::new, format_date),
        }
    }
}

/// Orders page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersTemplate {
    pub shell: Shell,
    pub config: DataTableConfig,
    pub orders: Vec<OrderRow>,
    pub load_error: Option<String>,
}

/// Display the order listing.
#[instrument(skip(state, admin))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let (orders, load_error) = match state.api().orders().await {
        Ok(orders) => (orders, None),
        Err(e) => {
            tracing::error!("Failed to fetch orders: {e}");
            (Vec::new(), Some("Error loading orders".to_string()))
        }
    };

    OrdersTemplate {
        shell: Shell::build("/orders", &admin, None),
        config: orders_table_config(),
        orders: orders.iter().map(OrderRow::from).collect(),
        load_error,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use bramble_core::{OrderId, OrderStatus, PaymentStatus, Price, UserId};
    use rust_decimal::Decimal;

    #[test]
    fn test_order_row_conversion() {
        let order = Order {
            id: OrderId::new(9),
            order_number: "ORD-20260201-0009".to_string(),
            user_id: UserId::new(2),
            status: OrderStatus::Pending,
            total_amount: Price::new(Decimal::new(9900, 2)),
            shipping_address: None,
            payment_method: None,
            payment_status: PaymentStatus::Pending,
            items: vec![],
            created_at: Some("2026-02-01T12:30:00".to_string()),
        };

        let row = OrderRow::from(&order);
        assert_eq!(row.total, "$99.00");
        assert_eq!(row.status, "pending");
        assert_eq!(row.item_count, 0);
        assert_eq!(row.placed, "Feb 1, 2026");
    }
}
