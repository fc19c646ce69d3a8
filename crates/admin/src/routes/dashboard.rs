//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use tracing::instrument;

use crate::api::types::Stats;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

use super::{Flash, MessageQuery, Shell};

/// Dashboard stat tiles.
#[derive(Debug, Clone)]
pub struct StatsView {
    pub total_users: String,
    pub total_products: String,
    pub total_orders: String,
    pub total_revenue: String,
}

impl Default for StatsView {
    fn default() -> Self {
        Self {
            total_users: "0".to_string(),
            total_products: "0".to_string(),
            total_orders: "0".to_string(),
            total_revenue: "$0.00".to_string(),
        }
    }
}

impl From<&Stats> for StatsView {
    fn from(stats: &Stats) -> Self {
        Self {
            total_users: stats.total_users.to_string(),
            total_products: stats.total_products.to_string(),
            total_orders: stats.total_orders.to_string(),
            total_revenue: stats.total_revenue.to_string(),
        }
    }
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub shell: Shell,
    pub stats: StatsView,
    pub load_error: Option<String>,
}

/// Dashboard page handler.
#[instrument(skip(state, admin, query))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let flash = Flash::from_query(query.error.as_deref(), query.success.as_deref());

    let (stats, load_error) = match state.api().stats().await {
        Ok(stats) => (StatsView::from(&stats), None),
        Err(e) => {
            tracing::error!("Failed to fetch stats: {e}");
            (
                StatsView::default(),
                Some("Error loading statistics".to_string()),
            )
        }
    };

    DashboardTemplate {
        shell: Shell::build("/", &admin, flash),
        stats,
        load_error,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use bramble_core::Price;
    use rust_decimal::Decimal;

    #[test]
    fn test_stats_view_formats_revenue() {
        let stats = Stats {
            total_users: 12,
            total_products: 34,
            total_orders: 7,
            total_revenue: Price::new(Decimal::new(123_456, 2)),
        };
        let view = StatsView::from(&stats);
        assert_eq!(view.total_revenue, "$1234.56");
        assert_eq!(view.total_orders, "7");
    }

    #[test]
    fn test_default_view_is_zeroed() {
        let view = StatsView::default();
        assert_eq!(view.total_revenue, "$0.00");
        assert_eq!(view.total_users, "0");
    }
}
