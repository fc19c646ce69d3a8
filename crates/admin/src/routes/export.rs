//! CSV export handlers.
//!
//! Each handler fetches the current records, projects them through the
//! exporter, and answers a `text/csv` attachment.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::instrument;

use crate::error::AdminError;
use crate::export::{
    ORDER_FIELDS, PRODUCT_FIELDS, USER_FIELDS, records_to_values, to_delimited_text,
};
use crate::middleware::RequireAdminAuth;
use crate::state::AppState;

/// Build a CSV attachment response.
fn csv_attachment(filename: &str, body: String) -> Response {
    (
        StatusCode::OK,
        [
            ("Content-Type", "text/csv; charset=utf-8".to_string()),
            (
                "Content-Disposition",
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}

/// `users.csv` export handler.
///
/// # Errors
///
/// Returns 502 if the user listing cannot be fetched.
#[instrument(skip(state))]
pub async fn users_csv(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Response, AdminError> {
    let users = state.api().users().await?;
    let values = records_to_values(&users)
        .map_err(|e| AdminError::Internal(format!("serializing users: {e}")))?;
    Ok(csv_attachment(
        "users.csv",
        to_delimited_text(&values, USER_FIELDS),
    ))
}

/// `orders.csv` export handler.
///
/// # Errors
///
/// Returns 502 if the order listing cannot be fetched.
#[instrument(skip(state))]
pub async fn orders_csv(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Response, AdminError> {
    let orders = state.api().orders().await?;
    let values = records_to_values(&orders)
        .map_err(|e| AdminError::Internal(format!("serializing orders: {e}")))?;
    Ok(csv_attachment(
        "orders.csv",
        to_delimited_text(&values, ORDER_FIELDS),
    ))
}

/// `products.csv` export handler.
///
/// # Errors
///
/// Returns 502 if the catalog cannot be fetched.
#[instrument(skip(state))]
pub async fn products_csv(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Response, AdminError> {
    let products = state.api().products().await?;
    let values = records_to_values(&products)
        .map_err(|e| AdminError::Internal(format!("serializing products: {e}")))?;
    Ok(csv_attachment(
        "products.csv",
        to_delimited_text(&values, PRODUCT_FIELDS),
    ))
}
