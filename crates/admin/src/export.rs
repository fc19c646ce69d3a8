//! Delimited-text export of record lists.
//!
//! The dashboard's export buttons and the CLI both project fetched
//! records onto a fixed field list and hand the result over as a
//! `.csv` download. The transform itself is pure and synchronous.
//!
//! Format:
//! - first row: the field names, unquoted
//! - one row per record; every value double-quoted, embedded quotes
//!   doubled, null/absent values as an empty quoted field
//! - fields joined with `,`, rows joined with `\n`, no trailing newline

use serde_json::Value;

/// Field order for `users.csv`.
pub const USER_FIELDS: &[&str] = &[
    "id",
    "username",
    "email",
    "full_name",
    "is_admin",
    "created_at",
];

/// Field order for `orders.csv`.
pub const ORDER_FIELDS: &[&str] = &[
    "order_number",
    "user_id",
    "total_amount",
    "status",
    "shipping_address",
    "created_at",
];

/// Field order for `products.csv`.
pub const PRODUCT_FIELDS: &[&str] = &[
    "id",
    "name",
    "price",
    "stock_quantity",
    "category",
    "created_at",
];

/// Project `records` onto `fields` as delimited text.
///
/// An empty record list produces exactly the header row.
#[must_use]
pub fn to_delimited_text(records: &[Value], fields: &[&str]) -> String {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(fields.join(","));

    for record in records {
        let row = fields
            .iter()
            .map(|field| quote(record.get(*field)))
            .collect::<Vec<_>>()
            .join(",");
        rows.push(row);
    }

    rows.join("\n")
}

/// Quote a single value, doubling embedded quote characters.
fn quote(value: Option<&Value>) -> String {
    let text = match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Serialize API records into exportable JSON values.
///
/// # Errors
///
/// Returns an error if a record fails to serialize (a bug in the record
/// type rather than a runtime condition).
pub fn records_to_values<T: serde::Serialize>(
    records: &[T],
) -> Result<Vec<Value>, serde_json::Error> {
    records.iter().map(serde_json::to_value).collect()
}
