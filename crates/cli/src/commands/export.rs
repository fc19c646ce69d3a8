//! CSV export command.
//!
//! Fetches the requested records from the Shop API and writes the same
//! delimited text the dashboard's export buttons serve.

use std::path::Path;

use bramble_admin::api::AdminClient;
use bramble_admin::export::{
    ORDER_FIELDS, PRODUCT_FIELDS, USER_FIELDS, records_to_values, to_delimited_text,
};

/// Which record listing to export.
#[derive(Clone, Copy, Debug)]
pub enum ExportKind {
    Users,
    Orders,
    Products,
}

impl ExportKind {
    const fn default_filename(self) -> &'static str {
        match self {
            Self::Users => "users.csv",
            Self::Orders => "orders.csv",
            Self::Products => "products.csv",
        }
    }
}

/// Run the export.
///
/// # Errors
///
/// Returns an error if the fetch fails or the output file cannot be
/// written.
pub async fn run(
    api_url: &str,
    kind: ExportKind,
    out: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let api = AdminClient::new(api_url);

    let (values, fields) = match kind {
        ExportKind::Users => (records_to_values(&api.users().await?)?, USER_FIELDS),
        ExportKind::Orders => (records_to_values(&api.orders().await?)?, ORDER_FIELDS),
        ExportKind::Products => (records_to_values(&api.products().await?)?, PRODUCT_FIELDS),
    };

    let csv = to_delimited_text(&values, fields);

    match out {
        Some(path) => {
            std::fs::write(path, &csv)?;
            tracing::info!(
                "Wrote {} rows to {}",
                values.len(),
                path.display()
            );
        }
        None => {
            // stdout is the deliverable here, not a log stream
            #[allow(clippy::print_stdout)]
            {
                println!("{csv}");
            }
            tracing::debug!(
                "Exported {} rows ({})",
                values.len(),
                kind.default_filename()
            );
        }
    }

    Ok(())
}
