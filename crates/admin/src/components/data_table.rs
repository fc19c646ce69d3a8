//! Data table component types.
//!
//! These types define the configuration for the dashboard's record
//! tables: column headers and the placeholder shown instead of an empty
//! table body.

/// Column definition for a data table.
#[derive(Debug, Clone)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: &'static str,
    /// Display label for the column header.
    pub label: &'static str,
}

impl TableColumn {
    /// Create a new column.
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: &'static str,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Placeholder row text when there are no records.
    pub empty_title: &'static str,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &'static str, empty_title: &'static str) -> Self {
        Self {
            table_id,
            columns: vec![],
            empty_title,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, key: &'static str, label: &'static str) -> Self {
        self.columns.push(TableColumn::new(key, label));
        self
    }

    /// Number of columns, used for the placeholder row's colspan.
    #[must_use]
    pub fn colspan(&self) -> usize {
        self.columns.len()
    }
}

/// Build the users table configuration.
#[must_use]
pub fn users_table_config() -> DataTableConfig {
    DataTableConfig::new("users", "No users found")
        .column("id", "ID")
        .column("username", "Username")
        .column("email", "Email")
        .column("full_name", "Full Name")
        .column("role", "Role")
        .column("created", "Joined")
}

/// Build the orders table configuration.
#[must_use]
pub fn orders_table_config() -> DataTableConfig {
    DataTableConfig::new("orders", "No orders found")
        .column("order_number", "Order #")
        .column("user_id", "User")
        .column("total", "Total")
        .column("status", "Status")
        .column("items", "Items")
        .column("created", "Placed")
}

/// Build the products table configuration.
#[must_use]
pub fn products_table_config() -> DataTableConfig {
    DataTableConfig::new("products", "No products found")
        .column("id", "ID")
        .column("name", "Name")
        .column("price", "Price")
        .column("stock", "Stock")
        .column("category", "Category")
        .column("actions", "Actions")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colspan_matches_column_count() {
        let config = users_table_config();
        assert_eq!(config.colspan(), 6);
        assert_eq!(config.columns[0].label, "ID");
    }

    #[test]
    fn test_table_ids_are_distinct() {
        let ids = [
            users_table_config().table_id,
            orders_table_config().table_id,
            products_table_config().table_id,
        ];
        assert_eq!(
            ids.len(),
            ids.iter().collect::<std::collections::HashSet<_>>().len()
        );
    }
}
