//! Stats command.

use bramble_admin::api::AdminClient;

/// Print the dashboard counters.
///
/// # Errors
///
/// Returns an error if the fetch fails.
pub async fn run(api_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let api = AdminClient::new(api_url);
    let stats = api.stats().await?;

    #[allow(clippy::print_stdout)]
    {
        println!("Users:    {}", stats.total_users);
        println!("Products: {}", stats.total_products);
        println!("Orders:   {}", stats.total_orders);
        println!("Revenue:  {}", stats.total_revenue);
    }

    Ok(())
}
