//! Shared helpers for Bramble Market integration tests.
//!
//! The tests in `tests/` drive running binaries over HTTP. They are
//! `#[ignore]`d by default because they need:
//! - The remote Shop API running (`SHOP_API_URL`)
//! - The storefront running (`STOREFRONT_BASE_URL`, default port 3000)
//! - The admin dashboard running (`ADMIN_BASE_URL`, default port 3001)

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the admin dashboard (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Create an HTTP client that holds session cookies across requests.
///
/// # Panics
///
/// Panics if the client cannot be constructed (test environment bug).
#[must_use]
#[allow(clippy::expect_used)]
pub fn session_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}
