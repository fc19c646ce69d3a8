//! Integration tests for storefront session handling and page guards.
//!
//! These tests require:
//! - The remote Shop API running (`SHOP_API_URL`)
//! - The storefront running (cargo run -p bramble-storefront)
//! - A seeded test user (`testuser` / `password123`)
//!
//! Run with: cargo test -p bramble-integration-tests -- --ignored

use bramble_integration_tests::{session_client, storefront_base_url};
use reqwest::StatusCode;

/// Log the shared test user in, returning the cookie-holding client.
async fn login_test_user() -> reqwest::Client {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[("username", "testuser"), ("password", "password123")])
        .send()
        .await
        .expect("Failed to log in");

    // Successful login redirects to the product listing
    assert!(
        resp.status().is_redirection(),
        "Expected redirect after login, got: {}",
        resp.status()
    );

    client
}

// ============================================================================
// Page Guard Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront and Shop API"]
async fn test_guarded_pages_redirect_anonymous_visitors_to_login() {
    let client = session_client();
    let base_url = storefront_base_url();

    for page in ["/cart", "/orders", "/checkout"] {
        let resp = client
            .get(format!("{base_url}{page}"))
            .send()
            .await
            .expect("Failed to request guarded page");

        assert!(
            resp.status().is_redirection(),
            "{page} should redirect anonymous visitors, got: {}",
            resp.status()
        );

        let location = resp
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(
            location.starts_with("/login"),
            "{page} should redirect to /login, got: {location}"
        );
    }
}

#[tokio::test]
#[ignore = "Requires running storefront and Shop API"]
async fn test_products_page_is_public() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to request products page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Products"));
}

// ============================================================================
// Session Lifecycle Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront, Shop API, and seeded test user"]
async fn test_login_survives_reload_and_logout_clears_everything() {
    let client = login_test_user().await;
    let base_url = storefront_base_url();

    // A fresh request with the same cookie reaches the cart page
    let resp = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to request cart page");
    assert_eq!(resp.status(), StatusCode::OK);

    // Logout
    let resp = client
        .post(format!("{base_url}/logout"))
        .send()
        .await
        .expect("Failed to log out");
    assert!(resp.status().is_redirection());

    // Guarded pages redirect again
    let resp = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to request cart page");
    assert!(resp.status().is_redirection());

    // The badge shows zero for the logged-out session
    let resp = client
        .get(format!("{base_url}/cart/count"))
        .send()
        .await
        .expect("Failed to request cart count");
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains('0'));
}

#[tokio::test]
#[ignore = "Requires running storefront and Shop API"]
async fn test_bad_credentials_render_inline_error() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[("username", "testuser"), ("password", "wrong-password")])
        .send()
        .await
        .expect("Failed to post login");

    // No redirect - the login page is re-rendered with the remote message
    assert_eq!(resp.status(), StatusCode::OK);
}
