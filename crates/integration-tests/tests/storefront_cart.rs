//! Integration tests for the cart flow.
//!
//! These tests require:
//! - The remote Shop API running with seeded products
//! - The storefront running (cargo run -p bramble-storefront)
//! - A seeded test user (`testuser` / `password123`)
//!
//! Run with: cargo test -p bramble-integration-tests -- --ignored

use bramble_integration_tests::{session_client, storefront_base_url};
use reqwest::StatusCode;

async fn login_test_user() -> reqwest::Client {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[("username", "testuser"), ("password", "password123")])
        .send()
        .await
        .expect("Failed to log in");
    assert!(resp.status().is_redirection());

    client
}

#[tokio::test]
#[ignore = "Requires running storefront, Shop API, and seeded data"]
async fn test_add_to_cart_updates_badge() {
    let client = login_test_user().await;
    let base_url = storefront_base_url();

    // Add one unit of product 1
    let resp = client
        .post(format!("{base_url}/cart/add"))
        .form(&[("product_id", "1"), ("quantity", "1")])
        .send()
        .await
        .expect("Failed to add to cart");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("hx-trigger")
            .and_then(|v| v.to_str().ok()),
        Some("cart-updated")
    );
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Added to cart!"));

    // The badge fragment reports a non-zero count
    let resp = client
        .get(format!("{base_url}/cart/count"))
        .send()
        .await
        .expect("Failed to request cart count");
    let body = resp.text().await.expect("Failed to read response");
    assert!(!body.contains(">0<"), "Badge should not be zero: {body}");
}

#[tokio::test]
#[ignore = "Requires running storefront, Shop API, and seeded data"]
async fn test_zero_quantity_is_rejected_locally() {
    let client = login_test_user().await;
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/cart/add"))
        .form(&[("product_id", "1"), ("quantity", "0")])
        .send()
        .await
        .expect("Failed to post add form");

    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Quantity must be at least 1"));
}

#[tokio::test]
#[ignore = "Requires running storefront, Shop API, and seeded data"]
async fn test_overlarge_quantity_surfaces_server_rejection() {
    let client = login_test_user().await;
    let base_url = storefront_base_url();

    // Far beyond any seeded product's stock
    let resp = client
        .post(format!("{base_url}/cart/add"))
        .form(&[("product_id", "1"), ("quantity", "999999")])
        .send()
        .await
        .expect("Failed to post add form");

    // The rejection message is rendered, and no cart-updated trigger fires
    assert!(resp.headers().get("hx-trigger").is_none());
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("error"));
}

#[tokio::test]
#[ignore = "Requires running storefront, Shop API, and seeded data"]
async fn test_remove_from_cart_returns_items_fragment() {
    let client = login_test_user().await;
    let base_url = storefront_base_url();

    // Make sure something is in the cart first
    let _ = client
        .post(format!("{base_url}/cart/add"))
        .form(&[("product_id", "1"), ("quantity", "1")])
        .send()
        .await;

    let resp = client
        .post(format!("{base_url}/cart/remove"))
        .form(&[("product_id", "1")])
        .send()
        .await
        .expect("Failed to remove from cart");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("hx-trigger")
            .and_then(|v| v.to_str().ok()),
        Some("cart-updated")
    );
}
