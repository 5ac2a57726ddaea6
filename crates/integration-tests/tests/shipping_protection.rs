//! Integration tests for the shipping protection endpoints.
//!
//! These tests require:
//! - The API server running (cargo run -p shipping-protection-api)
//! - Valid Shopify credentials for a development store in its environment
//!
//! Run with: cargo test -p shipping-protection-integration-tests -- --ignored

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use serde_json::{Value, json};
use shipping_protection_core::ShippingProtectionDefaults;
use shipping_protection_integration_tests::{TestContext, unique_tag};

fn variant_input(value: &str) -> Value {
    json!([{
        "price": "1.00",
        "optionValues": [{
            "optionName": ShippingProtectionDefaults::OPTION_NAME,
            "name": value
        }],
        "inventoryItem": { "requiresShipping": false }
    }])
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
#[ignore = "requires a running server"]
async fn test_health() {
    let ctx = TestContext::new();

    let resp = ctx.get("/health").await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

// ============================================================================
// Lookups without parameters
// ============================================================================

#[tokio::test]
#[ignore = "requires a running server"]
async fn test_products_without_id_or_tag() {
    let ctx = TestContext::new();

    let resp = ctx.get("/shipping-protection/products").await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "You did not provide an id or tag");
}

#[tokio::test]
#[ignore = "requires a running server"]
async fn test_variants_without_id_or_query() {
    let ctx = TestContext::new();

    let resp = ctx
        .get("/shipping-protection/variants?field=sku")
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Invalid shipping protection ID or query");
}

#[tokio::test]
#[ignore = "requires a running server"]
async fn test_create_with_empty_body() {
    let ctx = TestContext::new();

    let resp = ctx
        .post_json("/shipping-protection", &json!([]))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Round trip (creates products in the store)
// ============================================================================

async fn product_count(ctx: &TestContext, tag: &str) -> usize {
    let products: Value = ctx
        .get(&format!("/shipping-protection/products?tag={tag}"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    products.as_array().unwrap().len()
}

#[tokio::test]
#[ignore = "requires a running server and creates Shopify products"]
async fn test_create_then_read_back() {
    let ctx = TestContext::new();
    let sku = unique_tag();
    let mut input = variant_input(&sku);
    input[0]["inventoryItem"]["sku"] = json!(sku);

    let resp = ctx.post_json("/shipping-protection", &input).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let variant: Value = resp.json().await.unwrap();
    let variant_id = variant["id"].as_str().unwrap().to_string();
    assert!(variant_id.starts_with("gid://shopify/ProductVariant/"));

    let numeric_variant_id = variant_id.rsplit('/').next().unwrap();
    let resp = ctx
        .get(&format!("/shipping-protection/variants/{numeric_variant_id}"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched["id"], variant_id.as_str());

    let resp = ctx
        .get(&format!("/shipping-protection/variants?field=sku&value={sku}"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let by_sku: Value = resp.json().await.unwrap();
    assert_eq!(by_sku["id"], variant_id.as_str());

    // Every bucket under the default tag stays within capacity and carries the option
    let products: Value = ctx
        .get(&format!(
            "/shipping-protection/products?tag={}",
            ShippingProtectionDefaults::TAG
        ))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let products = products.as_array().unwrap();
    assert!(!products.is_empty());
    for product in products {
        assert!(product["variantsCount"]["count"].as_i64().unwrap() <= 100);
    }
    assert!(products.iter().any(|p| {
        p["variants"]["nodes"][0]["selectedOptions"]
            .as_array()
            .is_some_and(|options| {
                options
                    .iter()
                    .any(|o| o["name"] == ShippingProtectionDefaults::OPTION_NAME)
            })
    }));
}

#[tokio::test]
#[ignore = "requires a running server and creates Shopify products"]
async fn test_second_create_reuses_bucket() {
    let ctx = TestContext::new();
    let before = product_count(&ctx, ShippingProtectionDefaults::TAG).await;

    for value in ["IT 2.00", "IT 3.00"] {
        let resp = ctx
            .post_json("/shipping-protection", &variant_input(value))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    // At most one new bucket, even if the first create filled the last one
    let after = product_count(&ctx, ShippingProtectionDefaults::TAG).await;
    assert!(after <= before + 1);
}

#[tokio::test]
#[ignore = "requires a running server and creates Shopify products"]
async fn test_custom_tag_bucket_is_created_under_default_tag() {
    let ctx = TestContext::new();
    let tag = unique_tag();

    let resp = ctx
        .post_json(
            &format!("/shipping-protection?tag={tag}"),
            &variant_input("IT 4.00"),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(product_count(&ctx, &tag).await, 0);
}
