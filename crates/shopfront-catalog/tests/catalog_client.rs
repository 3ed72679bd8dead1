//! Integration tests for `CatalogClient`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers the happy paths and every error variant
//! `load_catalog` can propagate.

use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopfront_catalog::{CatalogClient, CatalogError};

/// Builds a `CatalogClient` suitable for tests: 5-second timeout,
/// descriptive UA.
fn test_client() -> CatalogClient {
    CatalogClient::new(5, "shopfront-test/0.1").expect("failed to build test CatalogClient")
}

/// Minimal valid one-product JSON fixture.
fn one_product_json(id: u64, price: f64) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Product {id}"),
        "price": price,
        "description": "A fine product.",
        "category": "electronics",
        "image": format!("https://img.example.com/{id}.jpg"),
        "rating": {"rate": 3.9, "count": 120}
    })
}

fn products_url(server: &MockServer) -> String {
    format!("{}/products", server.uri())
}

// ---------------------------------------------------------------------------
// happy paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn load_catalog_returns_empty_vec_for_empty_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([])))
        .mount(&server)
        .await;

    let result = test_client()
        .load_catalog(&products_url(&server), Decimal::ONE)
        .await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    assert!(result.unwrap().is_empty());
}

#[tokio::test]
async fn load_catalog_normalizes_every_record_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([
            one_product_json(1, 10.0),
            one_product_json(2, 2.5),
        ])))
        .mount(&server)
        .await;

    let rate = Decimal::new(835, 1); // 83.5
    let products = test_client()
        .load_catalog(&products_url(&server), rate)
        .await
        .expect("load_catalog");

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].price, Decimal::from(835));
    assert_eq!(products[1].price, Decimal::new(20_875, 2)); // 2.5 × 83.5
    assert_eq!(products[0].images.len(), 2, "image is duplicated");
    assert!(!products[0].in_wishlist);
}

#[tokio::test]
async fn client_sends_configured_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(header("user-agent", "shopfront-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client()
        .load_catalog(&products_url(&server), Decimal::ONE)
        .await;
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

// ---------------------------------------------------------------------------
// error variants
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_success_status_is_unexpected_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = test_client()
        .load_catalog(&products_url(&server), Decimal::ONE)
        .await
        .unwrap_err();

    assert!(
        matches!(err, CatalogError::UnexpectedStatus { status: 500, .. }),
        "expected UnexpectedStatus(500), got: {err:?}"
    );
}

#[tokio::test]
async fn not_found_is_unexpected_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = test_client()
        .load_catalog(&products_url(&server), Decimal::ONE)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CatalogError::UnexpectedStatus { status: 404, .. }
    ));
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"an array\"}"))
        .mount(&server)
        .await;

    let err = test_client()
        .load_catalog(&products_url(&server), Decimal::ONE)
        .await
        .unwrap_err();

    assert!(
        matches!(err, CatalogError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn record_missing_required_field_fails_the_whole_load() {
    let server = MockServer::start().await;

    // Second record has no rating object.
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([
            one_product_json(1, 10.0),
            {
                "id": 2,
                "title": "Broken",
                "price": 1.0,
                "description": "",
                "category": "electronics",
                "image": "https://img.example.com/2.jpg"
            },
        ])))
        .mount(&server)
        .await;

    let err = test_client()
        .load_catalog(&products_url(&server), Decimal::ONE)
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Deserialize { .. }));
}

#[tokio::test]
async fn negative_price_fails_normalization_with_no_partial_catalog() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([
            one_product_json(1, 10.0),
            one_product_json(2, -5.0),
        ])))
        .mount(&server)
        .await;

    let err = test_client()
        .load_catalog(&products_url(&server), Decimal::ONE)
        .await
        .unwrap_err();

    assert!(
        matches!(err, CatalogError::Normalization { id: 2, .. }),
        "expected Normalization for id 2, got: {err:?}"
    );
}

#[tokio::test]
async fn unreachable_server_is_http_error() {
    // Bind-then-drop to get a port with nothing listening. A raw
    // `TcpListener` is used because `MockServer::start` hands out pooled
    // servers whose socket stays open after the handle is dropped.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let addr = listener.local_addr().expect("no local addr");
    let url = format!("http://{addr}/products");
    drop(listener);

    let err = test_client()
        .load_catalog(&url, Decimal::ONE)
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Http(_)));
}
