//! Handler tests for Products domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes and the Location header
//! - Error responses
//!
//! Only the products router is exercised here, mounted at the root; the
//! assembled application is covered by the products-api end-to-end tests.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_helpers::ErrorResponse;
use domain_products::models::DESCRIPTION_MAX_LEN;
use domain_products::*;
use http_body_util::BodyExt;
use rust_decimal::dec;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn seeded_app() -> axum::Router {
    let service = ProductService::new(InMemoryProductRepository::with_seed_data());
    handlers::router(service)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_list_products_returns_seed() {
    let response = seeded_app().oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[tokio::test]
async fn test_get_product_returns_200() {
    let response = seeded_app()
        .oneshot(empty_request("GET", "/2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.name, "Mouse");
    assert_eq!(product.stock, 50);
}

#[tokio::test]
async fn test_get_missing_product_returns_404() {
    let response = seeded_app()
        .oneshot(empty_request("GET", "/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "NOT_FOUND");
    assert_eq!(error.message, "Product 999 not found");
}

#[tokio::test]
async fn test_get_non_positive_id_returns_400() {
    let response = seeded_app().oneshot(empty_request("GET", "/0")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "Invalid product ID");
}

#[tokio::test]
async fn test_non_numeric_id_returns_400() {
    let response = seeded_app()
        .oneshot(empty_request("GET", "/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "INVALID_ID");
}

#[tokio::test]
async fn test_create_product_returns_201_with_location() {
    let request = json_request(
        "POST",
        "/",
        json!({
            "name": "Monitor",
            "description": "27 inch display",
            "price": 199.5,
            "stock": 4
        }),
    );

    let response = seeded_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/products/4"
    );

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, 4);
    assert_eq!(product.name, "Monitor");
    assert_eq!(product.stock, 4);
}

#[tokio::test]
async fn test_create_product_keeps_price_precision() {
    let app = seeded_app();
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"name":"X","price":12345678901234.56789,"stock":1}"#,
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains(r#""price":12345678901234.56789"#), "body: {text}");

    let response = app.oneshot(empty_request("GET", "/4")).await.unwrap();
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.price, dec!(12345678901234.56789));
}

#[tokio::test]
async fn test_create_product_rejects_overlong_description() {
    let request = json_request(
        "POST",
        "/",
        json!({
            "name": "Cable",
            "description": "d".repeat(DESCRIPTION_MAX_LEN + 1),
            "price": 5,
            "stock": 1
        }),
    );

    let response = seeded_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "VALIDATION_ERROR");
    assert!(error.message.contains("Description must be at most"));
}

#[tokio::test]
async fn test_create_product_rejects_blank_name() {
    let request = json_request("POST", "/", json!({ "name": "  ", "price": 5, "stock": 1 }));

    let response = seeded_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "VALIDATION_ERROR");
    assert_eq!(error.message, "Product name is required");
}

#[tokio::test]
async fn test_create_product_rejects_missing_price() {
    let request = json_request("POST", "/", json!({ "name": "Cable", "stock": 1 }));

    let response = seeded_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "Price must be greater than 0");
}

#[tokio::test]
async fn test_create_product_rejects_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = seeded_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_update_product_returns_200() {
    let request = json_request(
        "PUT",
        "/3",
        json!({ "name": "Keyboard TKL", "price": 89.99, "stock": 25 }),
    );

    let response = seeded_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, 3);
    assert_eq!(product.name, "Keyboard TKL");
    assert_eq!(product.description, None);
    assert!(product.updated_at.is_some());
}

#[tokio::test]
async fn test_update_missing_product_returns_404_even_when_invalid() {
    let request = json_request("PUT", "/404", json!({ "name": "", "price": 0 }));

    let response = seeded_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_existing_product_with_invalid_price_returns_400() {
    let app = seeded_app();

    let request = json_request("PUT", "/1", json!({ "name": "Laptop", "price": -10 }));
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "Price must be greater than 0");

    let response = app.oneshot(empty_request("GET", "/1")).await.unwrap();
    let product: Product = json_body(response.into_body()).await;
    assert!(product.updated_at.is_none());
    assert_eq!(product.stock, 10);
}

#[tokio::test]
async fn test_update_existing_product_with_blank_name_returns_400() {
    let app = seeded_app();

    let request = json_request("PUT", "/2", json!({ "name": "", "price": 35, "stock": 5 }));
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "Product name is required");

    let response = app.oneshot(empty_request("GET", "/2")).await.unwrap();
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.name, "Mouse");
    assert_eq!(product.price, dec!(29.99));
    assert!(product.updated_at.is_none());
}

#[tokio::test]
async fn test_delete_product_returns_204_then_404() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(empty_request("DELETE", "/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_products() {
    let response = seeded_app()
        .oneshot(empty_request("GET", "/search?term=LaPtOp"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Laptop");
}

#[tokio::test]
async fn test_search_without_term_returns_everything() {
    let app = seeded_app();

    for uri in ["/search", "/search?term=", "/search?term=%20%20"] {
        let response = app.clone().oneshot(empty_request("GET", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let products: Vec<Product> = json_body(response.into_body()).await;
        assert_eq!(products.len(), 3, "uri: {uri}");
    }
}
