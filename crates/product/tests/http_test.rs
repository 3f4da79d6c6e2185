mod common;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use common::test_app;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, header::HeaderMap, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, bytes.to_vec())
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn as_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

fn price_of(body: &Value) -> Decimal {
    body["price"].to_string().parse().unwrap()
}

#[tokio::test]
async fn create_update_delete_lifecycle() {
    let (_, app) = test_app();

    let (status, headers, bytes) = send(
        &app,
        json_request(
            "POST",
            "/products",
            json!({"name": "Pen", "description": "", "price": 10}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers[header::LOCATION], "/products/1");

    let created = as_json(&bytes);
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Pen");
    assert_eq!(created["price"].to_string(), "10.00");
    assert!(created["createdAt"].is_string());
    assert!(created["updatedAt"].is_null());

    let (status, _, bytes) = send(
        &app,
        json_request(
            "PUT",
            "/products/1",
            json!({"id": 1, "name": "Pen X", "description": "", "price": 12}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let updated = as_json(&bytes);
    assert_eq!(updated["name"], "Pen X");
    assert_eq!(price_of(&updated), Decimal::new(1200, 2));
    assert!(updated["updatedAt"].is_string());

    let (status, _, bytes) = send(&app, empty_request("DELETE", "/products/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&bytes)["status"], "success");

    let (status, _, bytes) = send(&app, empty_request("GET", "/products/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(as_json(&bytes)["status"], "error");
}

#[tokio::test]
async fn list_returns_created_products() {
    let (_, app) = test_app();

    for name in ["Pen", "Pencil"] {
        let (status, _, _) = send(
            &app,
            json_request("POST", "/products", json!({"name": name, "price": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, _, bytes) = send(&app, empty_request("GET", "/products")).await;
    assert_eq!(status, StatusCode::OK);

    let body = as_json(&bytes);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1]["name"], "Pencil");
    assert_eq!(list[1]["description"], "");
}

#[tokio::test]
async fn path_id_wins_over_body_id_on_update() {
    let (_, app) = test_app();

    send(
        &app,
        json_request("POST", "/products", json!({"name": "Pen", "price": 10})),
    )
    .await;

    let (status, _, bytes) = send(
        &app,
        json_request(
            "PUT",
            "/products/1",
            json!({"id": 7, "name": "Pen X", "price": 12}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&bytes)["id"], 1);
}

#[tokio::test]
async fn updated_prices_are_stored_with_two_places() {
    let (_, app) = test_app();

    send(
        &app,
        json_request("POST", "/products", json!({"name": "Pen", "price": 10})),
    )
    .await;

    let (status, _, bytes) = send(
        &app,
        json_request("PUT", "/products/1", json!({"name": "Pen", "price": 12})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&bytes)["price"].to_string(), "12.00");

    let request = Request::builder()
        .method("PUT")
        .uri("/products/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"Pen","price":12.345}"#))
        .unwrap();
    let (status, _, bytes) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&bytes)["price"].to_string(), "12.35");
}

#[tokio::test]
async fn null_description_is_treated_as_empty() {
    let (_, app) = test_app();

    let (status, _, bytes) = send(
        &app,
        json_request(
            "POST",
            "/products",
            json!({"name": "Pen", "description": null, "price": 10}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(as_json(&bytes)["description"], "");
}

#[tokio::test]
async fn invalid_input_is_rejected_before_storage() {
    let (store, app) = test_app();

    let (status, _, bytes) = send(
        &app,
        json_request("POST", "/products", json!({"description": "", "price": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body = as_json(&bytes);
    assert_eq!(body["error"], "Validation failed");
    assert!(body["details"]["name"].is_array());

    let (status, _, bytes) = send(
        &app,
        json_request("POST", "/products", json!({"name": "Pen", "price": -1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(as_json(&bytes)["details"]["price"].is_array());

    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn malformed_requests_are_bad_requests() {
    let (_, app) = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": \"Pen\","))
        .unwrap();
    let (status, _, bytes) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(as_json(&bytes)["error"], "Invalid JSON");

    let (status, _, _) = send(
        &app,
        json_request("POST", "/products", json!({"name": "Pen", "price": "ten"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = send(&app, empty_request("GET", "/products/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn absent_targets_are_not_found() {
    let (_, app) = test_app();

    let (status, _, _) = send(&app, empty_request("GET", "/products/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = send(
        &app,
        json_request(
            "PUT",
            "/products/42",
            json!({"name": "Ghost", "price": 1}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, bytes) = send(&app, empty_request("DELETE", "/products/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(as_json(&bytes)["message"], "Product with ID 42 not found");
}

#[tokio::test]
async fn storage_errors_are_internal_server_errors() {
    let (store, app) = test_app();
    store.fail_all();

    let (status, _, bytes) = send(&app, empty_request("GET", "/products")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let body = as_json(&bytes);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Database error");
}

#[tokio::test]
async fn health_and_metrics_endpoints_respond() {
    let (_, app) = test_app();

    let (status, _, bytes) = send(&app, empty_request("GET", "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"Healthy");

    send(
        &app,
        json_request("POST", "/products", json!({"name": "Pen", "price": 10})),
    )
    .await;

    let (status, headers, bytes) = send(&app, empty_request("GET", "/metrics")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/openmetrics-text")
    );

    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains(
        r#"product_command_service_request_counter_total{method="Post",status="Success"} 1"#
    ));
    assert!(text.contains("process_start_time_seconds"));
}
