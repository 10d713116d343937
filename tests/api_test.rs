//! Integration tests driving the router directly, without a listener.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt; // for oneshot

use mockapi::api::{create_router, AppState};
use mockapi::fixture::FixtureStore;

fn app_with_fixture_dir(dir: &TempDir) -> axum::Router {
    let store = FixtureStore::new(
        dir.path().join("transactions.json"),
        dir.path().join("water_measurements.json"),
    );
    create_router(AppState::new(store))
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, content_type, value)
}

fn expected_numbers() -> Value {
    json!([
        { "id": 1, "name": "one", "description": "The number one" },
        { "id": 2, "name": "two", "description": "The number two" },
        { "id": 3, "name": "three", "description": "The number three" },
        { "id": 4, "name": "four", "description": "The number four" },
        { "id": 5, "name": "five", "description": "The number five" },
        { "id": 6, "name": "six", "description": "The number six" },
        { "id": 7, "name": "seven", "description": "The number seven" },
    ])
}

#[tokio::test]
async fn numbers_returns_fixed_seven_records() {
    let dir = TempDir::new().unwrap();
    let (status, content_type, body) = get_json(app_with_fixture_dir(&dir), "/api/numbers").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/json"));
    assert_eq!(body, expected_numbers());
}

#[tokio::test]
async fn numbers_ignores_method_and_body() {
    let dir = TempDir::new().unwrap();
    let app = app_with_fixture_dir(&dir);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/numbers")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"ignored": true}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, expected_numbers());
}

#[tokio::test]
async fn transactions_serves_fixture_contents() {
    let dir = TempDir::new().unwrap();
    let fixture = json!([
        { "transaction_id": "tx-1", "amount": 12.37 },
        { "transaction_id": "tx-2", "amount": 990.25 },
    ]);
    std::fs::write(
        dir.path().join("transactions.json"),
        fixture.to_string(),
    )
    .unwrap();

    let (status, content_type, body) =
        get_json(app_with_fixture_dir(&dir), "/api/transactions").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/json"));
    assert_eq!(body, fixture);
}

#[tokio::test]
async fn transactions_missing_fixture_returns_empty_object() {
    let dir = TempDir::new().unwrap();
    let (status, content_type, body) =
        get_json(app_with_fixture_dir(&dir), "/api/transactions").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/json"));
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn transactions_invalid_fixture_returns_empty_object() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("transactions.json"), "not valid json {").unwrap();

    let (status, _, body) = get_json(app_with_fixture_dir(&dir), "/api/transactions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn water_measurements_serves_fixture_contents() {
    let dir = TempDir::new().unwrap();
    let fixture = json!([
        { "timestamp": "2023-01-01T00:00:00Z", "name": "withdrawal", "value": 376.0 },
    ]);
    std::fs::write(
        dir.path().join("water_measurements.json"),
        fixture.to_string(),
    )
    .unwrap();

    let (status, content_type, body) =
        get_json(app_with_fixture_dir(&dir), "/api/water-measurements").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/json"));
    assert_eq!(body, fixture);
}

#[tokio::test]
async fn water_measurements_missing_fixture_returns_empty_object() {
    let dir = TempDir::new().unwrap();
    let (status, _, body) =
        get_json(app_with_fixture_dir(&dir), "/api/water-measurements").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn health_reports_fixture_presence() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("transactions.json"), "[]").unwrap();

    let (status, _, body) = get_json(app_with_fixture_dir(&dir), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["fixtures"]["transactions"], json!(true));
    assert_eq!(body["fixtures"]["water_measurements"], json!(false));
}
