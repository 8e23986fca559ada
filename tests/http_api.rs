//! Integration tests for the HTTP transport layer.
//!
//! These drive the axum router end to end over in-process storage and
//! verify status codes, error bodies, and the wire shape of records.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use dogshouse::server::HttpServer;
use dogshouse::service::DogService;
use dogshouse::storage::SqliteStorage;
use serde_json::{json, Value};
use serial_test::serial;
use tower::ServiceExt;

// ============================================================================
// Test Utilities
// ============================================================================

async fn test_router() -> Router {
    let storage = SqliteStorage::new_in_memory()
        .await
        .expect("Failed to create test storage");
    HttpServer::new(DogService::new(Arc::new(storage))).router()
}

async fn get(router: &Router, uri: &str) -> Response {
    router
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response")
}

async fn post_json(router: &Router, uri: &str, body: &Value) -> Response {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response")
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

fn dog_body(name: &str, color: &str, tail_length: i64, weight: i64) -> Value {
    json!({
        "name": name,
        "color": color,
        "tail_length": tail_length,
        "weight": weight,
    })
}

// ============================================================================
// Ping
// ============================================================================

#[tokio::test]
#[serial]
async fn test_ping_returns_version_string() {
    let router = test_router().await;

    let response = get(&router, "/ping").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Dogshouseservice.Version1.0.1");
}

// ============================================================================
// GET /dogs
// ============================================================================

#[tokio::test]
#[serial]
async fn test_list_empty_store() {
    let router = test_router().await;

    let response = get(&router, "/dogs").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
#[serial]
async fn test_list_returns_wire_shape_without_id() {
    let router = test_router().await;
    let created = post_json(&router, "/dog", &dog_body("Doggy", "red", 173, 33)).await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let response = get(&router, "/dogs").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!([{"name": "Doggy", "color": "red", "tail_length": 173, "weight": 33}])
    );
}

#[tokio::test]
#[serial]
async fn test_list_sorted_and_paged() {
    let router = test_router().await;
    for (name, color, tail, weight) in [
        ("Rex", "brown", 15, 20),
        ("Buddy", "white", 5, 25),
        ("Luna", "black", 10, 15),
    ] {
        let response = post_json(&router, "/dog", &dog_body(name, color, tail, weight)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(
        &router,
        "/dogs?attribute=weight&order=desc&pageNumber=1&pageSize=2",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let weights: Vec<i64> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|d| d["weight"].as_i64().expect("weight"))
        .collect();
    assert_eq!(weights, vec![25, 20]);
}

#[tokio::test]
#[serial]
async fn test_list_unpaired_sort_inputs_is_bad_request() {
    let router = test_router().await;

    let response = get(&router, "/dogs?attribute=name").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Invalid sorting inputs"})
    );
}

#[tokio::test]
#[serial]
async fn test_list_unknown_attribute_is_bad_request() {
    let router = test_router().await;

    let response = get(&router, "/dogs?attribute=banana&order=asc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Invalid attribute name"})
    );
}

#[tokio::test]
#[serial]
async fn test_list_unknown_order_is_bad_request() {
    let router = test_router().await;

    let response = get(&router, "/dogs?attribute=weight&order=ASC").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Invalid order name"})
    );
}

#[tokio::test]
#[serial]
async fn test_list_unpaired_paging_inputs_is_bad_request() {
    let router = test_router().await;

    let response = get(&router, "/dogs?pageSize=10").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Invalid paging inputs"})
    );
}

#[tokio::test]
#[serial]
async fn test_list_paging_below_one_is_bad_request() {
    let router = test_router().await;

    let response = get(&router, "/dogs?pageNumber=0&pageSize=10").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Invalid pageNumber or/and pageSize"})
    );
}

#[tokio::test]
#[serial]
async fn test_list_paging_overflow_is_bad_request() {
    let router = test_router().await;

    let uri = format!("/dogs?pageNumber={}&pageSize=2", i64::MAX);
    let response = get(&router, &uri).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Invalid pageNumber or/and pageSize"})
    );
}

// ============================================================================
// POST /dog
// ============================================================================

#[tokio::test]
#[serial]
async fn test_create_returns_created() {
    let router = test_router().await;

    let response = post_json(&router, "/dog", &dog_body("Rex", "brown", 10, 20)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
#[serial]
async fn test_create_duplicate_name_is_conflict() {
    let router = test_router().await;

    let first = post_json(&router, "/dog", &dog_body("Rex", "brown", 10, 20)).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(&router, "/dog", &dog_body("Rex", "black", 7, 25)).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(second).await,
        json!({"error": "Name is already taken"})
    );

    // Storage unmodified: still exactly one record
    let list = body_json(get(&router, "/dogs").await).await;
    assert_eq!(list.as_array().expect("array").len(), 1);
}

#[tokio::test]
#[serial]
async fn test_create_rejects_non_positive_tail_length() {
    let router = test_router().await;

    let response = post_json(&router, "/dog", &dog_body("Rex", "brown", 0, 20)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Tail length must be greater than 0"})
    );
}

#[tokio::test]
#[serial]
async fn test_create_rejects_non_positive_weight() {
    let router = test_router().await;

    let response = post_json(&router, "/dog", &dog_body("Rex", "brown", 10, 0)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Weight must be greater than 0"})
    );
}

#[tokio::test]
#[serial]
async fn test_create_rejects_empty_name() {
    let router = test_router().await;

    let response = post_json(&router, "/dog", &dog_body("", "brown", 10, 20)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Name must not be empty"})
    );
}

#[tokio::test]
#[serial]
async fn test_create_rejects_malformed_body() {
    let router = test_router().await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/dog")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .expect("request"),
        )
        .await
        .expect("response");

    // Malformed bodies are rejected by the binding layer before the core
    assert!(response.status().is_client_error());
}
