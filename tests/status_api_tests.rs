//! Integration tests for the HTTP surface: API banner, health check, and
//! the status-check log.

use axum::routing::{get, post};
use axum_test::TestServer;
use boxfit::{routes, state::AppState};
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Helper to create a test server with the full app configuration
fn create_test_server() -> TestServer {
    let state = AppState::new();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = axum::Router::new()
        .route("/api", get(routes::health::root))
        .route("/health", get(routes::health::health_check))
        .route(
            "/api/status",
            post(routes::status::create_status_check).get(routes::status::list_status_checks),
        )
        .route(
            "/api/ws/:room_key/:player_name",
            get(routes::websocket::websocket_handler),
        )
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_api_root_returns_banner() {
    let server = create_test_server();

    let response = server.get("/api").await;
    response.assert_status_ok();

    let json: Value = serde_json::from_str(&response.text()).unwrap();
    assert_eq!(json["message"], "BoxFit Game API");
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let json: Value = serde_json::from_str(&response.text()).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_create_status_check_returns_record() {
    let server = create_test_server();

    let response = server
        .post("/api/status")
        .json(&serde_json::json!({"client_name": "probe-1"}))
        .await;
    response.assert_status_ok();

    let json: Value = serde_json::from_str(&response.text()).unwrap();
    assert_eq!(json["client_name"], "probe-1");
    assert!(json["id"].is_string());
    assert!(!json["id"].as_str().unwrap().is_empty());
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_status_checks_are_listed_oldest_first() {
    let server = create_test_server();

    let empty: Value = serde_json::from_str(&server.get("/api/status").await.text()).unwrap();
    assert_eq!(empty.as_array().unwrap().len(), 0);

    for name in ["first", "second", "third"] {
        server
            .post("/api/status")
            .json(&serde_json::json!({"client_name": name}))
            .await
            .assert_status_ok();
    }

    let listed: Value = serde_json::from_str(&server.get("/api/status").await.text()).unwrap();
    let records = listed.as_array().unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["client_name"], "first");
    assert_eq!(records[2]["client_name"], "third");
}

#[tokio::test]
async fn test_status_check_ids_are_unique() {
    let server = create_test_server();

    let first: Value = serde_json::from_str(
        &server
            .post("/api/status")
            .json(&serde_json::json!({"client_name": "probe"}))
            .await
            .text(),
    )
    .unwrap();
    let second: Value = serde_json::from_str(
        &server
            .post("/api/status")
            .json(&serde_json::json!({"client_name": "probe"}))
            .await
            .text(),
    )
    .unwrap();

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_create_status_check_rejects_missing_name() {
    let server = create_test_server();

    let response = server
        .post("/api/status")
        .json(&serde_json::json!({"unexpected": true}))
        .await;

    assert!(!response.status_code().is_success());
}
