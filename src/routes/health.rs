use axum::{http::StatusCode, response::IntoResponse, Json};

/// API root - identifies the service
///
/// # Returns
///
/// JSON banner message
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({"message": "BoxFit Game API"})),
    )
}

/// Health check endpoint
///
/// # Returns
///
/// JSON response with status
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}
