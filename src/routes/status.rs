use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    models::{StatusCheck, StatusCheckCreate},
    state::AppState,
};

/// Most records ever returned from a single list call.
const STATUS_LIST_LIMIT: usize = 1000;

/// Record a client liveness ping
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `input` - The ping body with the client's name
///
/// # Returns
///
/// The stored record, including its generated id and timestamp
pub async fn create_status_check(
    State(state): State<AppState>,
    Json(input): Json<StatusCheckCreate>,
) -> impl IntoResponse {
    let check = StatusCheck::new(input.client_name);

    let mut log = state.status_log.write().await;
    log.push(check.clone());

    tracing::debug!("Recorded status check from {}", check.client_name);

    (StatusCode::OK, Json(check))
}

/// List recorded pings, oldest first
///
/// # Returns
///
/// Up to the first 1000 records
pub async fn list_status_checks(State(state): State<AppState>) -> impl IntoResponse {
    let log = state.status_log.read().await;
    let checks: Vec<StatusCheck> = log.iter().take(STATUS_LIST_LIMIT).cloned().collect();

    (StatusCode::OK, Json(checks))
}
