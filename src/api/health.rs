//! Health and readiness probes

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::state::AppState;
use crate::api::types::ApiError;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness: the process is up and serving
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Liveness alias for orchestrators that probe /live
pub async fn live() -> Json<HealthResponse> {
    health().await
}

/// Readiness: storage answers queries
pub async fn ready(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let users = state.user_service.count().await?;
    let tweets = state.tweet_service.count().await?;

    Ok(Json(json!({
        "status": "ready",
        "users": users,
        "tweets": tweets,
    })))
}
