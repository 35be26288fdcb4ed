use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::api::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub provider: String,
    pub model: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Ready once a provider credential is configured. Does not call the
/// provider.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    let llm = &state.config.config.llm;
    let is_ready = llm.api_key.is_some();

    let response = ReadinessResponse {
        status: if is_ready { "ready" } else { "not_ready" }.into(),
        provider: if is_ready { "configured" } else { "missing_api_key" }.into(),
        model: llm.model.clone(),
    };

    if is_ready {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
