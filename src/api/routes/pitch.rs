use axum::{extract::State, Json};
use serde::Deserialize;

use crate::api::{error::ApiError, state::AppState};
use crate::domain::{Prospect, SalesScript};

#[derive(Debug, Deserialize)]
pub struct PitchRequest {
    #[serde(flatten)]
    pub prospect: Prospect,
    pub product: Option<String>,
}

pub async fn generate_pitch(
    State(state): State<AppState>,
    Json(request): Json<PitchRequest>,
) -> Result<Json<SalesScript>, ApiError> {
    let script = state
        .pitch_service
        .generate(&request.prospect, request.product.as_deref())
        .await?;
    Ok(Json(script))
}
