use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::api::{error::ApiError, state::AppState};
use crate::domain::CampaignInsight;

#[derive(Debug, Deserialize)]
pub struct CampaignQuery {
    pub objective: String,
}

pub async fn generate_campaign(
    State(state): State<AppState>,
    Query(query): Query<CampaignQuery>,
) -> Result<Json<CampaignInsight>, ApiError> {
    let insight = state.campaign_service.generate(&query.objective).await?;
    Ok(Json(insight))
}
