use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::{error::ApiError, state::AppState};
use crate::domain::IntelligenceReport;

#[derive(Debug, Deserialize)]
pub struct MarketQuery {
    pub industry: String,
}

#[derive(Debug, Serialize)]
pub struct MarketIntelligenceResponse {
    pub industry: String,
    #[serde(flatten)]
    pub report: IntelligenceReport,
}

pub async fn analyze_market(
    State(state): State<AppState>,
    Query(query): Query<MarketQuery>,
) -> Result<Json<MarketIntelligenceResponse>, ApiError> {
    let report = state.market_service.analyze(&query.industry).await?;
    Ok(Json(MarketIntelligenceResponse {
        industry: query.industry.trim().to_string(),
        report,
    }))
}
