use axum::Json;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str =
    "Welcome to MarketMind – AI Sales & Marketing Intelligence Platform";

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

pub async fn home() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}
