use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::DomainError;

/// Handler error. The response only carries the status reason; the domain
/// error itself is logged and never sent to the caller.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            DomainError::Authentication(_)
            | DomainError::RateLimited(_)
            | DomainError::ExternalService(_)
            | DomainError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            DomainError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, status = status.as_u16(), "request failed");
        } else {
            tracing::warn!(error = %self.0, status = status.as_u16(), "request rejected");
        }

        let reason = status.canonical_reason().unwrap_or("Error");
        (status, Json(json!({ "error": reason }))).into_response()
    }
}
