use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// Logs one line per request. Query strings are left out since they carry
/// caller objectives.
pub async fn request_logger(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status();

    if status.is_server_error() {
        warn!(%method, %path, status = status.as_u16(), duration_ms, "Request failed");
    } else {
        info!(%method, %path, status = status.as_u16(), duration_ms, "Request completed");
    }

    response
}
