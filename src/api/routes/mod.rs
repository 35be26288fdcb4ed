pub mod campaign;
pub mod health;
pub mod home;
pub mod market;
pub mod pitch;

use axum::extract::Request;
use axum::http::{header, Method};
use axum::{middleware, routing::get, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::{middleware::request_logger, state::AppState};

pub fn create_router(state: AppState) -> Router {
    let cors = build_cors(&state.config.config.cors.allowed_origins);

    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/generate-campaign", post(campaign::generate_campaign))
        .route("/analyze-market", post(market::analyze_market))
        .route("/generate-pitch", post(pitch::generate_pitch))
        .layer(middleware::from_fn(request_logger))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(cors)
        .with_state(state)
}

/// Span for one request. Only the path is recorded: query strings carry
/// caller objectives.
fn request_span(request: &Request) -> tracing::Span {
    tracing::debug_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    use crate::domain::DomainError;
    use crate::infrastructure::{config::ApiKey, AppConfig};
    use crate::test_support::{FakeLlm, LogCapture};

    fn app_with(config: AppConfig, llm: Arc<FakeLlm>) -> Router {
        create_router(AppState::new(config, llm))
    }

    fn app(llm: Arc<FakeLlm>) -> Router {
        app_with(AppConfig::default(), llm)
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_root_returns_welcome() {
        let llm = Arc::new(FakeLlm::replying("unused"));

        for uri in ["/", "/?objective=ignored"] {
            let (status, body) = send(app(llm.clone()), "GET", uri, None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({ "message": home::WELCOME_MESSAGE }));
        }
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_generate_campaign_scenario() {
        let llm = Arc::new(FakeLlm::replying("1. Target Audience: first-time buyers"));

        let (status, body) = send(
            app(llm.clone()),
            "POST",
            "/generate-campaign?objective=Launch%20a%20budget%20smartphone%20in%20India",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "objective": "Launch a budget smartphone in India",
                "ai_insight": "1. Target Audience: first-time buyers"
            })
        );

        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0][0]
            .content
            .contains("Launch a budget smartphone in India"));
    }

    #[tokio::test]
    async fn test_generate_campaign_echoes_special_characters() {
        let llm = Arc::new(FakeLlm::replying("ok"));

        let (status, body) = send(
            app(llm.clone()),
            "POST",
            "/generate-campaign?objective=50%25%20off%20%26%20%7Bfree%7D%20caf%C3%A9",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["objective"], "50% off & {free} café");
        assert!(llm.calls()[0][0].content.contains("50% off & {free} café"));
    }

    #[tokio::test]
    async fn test_request_logs_omit_query() {
        let logs = LogCapture::default();
        let _guard = logs.install();
        let llm = Arc::new(FakeLlm::replying("ok"));

        let (status, _) = send(
            app(llm),
            "POST",
            "/generate-campaign?objective=SECRET_PLAN",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let output = logs.contents();
        assert!(output.contains("path=/generate-campaign"));
        assert!(!output.contains("SECRET_PLAN"));
    }

    #[tokio::test]
    async fn test_generate_campaign_accepts_empty_objective() {
        let llm = Arc::new(FakeLlm::replying("ok"));

        let (status, body) = send(app(llm), "POST", "/generate-campaign?objective=", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["objective"], "");
    }

    #[tokio::test]
    async fn test_generate_campaign_requires_objective() {
        let llm = Arc::new(FakeLlm::replying("unused"));

        let (status, _) = send(app(llm.clone()), "POST", "/generate-campaign", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_generate_campaign_rejects_get() {
        let llm = Arc::new(FakeLlm::replying("unused"));
        let (status, _) = send(app(llm), "GET", "/generate-campaign?objective=x", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_generate_campaign_provider_failure() {
        let llm = Arc::new(FakeLlm::failing(|| {
            DomainError::authentication("401 Unauthorized: invalid key")
        }));

        let (status, body) = send(app(llm), "POST", "/generate-campaign?objective=x", None).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.get("ai_insight").is_none());
        assert_eq!(body["error"], "Bad Gateway");
    }

    #[tokio::test]
    async fn test_generate_campaign_timeout() {
        let mut config = AppConfig::default();
        config.config.llm.timeout_seconds = 0;
        let llm = Arc::new(FakeLlm::hanging());

        let (status, body) = tokio::time::timeout(
            Duration::from_secs(5),
            send(app_with(config, llm), "POST", "/generate-campaign?objective=x", None),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert!(body.get("ai_insight").is_none());
    }

    #[tokio::test]
    async fn test_health_and_readiness() {
        let llm = Arc::new(FakeLlm::replying("unused"));

        let (status, body) = send(app(llm.clone()), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) = send(app(llm.clone()), "GET", "/ready", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["provider"], "missing_api_key");

        let mut config = AppConfig::default();
        config.config.llm.api_key = Some(ApiKey::new("sk-test"));
        let (status, body) = send(app_with(config, llm), "GET", "/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn test_analyze_market() {
        let llm = Arc::new(FakeLlm::replying(
            r#"{"summary":"Steady growth","trends":[],"opportunities":["EDR for SMB"],"competitors":[]}"#,
        ));

        let (status, body) = send(
            app(llm),
            "POST",
            "/analyze-market?industry=Cybersecurity",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["industry"], "Cybersecurity");
        assert_eq!(body["summary"], "Steady growth");
        assert_eq!(body["opportunities"][0], "EDR for SMB");
    }

    #[tokio::test]
    async fn test_analyze_market_blank_industry() {
        let llm = Arc::new(FakeLlm::replying("unused"));
        let (status, body) = send(app(llm), "POST", "/analyze-market?industry=%20", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad Request");
    }

    #[tokio::test]
    async fn test_analyze_market_unstructured_answer() {
        let llm = Arc::new(FakeLlm::replying("Sorry, no data."));
        let (status, _) = send(app(llm), "POST", "/analyze-market?industry=SaaS", None).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_generate_pitch() {
        let llm = Arc::new(FakeLlm::replying(
            r#"{"opening":"Hi Alex","valueProp":"Scale","handlingObjections":["Budget"],"closing":"Next week?"}"#,
        ));

        let (status, body) = send(
            app(llm.clone()),
            "POST",
            "/generate-pitch",
            Some(json!({
                "name": "Alex Rivera",
                "company": "CloudScale Inc.",
                "industry": "SaaS"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valueProp"], "Scale");
        assert_eq!(body["handlingObjections"], json!(["Budget"]));
        assert!(llm.calls()[0]
            .last()
            .unwrap()
            .content
            .contains("Alex Rivera from CloudScale Inc. in the SaaS sector"));
    }

    #[tokio::test]
    async fn test_generate_pitch_missing_fields() {
        let llm = Arc::new(FakeLlm::replying("unused"));

        let (status, _) = send(
            app(llm.clone()),
            "POST",
            "/generate-pitch",
            Some(json!({ "company": "Nova Health" })),
        )
        .await;
        assert!(status.is_client_error());

        let (status, _) = send(
            app(llm.clone()),
            "POST",
            "/generate-pitch",
            Some(json!({ "name": "Sarah Chen", "company": "", "industry": "Healthtech" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(llm.calls().is_empty());
    }
}
