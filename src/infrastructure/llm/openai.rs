use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::{ports::LlmService, DomainError, Message};
use crate::infrastructure::config::{ApiKey, LlmConfig};

const ERROR_BODY_LIMIT: usize = 512;

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// Holds one pooled `reqwest::Client`; cheap to share behind an `Arc`. The
/// deadline for a call is enforced by the application layer.
pub struct OpenAiChatClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<ApiKey>,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiChatClient {
    pub fn new(config: &LlmConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    pub fn with_http_client(http: reqwest::Client, config: &LlmConfig) -> Self {
        Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LlmService for OpenAiChatClient {
    async fn chat(&self, messages: &[Message]) -> Result<String, DomainError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| DomainError::configuration("OPENAI_API_KEY is not set"))?;

        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(error = %e, %status, "failed to read provider error body");
                    String::new()
                }
            };
            return Err(classify_status(status, &detail));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| DomainError::malformed(e.to_string()))?;

        first_choice_text(parsed)
    }
}

fn first_choice_text(response: ChatCompletionResponse) -> Result<String, DomainError> {
    response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| DomainError::malformed("response contained no choices"))?
        .message
        .content
        .ok_or_else(|| DomainError::malformed("first choice has no text content"))
}

fn classify_transport(err: reqwest::Error) -> DomainError {
    if err.is_timeout() {
        DomainError::timeout(err.to_string())
    } else {
        DomainError::external(err.to_string())
    }
}

fn classify_status(status: StatusCode, body: &str) -> DomainError {
    let detail = format!("{status}: {}", truncate(body, ERROR_BODY_LIMIT));
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => DomainError::authentication(detail),
        StatusCode::TOO_MANY_REQUESTS => DomainError::rate_limited(detail),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => DomainError::timeout(detail),
        _ => DomainError::external(detail),
    }
}

fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
