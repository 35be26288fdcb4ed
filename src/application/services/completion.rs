use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ports::LlmService, DomainError, Message, PromptSpec};

/// A provider call bound to one prompt and a deadline. Shared by the
/// services so every endpoint gets the same timeout and message shape.
#[derive(Clone)]
pub struct Completion {
    llm: Arc<dyn LlmService>,
    prompt: PromptSpec,
    timeout: Duration,
}

impl Completion {
    pub fn new(llm: Arc<dyn LlmService>, prompt: PromptSpec, timeout: Duration) -> Self {
        Self {
            llm,
            prompt,
            timeout,
        }
    }

    pub fn messages(&self, vars: &[(&str, &str)]) -> Vec<Message> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = self.prompt.system.as_deref() {
            messages.push(Message::system(system));
        }
        messages.push(Message::user(self.prompt.user.render(vars)));
        messages
    }

    pub async fn run(&self, vars: &[(&str, &str)]) -> Result<String, DomainError> {
        let messages = self.messages(vars);

        tokio::time::timeout(self.timeout, self.llm.chat(&messages))
            .await
            .map_err(|_| {
                DomainError::timeout(format!(
                    "provider did not answer within {}s",
                    self.timeout.as_secs_f32()
                ))
            })?
    }

    pub async fn run_json<T: DeserializeOwned>(
        &self,
        vars: &[(&str, &str)],
    ) -> Result<T, DomainError> {
        let text = self.run(vars).await?;
        serde_json::from_str(extract_json(&text))
            .map_err(|e| DomainError::malformed(format!("structured output rejected: {e}")))
    }
}

/// Pulls the JSON object out of a model answer, tolerating markdown code
/// fences and chatter before the opening brace.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    let unfenced = match trimmed.strip_prefix("```") {
        Some(rest) => {
            let body = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
            body.trim_end().strip_suffix("```").unwrap_or(body).trim()
        }
        None => trimmed,
    };

    match (unfenced.find('{'), unfenced.rfind('}')) {
        (Some(start), Some(end)) if start < end => &unfenced[start..=end],
        _ => unfenced,
    }
}
