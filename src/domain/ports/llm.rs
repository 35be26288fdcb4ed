use crate::domain::{errors::DomainError, Message};
use async_trait::async_trait;

/// A chat-completion provider. Implementations return the text of the first
/// choice, or a classified error.
#[async_trait]
pub trait LlmService: Send + Sync {
    async fn chat(&self, messages: &[Message]) -> Result<String, DomainError>;
}
