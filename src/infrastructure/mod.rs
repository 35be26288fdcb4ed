pub mod config;
pub mod llm;

pub use config::{AppConfig, Config, ConfigError, PromptsConfig};
pub use llm::OpenAiChatClient;
