use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::PromptSpec;

pub const CONFIG_PATH_ENV: &str = "MARKETMIND_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Everything the service needs at startup, built once and shared behind an
/// `Arc`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(flatten)]
    pub config: Config,
    #[serde(default)]
    pub prompts: PromptsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub cors: CorsConfig,
    pub pitch: PitchConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_seconds: u64,
    pub api_key: Option<ApiKey>,
}

impl LlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4".to_string(),
            timeout_seconds: 60,
            api_key: None,
        }
    }
}

/// Provider credential. Never printed.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Empty or containing `*` means any origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PitchConfig {
    pub default_product: String,
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            default_product: "Market Mind AI Enterprise intelligence platform".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    pub campaign: PromptSpec,
    pub market: PromptSpec,
    pub pitch: PromptSpec,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            campaign: PromptSpec::new(
                "You are a Sales and Marketing Intelligence AI.\n\
                 \n\
                 Based on the objective below, provide:\n\
                 1. Target Audience\n\
                 2. Best Marketing Channels\n\
                 3. Campaign Idea\n\
                 \n\
                 Objective:\n\
                 {objective}\n",
            ),
            market: PromptSpec::new(
                "Analyze the current state of the {industry} industry.\n\
                 Respond with a JSON object with these keys:\n\
                 - summary: string, an executive summary\n\
                 - trends: array of {\"topic\", \"sentiment\" (positive|neutral|negative), \
                 \"growth\" (number, percent), \"description\"}\n\
                 - opportunities: array of strings\n\
                 - competitors: array of {\"competitor\", \"strategy\", \
                 \"threatLevel\" (low|medium|high), \"notes\"}\n",
            )
            .with_system(
                "You are a market intelligence analyst for B2B sales teams. \
                 Answer with a single JSON object and nothing else.",
            ),
            pitch: PromptSpec::new(
                "Write a personalized sales script for {prospect}, pitching {product}.\n\
                 Respond with a JSON object with these keys:\n\
                 - opening: string\n\
                 - valueProp: string\n\
                 - handlingObjections: array of strings\n\
                 - closing: string\n",
            )
            .with_system(
                "You are a senior sales copilot. \
                 Answer with a single JSON object and nothing else.",
            ),
        }
    }
}

impl AppConfig {
    /// Reads the YAML file named by `MARKETMIND_CONFIG` (or `config.yaml`),
    /// then applies environment overrides. A missing file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = Self::from_file(&path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_yaml(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(raw)?;
        if config.config.llm.timeout_seconds == 0 {
            return Err(ConfigError::Invalid {
                key: "llm.timeout_seconds",
                value: "0".to_string(),
            });
        }
        Ok(config)
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = lookup("SERVER_HOST") {
            self.config.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.config.server.port = parse("SERVER_PORT", port)?;
        }
        if let Some(key) = lookup("OPENAI_API_KEY") {
            self.config.llm.api_key = Some(ApiKey::new(key.trim()));
        }
        if let Some(url) = lookup("OPENAI_BASE_URL") {
            self.config.llm.base_url = url;
        }
        if let Some(model) = lookup("LLM_MODEL") {
            self.config.llm.model = model;
        }
        if let Some(timeout) = lookup("LLM_TIMEOUT_SECONDS") {
            let seconds: u64 = parse("LLM_TIMEOUT_SECONDS", timeout.clone())?;
            if seconds == 0 {
                return Err(ConfigError::Invalid {
                    key: "LLM_TIMEOUT_SECONDS",
                    value: timeout,
                });
            }
            self.config.llm.timeout_seconds = seconds;
        }
        if let Some(origins) = lookup("CORS_ALLOWED_ORIGINS") {
            self.config.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    let parsed = value.trim().parse().ok();
    parsed.ok_or(ConfigError::Invalid { key, value })
}
