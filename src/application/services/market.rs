use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use super::Completion;
use crate::domain::{ports::LlmService, DomainError, IntelligenceReport, PromptSpec};

pub const INDUSTRY_VAR: &str = "industry";

pub struct MarketIntelligenceService {
    completion: Completion,
}

impl MarketIntelligenceService {
    pub fn new(llm: Arc<dyn LlmService>, prompt: PromptSpec, timeout: Duration) -> Self {
        Self {
            completion: Completion::new(llm, prompt, timeout),
        }
    }

    /// Asks the provider for a structured report on `industry`.
    #[instrument(skip(self))]
    pub async fn analyze(&self, industry: &str) -> Result<IntelligenceReport, DomainError> {
        let industry = industry.trim();
        if industry.is_empty() {
            return Err(DomainError::validation("industry must not be empty"));
        }

        let report: IntelligenceReport =
            self.completion.run_json(&[(INDUSTRY_VAR, industry)]).await?;

        tracing::debug!(
            trends = report.trends.len(),
            competitors = report.competitors.len(),
            "market report parsed"
        );
        Ok(report)
    }
}
