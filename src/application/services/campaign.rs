use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use super::Completion;
use crate::domain::{ports::LlmService, CampaignInsight, DomainError, PromptSpec};

pub const OBJECTIVE_VAR: &str = "objective";

/// Turns a marketing objective into a provider-written campaign outline.
///
/// The objective is not validated: whatever the caller sent is embedded in
/// the prompt and echoed back unchanged.
pub struct CampaignService {
    completion: Completion,
}

impl CampaignService {
    pub fn new(llm: Arc<dyn LlmService>, prompt: PromptSpec, timeout: Duration) -> Self {
        Self {
            completion: Completion::new(llm, prompt, timeout),
        }
    }

    #[instrument(skip(self, objective), fields(objective_len = objective.len()))]
    pub async fn generate(&self, objective: &str) -> Result<CampaignInsight, DomainError> {
        let insight = self.completion.run(&[(OBJECTIVE_VAR, objective)]).await?;
        tracing::debug!(insight_len = insight.len(), "campaign insight generated");
        Ok(CampaignInsight::new(objective, insight))
    }
}
