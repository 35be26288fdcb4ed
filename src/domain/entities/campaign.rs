use serde::{Deserialize, Serialize};

/// Envelope returned for a campaign request: the caller's objective echoed
/// back beside the provider's free-text answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignInsight {
    pub objective: String,
    pub ai_insight: String,
}

impl CampaignInsight {
    pub fn new(objective: impl Into<String>, ai_insight: impl Into<String>) -> Self {
        Self {
            objective: objective.into(),
            ai_insight: ai_insight.into(),
        }
    }
}
