use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use super::Completion;
use crate::domain::{ports::LlmService, DomainError, PromptSpec, Prospect, SalesScript};

pub const PROSPECT_VAR: &str = "prospect";
pub const PRODUCT_VAR: &str = "product";

pub struct PitchService {
    completion: Completion,
    default_product: String,
}

impl PitchService {
    pub fn new(
        llm: Arc<dyn LlmService>,
        prompt: PromptSpec,
        timeout: Duration,
        default_product: impl Into<String>,
    ) -> Self {
        Self {
            completion: Completion::new(llm, prompt, timeout),
            default_product: default_product.into(),
        }
    }

    /// Drafts a sales script for `prospect`. Falls back to the configured
    /// product when none is given.
    #[instrument(skip(self, prospect), fields(company = %prospect.company))]
    pub async fn generate(
        &self,
        prospect: &Prospect,
        product: Option<&str>,
    ) -> Result<SalesScript, DomainError> {
        if prospect.is_incomplete() {
            return Err(DomainError::validation(
                "prospect name, company and industry must not be empty",
            ));
        }

        let product = product
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(self.default_product.as_str());
        let description = prospect.describe();

        self.completion
            .run_json(&[(PROSPECT_VAR, description.as_str()), (PRODUCT_VAR, product)])
            .await
    }
}
