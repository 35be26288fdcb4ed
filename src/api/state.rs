use std::sync::Arc;

use crate::application::{CampaignService, MarketIntelligenceService, PitchService};
use crate::domain::ports::LlmService;
use crate::infrastructure::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub campaign_service: Arc<CampaignService>,
    pub market_service: Arc<MarketIntelligenceService>,
    pub pitch_service: Arc<PitchService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wires every service to the same provider, prompts and deadline.
    pub fn new(config: AppConfig, llm: Arc<dyn LlmService>) -> Self {
        let timeout = config.config.llm.timeout();
        let prompts = &config.prompts;

        let campaign_service = Arc::new(CampaignService::new(
            llm.clone(),
            prompts.campaign.clone(),
            timeout,
        ));
        let market_service = Arc::new(MarketIntelligenceService::new(
            llm.clone(),
            prompts.market.clone(),
            timeout,
        ));
        let pitch_service = Arc::new(PitchService::new(
            llm,
            prompts.pitch.clone(),
            timeout,
            config.config.pitch.default_product.clone(),
        ));

        Self {
            campaign_service,
            market_service,
            pitch_service,
            config: Arc::new(config),
        }
    }
}
