mod campaign;
mod completion;
mod market;
mod pitch;

pub use campaign::CampaignService;
pub use completion::{extract_json, Completion};
pub use market::MarketIntelligenceService;
pub use pitch::PitchService;
