mod campaign;
mod intelligence;
mod message;
mod pitch;
mod prompt;

pub use campaign::CampaignInsight;
pub use intelligence::{
    CompetitiveInsight, IntelligenceReport, MarketTrend, Sentiment, ThreatLevel,
};
pub use message::{Message, MessageRole};
pub use pitch::{Prospect, SalesScript};
pub use prompt::{PromptSpec, PromptTemplate};
