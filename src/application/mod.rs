//! Application layer - Use cases and orchestration.
//!
//! Services here turn caller input into prompts, hand them to an
//! [`LlmService`](crate::domain::ports::LlmService) under a bounded timeout and
//! shape the answer. They depend on domain ports, never on a concrete
//! provider.

pub mod services;

pub use services::{CampaignService, MarketIntelligenceService, PitchService};
