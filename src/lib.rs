//! MarketMind: a small HTTP service that turns sales and marketing questions
//! into prompts for a chat-completion provider and returns the answers.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod test_support;
