mod llm;

pub use llm::LlmService;
