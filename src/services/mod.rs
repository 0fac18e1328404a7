pub mod prompt_service;
pub mod serializers;

pub use prompt_service::PromptService;
